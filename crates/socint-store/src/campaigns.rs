//! In-memory store for campaigns.

use socint_core::{ids, Campaign, CampaignDraft, CampaignStatus, EntityKind};

use crate::store::{contains_ci, Record, Store};
use crate::StoreError;

impl Record for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
}

/// List predicates, AND-composed. `None` status means "all".
#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub search: String,
    pub status: Option<CampaignStatus>,
}

impl CampaignFilter {
    fn matches(&self, campaign: &Campaign) -> bool {
        let matches_search = contains_ci(&campaign.name, &self.search)
            || contains_ci(&campaign.description, &self.search);
        let matches_status = self.status.map_or(true, |s| campaign.status == s);
        matches_search && matches_status
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignStore {
    inner: Store<Campaign>,
}

impl CampaignStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seeded(campaigns: Vec<Campaign>) -> Self {
        Self {
            inner: Store::from_records(campaigns),
        }
    }

    /// Create a campaign from raw form input: generated id, `created_date`
    /// set to today, multi-valued fields parsed per the trim/drop-empty
    /// contract. Names are not checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Draft`] on malformed date text.
    pub fn create(&mut self, draft: &CampaignDraft) -> Result<&Campaign, StoreError> {
        let id = ids::generate(EntityKind::Campaign);
        let campaign = draft.build(id, ids::today())?;
        tracing::debug!(id = %campaign.id, name = %campaign.name, "campaign created");
        Ok(self.inner.push(campaign))
    }

    /// Replace every mutable field of the campaign with `id` from the draft,
    /// preserving id and `created_date`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown, or
    /// [`StoreError::Draft`] on malformed date text (the stored record is
    /// untouched in both cases).
    pub fn update(&mut self, id: &str, draft: &CampaignDraft) -> Result<&Campaign, StoreError> {
        let campaign = self
            .inner
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        draft.apply(campaign)?;
        tracing::debug!(id, "campaign updated");
        Ok(&*campaign)
    }

    /// Remove the campaign with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown; the
    /// collection is unchanged in that case.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.remove(id)?;
        tracing::debug!(id, "campaign removed");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Campaign> {
        self.inner.get(id)
    }

    /// All campaigns matching the filter, in insertion order.
    #[must_use]
    pub fn list(&self, filter: &CampaignFilter) -> Vec<&Campaign> {
        self.inner.iter().filter(|c| filter.matches(c)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
