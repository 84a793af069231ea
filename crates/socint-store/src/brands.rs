//! In-memory store for brands.

use socint_core::{ids, Brand, BrandDraft, BrandStatus, EntityKind};

use crate::store::{contains_ci, Record, Store};
use crate::StoreError;

impl Record for Brand {
    fn id(&self) -> &str {
        &self.id
    }
}

/// List predicates, AND-composed. `None` means "all" for both status and
/// category; category comparison is exact, not substring.
#[derive(Debug, Clone, Default)]
pub struct BrandFilter {
    pub search: String,
    pub status: Option<BrandStatus>,
    pub category: Option<String>,
}

impl BrandFilter {
    fn matches(&self, brand: &Brand) -> bool {
        let matches_search = contains_ci(&brand.name, &self.search)
            || contains_ci(&brand.description, &self.search)
            || brand.keywords.iter().any(|k| contains_ci(k, &self.search));
        let matches_status = self.status.map_or(true, |s| brand.status == s);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| brand.category == c);
        matches_search && matches_status && matches_category
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandStore {
    inner: Store<Brand>,
}

impl BrandStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seeded(brands: Vec<Brand>) -> Self {
        Self {
            inner: Store::from_records(brands),
        }
    }

    /// Create a brand from raw form input: generated id, `created_date` set
    /// to today, keyword/competitor lists parsed per the trim/drop-empty
    /// contract.
    pub fn create(&mut self, draft: &BrandDraft) -> &Brand {
        let id = ids::generate(EntityKind::Brand);
        let brand = draft.build(id, ids::today());
        tracing::debug!(id = %brand.id, name = %brand.name, "brand created");
        self.inner.push(brand)
    }

    /// Replace every mutable field of the brand with `id` from the draft,
    /// preserving id and `created_date`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown.
    pub fn update(&mut self, id: &str, draft: &BrandDraft) -> Result<&Brand, StoreError> {
        let brand = self
            .inner
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        draft.apply(brand);
        tracing::debug!(id, "brand updated");
        Ok(&*brand)
    }

    /// Remove the brand with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown; the
    /// collection is unchanged in that case.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.remove(id)?;
        tracing::debug!(id, "brand removed");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Brand> {
        self.inner.get(id)
    }

    /// All brands matching the filter, in insertion order.
    #[must_use]
    pub fn list(&self, filter: &BrandFilter) -> Vec<&Brand> {
        self.inner.iter().filter(|b| filter.matches(b)).collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, keywords: &str) -> BrandDraft {
        BrandDraft {
            name: name.to_string(),
            description: format!("{name} brand"),
            category: category.to_string(),
            keywords: keywords.to_string(),
            ..BrandDraft::default()
        }
    }

    #[test]
    fn create_parses_keywords_and_competitors() {
        let mut store = BrandStore::new();
        let brand = store.create(&BrandDraft {
            name: "Aurora".to_string(),
            keywords: "ev, charging , ".to_string(),
            competitors: "Volt Co,Ion Labs".to_string(),
            ..BrandDraft::default()
        });
        assert_eq!(brand.keywords, vec!["ev", "charging"]);
        assert_eq!(brand.competitors, vec!["Volt Co", "Ion Labs"]);
        assert_eq!(brand.status, BrandStatus::Active);
    }

    #[test]
    fn search_matches_keyword_elements() {
        let mut store = BrandStore::new();
        store.create(&draft("Aurora", "Automotive", "ev, charging"));
        store.create(&draft("Ion Labs", "Energy", "storage"));

        let filter = BrandFilter {
            search: "CHARGING".to_string(),
            ..BrandFilter::default()
        };
        let hits = store.list(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Aurora");
    }

    #[test]
    fn category_match_is_exact() {
        let mut store = BrandStore::new();
        store.create(&draft("Aurora", "Automotive", ""));
        store.create(&draft("Ion Labs", "Auto", ""));

        let filter = BrandFilter {
            category: Some("Auto".to_string()),
            ..BrandFilter::default()
        };
        let hits = store.list(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ion Labs");
    }

    #[test]
    fn update_missing_brand_is_not_found() {
        let mut store = BrandStore::new();
        let err = store
            .update("brand_0", &draft("Ghost", "", ""))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "brand_0"));
    }
}
