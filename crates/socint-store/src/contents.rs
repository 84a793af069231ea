//! In-memory store for content pieces.

use socint_core::{ids, Content, ContentDraft, ContentStatus, ContentType, EntityKind};

use crate::store::{contains_ci, Record, Store};
use crate::StoreError;

impl Record for Content {
    fn id(&self) -> &str {
        &self.id
    }
}

/// List predicates, AND-composed. `None` means "all"; platform and content
/// type are exact matches.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub search: String,
    pub status: Option<ContentStatus>,
    pub platform: Option<String>,
    pub content_type: Option<ContentType>,
}

impl ContentFilter {
    fn matches(&self, content: &Content) -> bool {
        let matches_search = contains_ci(&content.title, &self.search)
            || contains_ci(&content.description, &self.search)
            || contains_ci(&content.author, &self.search)
            || content.tags.iter().any(|t| contains_ci(t, &self.search));
        let matches_status = self.status.map_or(true, |s| content.status == s);
        let matches_platform = self
            .platform
            .as_deref()
            .map_or(true, |p| content.platform == p);
        let matches_type = self
            .content_type
            .map_or(true, |t| content.content_type == t);
        matches_search && matches_status && matches_platform && matches_type
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    inner: Store<Content>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seeded(contents: Vec<Content>) -> Self {
        Self {
            inner: Store::from_records(contents),
        }
    }

    /// Create a content record from raw form input: generated id,
    /// `created_date` set to today, tags parsed per the trim/drop-empty
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Draft`] on malformed date text.
    pub fn create(&mut self, draft: &ContentDraft) -> Result<&Content, StoreError> {
        let id = ids::generate(EntityKind::Content);
        let content = draft.build(id, ids::today())?;
        tracing::debug!(id = %content.id, title = %content.title, "content created");
        Ok(self.inner.push(content))
    }

    /// Replace every mutable field of the content record with `id` from the
    /// draft, preserving id and `created_date`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown, or
    /// [`StoreError::Draft`] on malformed date text.
    pub fn update(&mut self, id: &str, draft: &ContentDraft) -> Result<&Content, StoreError> {
        let content = self
            .inner
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        draft.apply(content)?;
        tracing::debug!(id, "content updated");
        Ok(&*content)
    }

    /// Remove the content record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown; the
    /// collection is unchanged in that case.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.remove(id)?;
        tracing::debug!(id, "content removed");
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Content> {
        self.inner.get(id)
    }

    /// All content records matching the filter, in insertion order.
    #[must_use]
    pub fn list(&self, filter: &ContentFilter) -> Vec<&Content> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, author: &str, platform: &str, tags: &str) -> ContentDraft {
        ContentDraft {
            title: title.to_string(),
            author: author.to_string(),
            platform: platform.to_string(),
            tags: tags.to_string(),
            ..ContentDraft::default()
        }
    }

    #[test]
    fn search_matches_author_and_tags() {
        let mut store = ContentStore::new();
        store
            .create(&draft("Launch recap", "newsroom", "YouTube", "launch, ev"))
            .unwrap();
        store
            .create(&draft("Teardown", "garage-weekly", "YouTube", "review"))
            .unwrap();

        let by_author = ContentFilter {
            search: "Newsroom".to_string(),
            ..ContentFilter::default()
        };
        assert_eq!(store.list(&by_author).len(), 1);

        let by_tag = ContentFilter {
            search: "ev".to_string(),
            ..ContentFilter::default()
        };
        // "ev" also substring-matches "review" via the tag list.
        assert_eq!(store.list(&by_tag).len(), 2);
    }

    #[test]
    fn platform_and_type_predicates_are_exact() {
        let mut store = ContentStore::new();
        store
            .create(&ContentDraft {
                title: "Clip".to_string(),
                platform: "YouTube".to_string(),
                content_type: ContentType::Video,
                ..ContentDraft::default()
            })
            .unwrap();
        store
            .create(&ContentDraft {
                title: "Thread".to_string(),
                platform: "Twitter/X".to_string(),
                content_type: ContentType::Post,
                ..ContentDraft::default()
            })
            .unwrap();

        let filter = ContentFilter {
            platform: Some("YouTube".to_string()),
            content_type: Some(ContentType::Video),
            ..ContentFilter::default()
        };
        let hits = store.list(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Clip");
    }

    #[test]
    fn create_defaults_to_published() {
        let mut store = ContentStore::new();
        let content = store
            .create(&draft("Post", "author", "Reddit", ""))
            .unwrap();
        assert_eq!(content.status, ContentStatus::Published);
    }
}
