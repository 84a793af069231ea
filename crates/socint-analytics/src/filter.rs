//! Per-analysis filter state and the option sets it can draw from.
//!
//! An empty platform/post/keyword set means "no restriction / all
//! included", never "nothing selected". Consumers must honor that reading.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use socint_core::{Entity, EntityKind, TimeSeriesPoint};

/// Default lookback for a freshly opened analysis view.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Platform labels recognized in brand post URLs, matched by hostname
/// substring. A URL can match zero or several patterns.
const PLATFORM_PATTERNS: &[(&[&str], &str)] = &[
    (&["twitter.com", "x.com"], "Twitter/X"),
    (&["facebook.com"], "Facebook"),
    (&["instagram.com"], "Instagram"),
    (&["linkedin.com"], "LinkedIn"),
    (&["youtube.com"], "YouTube"),
    (&["reddit.com"], "Reddit"),
    (&["tiktok.com"], "TikTok"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("keyword filters only apply to brand analysis")]
    KeywordsNotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// User-adjustable narrowing criteria for one entity's analysis view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub date_range: DateRange,
    pub platforms: BTreeSet<String>,
    pub posts: BTreeSet<String>,
    /// `Some` only for brand views; `None` elsewhere.
    pub keywords: Option<BTreeSet<String>>,
}

impl FilterState {
    /// The defaults a freshly opened analysis view starts from: the last
    /// [`DEFAULT_RANGE_DAYS`] days, nothing excluded.
    #[must_use]
    pub fn default_for(kind: EntityKind, today: NaiveDate) -> Self {
        Self {
            date_range: default_date_range(today),
            platforms: BTreeSet::new(),
            posts: BTreeSet::new(),
            keywords: match kind {
                EntityKind::Brand => Some(BTreeSet::new()),
                EntityKind::Campaign | EntityKind::Content => None,
            },
        }
    }

    /// Replace the date range.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidDateRange`] when `start > end`; the
    /// state is unchanged in that case.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), FilterError> {
        if start > end {
            return Err(FilterError::InvalidDateRange { start, end });
        }
        self.date_range = DateRange { start, end };
        Ok(())
    }

    /// Add (`selected = true`) or remove a platform from the set.
    pub fn toggle_platform(&mut self, platform: &str, selected: bool) {
        toggle(&mut self.platforms, platform, selected);
    }

    /// Add (`selected = true`) or remove a post URL from the set.
    pub fn toggle_post(&mut self, post_url: &str, selected: bool) {
        toggle(&mut self.posts, post_url, selected);
    }

    /// Add (`selected = true`) or remove a keyword from the set.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::KeywordsNotSupported`] on non-brand filters.
    pub fn toggle_keyword(&mut self, keyword: &str, selected: bool) -> Result<(), FilterError> {
        let keywords = self
            .keywords
            .as_mut()
            .ok_or(FilterError::KeywordsNotSupported)?;
        toggle(keywords, keyword, selected);
        Ok(())
    }

    /// Restore the defaults regardless of prior state. Keyword support
    /// (brand vs. not) is preserved; the set itself is emptied.
    pub fn reset(&mut self, today: NaiveDate) {
        self.date_range = default_date_range(today);
        self.platforms.clear();
        self.posts.clear();
        if let Some(keywords) = &mut self.keywords {
            keywords.clear();
        }
    }

    /// The points of `series` that fall inside the date range (inclusive on
    /// both ends). This is the one filter dimension that narrows the
    /// underlying data; the set filters only scope what a renderer shows.
    #[must_use]
    pub fn clip_series(&self, series: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
        series
            .iter()
            .filter(|p| p.date >= self.date_range.start && p.date <= self.date_range.end)
            .copied()
            .collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, item: &str, selected: bool) {
    if selected {
        set.insert(item.to_string());
    } else {
        set.remove(item);
    }
}

fn default_date_range(today: NaiveDate) -> DateRange {
    DateRange {
        start: today - chrono::Duration::days(DEFAULT_RANGE_DAYS),
        end: today,
    }
}

/// The platforms an analysis view of `entity` can filter on.
///
/// Campaigns carry an explicit platform list; content is pinned to its one
/// platform; brand platforms are derived from post URLs via
/// [`PLATFORM_PATTERNS`].
#[must_use]
pub fn available_platforms(entity: &Entity) -> Vec<String> {
    match entity {
        Entity::Campaign(c) => c.platforms.clone(),
        Entity::Brand(b) => detect_platforms(&b.post_urls),
        Entity::Content(c) => vec![c.platform.clone()],
    }
}

/// The post URLs an analysis view of `entity` can filter on.
#[must_use]
pub fn available_posts(entity: &Entity) -> Vec<String> {
    match entity {
        Entity::Campaign(c) => c.post_urls.clone(),
        Entity::Brand(b) => b.post_urls.clone(),
        Entity::Content(c) => vec![c.post_url.clone()],
    }
}

/// The keywords an analysis view of `entity` can filter on — brand only.
#[must_use]
pub fn available_keywords(entity: &Entity) -> Vec<String> {
    match entity {
        Entity::Brand(b) => b.keywords.clone(),
        Entity::Campaign(_) | Entity::Content(_) => Vec::new(),
    }
}

fn detect_platforms(urls: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for url in urls {
        for (needles, label) in PLATFORM_PATTERNS {
            if needles.iter().any(|needle| url.contains(needle))
                && !found.iter().any(|f| f == label)
            {
                found.push((*label).to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use socint_core::{Brand, BrandStatus};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn brand_with_urls(urls: &[&str]) -> Entity {
        Entity::Brand(Brand {
            id: "brand_t".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            post_urls: urls.iter().map(|u| (*u).to_string()).collect(),
            keywords: vec!["ev".to_string(), "charging".to_string()],
            category: "Automotive".to_string(),
            status: BrandStatus::Active,
            created_date: day(2026, 1, 1),
            competitors: Vec::new(),
        })
    }

    #[test]
    fn defaults_cover_the_last_30_days() {
        let today = day(2026, 8, 6);
        let state = FilterState::default_for(EntityKind::Campaign, today);
        assert_eq!(state.date_range.start, day(2026, 7, 7));
        assert_eq!(state.date_range.end, today);
        assert!(state.platforms.is_empty());
        assert!(state.posts.is_empty());
        assert!(state.keywords.is_none());
    }

    #[test]
    fn brand_defaults_carry_an_empty_keyword_set() {
        let state = FilterState::default_for(EntityKind::Brand, day(2026, 8, 6));
        assert_eq!(state.keywords.as_ref().map(BTreeSet::len), Some(0));
    }

    #[test]
    fn reversed_range_is_rejected_and_state_kept() {
        let mut state = FilterState::default_for(EntityKind::Campaign, day(2026, 8, 6));
        let before = state.date_range;
        let err = state
            .set_date_range(day(2026, 8, 10), day(2026, 8, 1))
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidDateRange { .. }));
        assert_eq!(state.date_range, before);
    }

    #[test]
    fn toggles_add_and_remove_set_members() {
        let mut state = FilterState::default_for(EntityKind::Campaign, day(2026, 8, 6));
        state.toggle_platform("YouTube", true);
        state.toggle_platform("YouTube", true);
        assert_eq!(state.platforms.len(), 1);
        state.toggle_platform("YouTube", false);
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn keyword_toggle_on_campaign_filter_is_rejected() {
        let mut state = FilterState::default_for(EntityKind::Campaign, day(2026, 8, 6));
        assert_eq!(
            state.toggle_keyword("ev", true),
            Err(FilterError::KeywordsNotSupported)
        );
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let today = day(2026, 8, 6);
        let mut state = FilterState::default_for(EntityKind::Brand, today);
        state.set_date_range(day(2026, 1, 1), day(2026, 2, 1)).unwrap();
        state.toggle_platform("Reddit", true);
        state.toggle_post("https://example.com/p", true);
        state.toggle_keyword("ev", true).unwrap();

        state.reset(today);

        assert_eq!(state.date_range.start, today - chrono::Duration::days(30));
        assert_eq!(state.date_range.end, today);
        assert!(state.platforms.is_empty());
        assert!(state.posts.is_empty());
        assert_eq!(state.keywords.as_ref().map(BTreeSet::len), Some(0));
    }

    #[test]
    fn brand_platforms_derived_from_urls() {
        let entity = brand_with_urls(&["https://twitter.com/x", "https://youtube.com/y"]);
        let mut platforms = available_platforms(&entity);
        platforms.sort();
        assert_eq!(platforms, vec!["Twitter/X", "YouTube"]);
    }

    #[test]
    fn unrecognized_brand_urls_yield_no_platforms() {
        let entity = brand_with_urls(&["https://example.com/blog", "https://news.site/a"]);
        assert!(available_platforms(&entity).is_empty());
    }

    #[test]
    fn duplicate_platform_hits_are_collapsed() {
        let entity = brand_with_urls(&[
            "https://twitter.com/a",
            "https://x.com/b",
            "https://reddit.com/r/c",
        ]);
        let platforms = available_platforms(&entity);
        assert_eq!(platforms, vec!["Twitter/X", "Reddit"]);
    }

    #[test]
    fn content_yields_singleton_platform_and_post() {
        use socint_core::{Content, ContentStatus, ContentType};
        let entity = Entity::Content(Content {
            id: "content_t".to_string(),
            title: "T".to_string(),
            description: String::new(),
            post_url: "https://youtube.com/watch?v=1".to_string(),
            platform: "YouTube".to_string(),
            content_type: ContentType::Video,
            author: "a".to_string(),
            created_date: day(2026, 1, 1),
            publish_date: None,
            status: ContentStatus::Published,
            tags: Vec::new(),
        });
        assert_eq!(available_platforms(&entity), vec!["YouTube"]);
        assert_eq!(
            available_posts(&entity),
            vec!["https://youtube.com/watch?v=1"]
        );
        assert!(available_keywords(&entity).is_empty());
    }

    #[test]
    fn brand_keywords_are_the_available_keywords() {
        let entity = brand_with_urls(&[]);
        assert_eq!(available_keywords(&entity), vec!["ev", "charging"]);
    }

    #[test]
    fn clip_series_is_inclusive_on_both_ends() {
        let mut state = FilterState::default_for(EntityKind::Campaign, day(2026, 8, 6));
        state
            .set_date_range(day(2026, 7, 2), day(2026, 7, 4))
            .unwrap();
        let series: Vec<TimeSeriesPoint> = (1..=6)
            .map(|d| TimeSeriesPoint {
                date: day(2026, 7, d),
                sentiment: 70.0,
                mentions: 100,
                engagement: 10.0,
                positive: 50.0,
                negative: 20.0,
                neutral: 30.0,
            })
            .collect();
        let clipped = state.clip_series(&series);
        let dates: Vec<NaiveDate> = clipped.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2026, 7, 2), day(2026, 7, 3), day(2026, 7, 4)]);
    }
}
