//! One dashboard session: the stores, the fixture repository, the
//! navigation state, and the filter attached to each open analysis view.
//!
//! Everything is synchronous and single-threaded; mutations happen in
//! response to discrete calls and derivation is total.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use socint_analytics::{
    available_keywords, available_platforms, available_posts, competitor_table, conversion_funnel,
    emotion_vector, kpi_summary, resolve_analysis, resolve_series, sentiment_breakdown,
    topic_table, trend, CompetitorRow, ConversionFunnel, EmotionRow, FilterState, KpiSummary,
    SentimentBreakdown, TopicRow, Trend, TrendField,
};
use socint_core::{ids, Entity, EntityKind, TimeSeriesPoint};
use socint_store::{BrandStore, CampaignStore, ContentStore, FixtureSet, SeedData};

use crate::nav::{Navigator, Pane, SubTab};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no {kind} with id '{id}'")]
    UnknownEntity { kind: EntityKind, id: String },
}

/// Trends for the three charted series fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trends {
    pub sentiment: Trend,
    pub mentions: Trend,
    pub engagement: Trend,
}

/// The option sets the filter sidebar offers for the selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub platforms: Vec<String>,
    pub posts: Vec<String>,
    pub keywords: Vec<String>,
}

/// Everything a renderer needs to draw one analysis view.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisBundle {
    pub entity_id: String,
    pub entity_label: String,
    pub entity_kind: EntityKind,
    pub analysis_date: NaiveDate,
    /// True when the analysis record is the fallback for an unknown id.
    pub analysis_fallback: bool,
    /// True when the series is the fallback for an unknown id.
    pub series_fallback: bool,
    pub kpis: KpiSummary,
    pub sentiment: SentimentBreakdown,
    pub emotions: Vec<EmotionRow>,
    pub topics: Vec<TopicRow>,
    pub competitors: Vec<CompetitorRow>,
    pub funnel: ConversionFunnel,
    /// Series points inside the filter's date range.
    pub series: Vec<TimeSeriesPoint>,
    /// Trends computed over the clipped series.
    pub trends: Trends,
    pub filter_options: FilterOptions,
}

pub struct Session {
    pub campaigns: CampaignStore,
    pub brands: BrandStore,
    pub contents: ContentStore,
    fixtures: FixtureSet,
    nav: Navigator,
    filters: HashMap<EntityKind, FilterState>,
    trend_window: usize,
}

impl Session {
    /// Build a session over seeded stores and fixtures.
    #[must_use]
    pub fn new(seed: SeedData, trend_window: usize) -> Self {
        Self {
            campaigns: CampaignStore::seeded(seed.campaigns),
            brands: BrandStore::seeded(seed.brands),
            contents: ContentStore::seeded(seed.contents),
            fixtures: seed.fixtures,
            nav: Navigator::new(),
            filters: HashMap::new(),
            trend_window,
        }
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    #[must_use]
    pub fn active_pane(&self) -> &Pane {
        self.nav.active_pane()
    }

    /// Switch the active domain tab. Other domains' panes and filters are
    /// untouched.
    pub fn switch_domain(&mut self, domain: EntityKind) {
        self.nav.switch_domain(domain);
    }

    /// Select an entity from its management view: switches to that domain,
    /// stores the selection, flips the pane to analysis, and initializes the
    /// view's filter to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownEntity`] when no entity of `kind` has
    /// the given id; navigation state is unchanged in that case.
    pub fn select(&mut self, kind: EntityKind, id: &str) -> Result<(), SessionError> {
        if self.find_entity(kind, id).is_none() {
            return Err(SessionError::UnknownEntity {
                kind,
                id: id.to_string(),
            });
        }
        self.nav.switch_domain(kind);
        self.nav.select(id.to_string());
        self.filters
            .insert(kind, FilterState::default_for(kind, ids::today()));
        tracing::debug!(%kind, id, "entity selected for analysis");
        Ok(())
    }

    /// Leave the active analysis view and drop its filter.
    pub fn back(&mut self) {
        let domain = self.nav.active_domain();
        self.nav.back();
        self.filters.remove(&domain);
    }

    /// Try to activate a sub-tab on the active pane; analysis stays
    /// disabled without a selection. Returns whether the transition applied.
    pub fn activate(&mut self, sub_tab: SubTab) -> bool {
        self.nav.activate(sub_tab)
    }

    /// The filter attached to the active domain's analysis view, if one is
    /// open.
    #[must_use]
    pub fn filter(&self) -> Option<&FilterState> {
        self.filters.get(&self.nav.active_domain())
    }

    pub fn filter_mut(&mut self) -> Option<&mut FilterState> {
        self.filters.get_mut(&self.nav.active_domain())
    }

    /// Look up an entity as the tagged union, cloning out of its store.
    #[must_use]
    pub fn find_entity(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        match kind {
            EntityKind::Campaign => self.campaigns.get(id).cloned().map(Entity::Campaign),
            EntityKind::Brand => self.brands.get(id).cloned().map(Entity::Brand),
            EntityKind::Content => self.contents.get(id).cloned().map(Entity::Content),
        }
    }

    /// Derive the full analysis view for the active selection, or `None`
    /// when the active pane has no selection (or the selected entity has
    /// been deleted since).
    #[must_use]
    pub fn analysis(&self) -> Option<AnalysisBundle> {
        let domain = self.nav.active_domain();
        let pane = self.nav.active_pane();
        let id = pane.selection.as_deref()?;
        let entity = self.find_entity(domain, id)?;
        let filter = self.filters.get(&domain)?;

        let analysis = resolve_analysis(&self.fixtures, id);
        let series = resolve_series(&self.fixtures, id);
        let clipped = filter.clip_series(series.value);

        Some(AnalysisBundle {
            entity_id: id.to_string(),
            entity_label: entity.label().to_string(),
            entity_kind: domain,
            analysis_date: analysis.value.analysis_date,
            analysis_fallback: analysis.fallback,
            series_fallback: series.fallback,
            kpis: kpi_summary(analysis.value),
            sentiment: sentiment_breakdown(analysis.value),
            emotions: emotion_vector(analysis.value),
            topics: topic_table(analysis.value),
            competitors: competitor_table(analysis.value),
            funnel: conversion_funnel(&analysis.value.metrics),
            trends: Trends {
                sentiment: trend(&clipped, TrendField::Sentiment, self.trend_window),
                mentions: trend(&clipped, TrendField::Mentions, self.trend_window),
                engagement: trend(&clipped, TrendField::Engagement, self.trend_window),
            },
            series: clipped,
            filter_options: FilterOptions {
                platforms: available_platforms(&entity),
                posts: available_posts(&entity),
                keywords: available_keywords(&entity),
            },
        })
    }
}
