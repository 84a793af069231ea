//! The read-only fixture tables behind [`FixtureRepository`].
//!
//! Seeded once at startup and never mutated. The fallback record for
//! unknown ids is the first record of each table, so a set must contain at
//! least one analysis and one series.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use socint_core::{AnalysisResult, FixtureRepository, TimeSeriesPoint};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture set needs at least one analysis record and one series")]
    Empty,
}

/// The daily series for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFixture {
    pub entity_id: String,
    pub points: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Clone)]
pub struct FixtureSet {
    analyses: Vec<AnalysisResult>,
    series: Vec<SeriesFixture>,
}

impl FixtureSet {
    /// # Errors
    ///
    /// Returns [`FixtureError::Empty`] if either table is empty — the
    /// fallback policy requires a designated default record.
    pub fn new(
        analyses: Vec<AnalysisResult>,
        series: Vec<SeriesFixture>,
    ) -> Result<Self, FixtureError> {
        if analyses.is_empty() || series.is_empty() {
            return Err(FixtureError::Empty);
        }
        Ok(Self { analyses, series })
    }

    #[must_use]
    pub fn analyses(&self) -> &[AnalysisResult] {
        &self.analyses
    }

    #[must_use]
    pub fn all_series(&self) -> &[SeriesFixture] {
        &self.series
    }
}

impl FixtureRepository for FixtureSet {
    fn analysis(&self, entity_id: &str) -> Option<&AnalysisResult> {
        self.analyses.iter().find(|a| a.entity_id == entity_id)
    }

    fn fallback_analysis(&self) -> &AnalysisResult {
        &self.analyses[0]
    }

    fn series(&self, entity_id: &str) -> Option<&[TimeSeriesPoint]> {
        self.series
            .iter()
            .find(|s| s.entity_id == entity_id)
            .map(|s| s.points.as_slice())
    }

    fn fallback_series(&self) -> &[TimeSeriesPoint] {
        &self.series[0].points
    }
}
