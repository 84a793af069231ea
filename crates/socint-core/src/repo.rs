//! Read-only access to the analysis fixture tables.
//!
//! The aggregation layer is written against this trait rather than a
//! concrete table so the fallback policy stays an explicit, testable branch.

use crate::analysis::{AnalysisResult, TimeSeriesPoint};

/// A read-only source of precomputed analysis data, keyed by entity id.
///
/// `analysis`/`series` return `None` for unknown ids; the `fallback_*`
/// accessors return the designated default record every repository must
/// carry (by convention, the first seeded record).
pub trait FixtureRepository {
    fn analysis(&self, entity_id: &str) -> Option<&AnalysisResult>;

    fn fallback_analysis(&self) -> &AnalysisResult;

    fn series(&self, entity_id: &str) -> Option<&[TimeSeriesPoint]>;

    fn fallback_series(&self) -> &[TimeSeriesPoint];
}
