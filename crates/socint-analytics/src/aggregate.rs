//! Chart-ready projections over one entity's analysis fixture.
//!
//! Everything here is a pure function of its inputs; resolution against the
//! fixture tables is the only part that consults shared state, and it only
//! reads.

use serde::Serialize;

use socint_core::{AnalysisResult, FixtureRepository, Metrics, TimeSeriesPoint};

/// Outcome of a fixture lookup. `fallback` is true when the requested
/// entity had no record and the repository's designated default was
/// substituted, so callers (and tests) can see the substitution happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub fallback: bool,
}

/// Look up the analysis record for `entity_id`, falling back to the default
/// record when absent.
pub fn resolve_analysis<'a, R>(repo: &'a R, entity_id: &str) -> Resolved<&'a AnalysisResult>
where
    R: FixtureRepository + ?Sized,
{
    match repo.analysis(entity_id) {
        Some(analysis) => Resolved {
            value: analysis,
            fallback: false,
        },
        None => {
            tracing::warn!(entity_id, "no analysis fixture; using the default record");
            Resolved {
                value: repo.fallback_analysis(),
                fallback: true,
            }
        }
    }
}

/// Look up the time series for `entity_id`, falling back to the default
/// series when absent.
pub fn resolve_series<'a, R>(repo: &'a R, entity_id: &str) -> Resolved<&'a [TimeSeriesPoint]>
where
    R: FixtureRepository + ?Sized,
{
    match repo.series(entity_id) {
        Some(series) => Resolved {
            value: series,
            fallback: false,
        },
        None => {
            tracing::warn!(entity_id, "no series fixture; using the default series");
            Resolved {
                value: repo.fallback_series(),
                fallback: true,
            }
        }
    }
}

/// The three sentiment shares, copied straight from the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[must_use]
pub fn sentiment_breakdown(analysis: &AnalysisResult) -> SentimentBreakdown {
    SentimentBreakdown {
        positive: analysis.sentiment.positive,
        neutral: analysis.sentiment.neutral,
        negative: analysis.sentiment.negative,
    }
}

/// One spoke of the emotion radar: capitalized label, intensity 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionRow {
    pub emotion: String,
    pub intensity: i64,
}

/// The eight emotions in fixed order, scaled from [0, 1] to 0–100.
#[must_use]
pub fn emotion_vector(analysis: &AnalysisResult) -> Vec<EmotionRow> {
    analysis
        .emotions
        .entries()
        .iter()
        .map(|(name, value)| EmotionRow {
            emotion: capitalize(name),
            intensity: round_percent(*value),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRow {
    pub topic: String,
    pub mentions: u64,
    pub sentiment_percent: i64,
    pub relevance_percent: i64,
}

/// Topics in fixture order, with sentiment and relevance scaled to 0–100.
#[must_use]
pub fn topic_table(analysis: &AnalysisResult) -> Vec<TopicRow> {
    analysis
        .topics
        .iter()
        .map(|t| TopicRow {
            topic: t.topic.clone(),
            mentions: t.mentions,
            sentiment_percent: round_percent(t.sentiment),
            relevance_percent: round_percent(t.relevance),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorRow {
    pub competitor: String,
    /// Mention share as a 0–100 percentage.
    pub share_percent: i64,
    /// `sentiment_comparison` mapped from [-1, 1] onto a 0–100 display
    /// scale: `(x + 1) * 50`, rounded half away from zero.
    pub normalized_sentiment: i64,
}

#[must_use]
pub fn competitor_table(analysis: &AnalysisResult) -> Vec<CompetitorRow> {
    analysis
        .competitive_insights
        .iter()
        .map(|c| CompetitorRow {
            competitor: c.competitor.clone(),
            share_percent: round_percent(c.mention_share),
            normalized_sentiment: round_f64((c.sentiment_comparison + 1.0) * 50.0),
        })
        .collect()
}

/// Funnel stages derived from impressions. Every stage is computed
/// independently as `impressions * rate / 100` — not cumulative off the
/// previous stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionFunnel {
    pub impressions: u64,
    pub engagement: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl ConversionFunnel {
    /// Stages in funnel order for tabular rendering.
    #[must_use]
    pub fn stages(&self) -> [(&'static str, u64); 4] {
        [
            ("impressions", self.impressions),
            ("engagement", self.engagement),
            ("clicks", self.clicks),
            ("conversions", self.conversions),
        ]
    }
}

#[must_use]
pub fn conversion_funnel(metrics: &Metrics) -> ConversionFunnel {
    ConversionFunnel {
        impressions: metrics.impressions,
        engagement: stage_of(metrics.impressions, metrics.engagement_rate),
        clicks: stage_of(metrics.impressions, metrics.click_rate),
        conversions: stage_of(metrics.impressions, metrics.conversion_rate),
    }
}

/// The headline numbers above an analysis view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    pub overall_sentiment_percent: i64,
    pub total_mentions: u64,
    pub engagement_rate: f64,
    /// Reach in millions, one decimal place.
    pub reach_millions: f64,
}

#[must_use]
pub fn kpi_summary(analysis: &AnalysisResult) -> KpiSummary {
    KpiSummary {
        overall_sentiment_percent: round_percent(analysis.sentiment.overall_score),
        total_mentions: analysis.metrics.total_mentions,
        engagement_rate: analysis.metrics.engagement_rate,
        reach_millions: millions(analysis.metrics.reach),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Scale a [0, 1] value to 0–100 and round half away from zero.
fn round_percent(value: f64) -> i64 {
    round_f64(value * 100.0)
}

#[allow(clippy::cast_possible_truncation)] // inputs are bounded display values
fn round_f64(value: f64) -> i64 {
    value.round() as i64
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)] // impression counts stay far below 2^52, rates are non-negative
fn stage_of(impressions: u64, rate: f64) -> u64 {
    (impressions as f64 * rate / 100.0).round() as u64
}

#[allow(clippy::cast_precision_loss)] // reach stays far below 2^52
fn millions(value: u64) -> f64 {
    (value as f64 / 1_000_000.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use socint_core::FixtureRepository;
    use socint_store::seed;

    #[test]
    fn resolve_hits_do_not_fall_back() {
        let fixtures = seed::demo().fixtures;
        let resolved = resolve_analysis(&fixtures, "brand_001");
        assert!(!resolved.fallback);
        assert_eq!(resolved.value.entity_id, "brand_001");
    }

    #[test]
    fn resolve_misses_use_the_default_record() {
        let fixtures = seed::demo().fixtures;
        let resolved = resolve_analysis(&fixtures, "content_ghost");
        assert!(resolved.fallback);
        assert_eq!(
            resolved.value.entity_id,
            fixtures.fallback_analysis().entity_id
        );

        let series = resolve_series(&fixtures, "content_ghost");
        assert!(series.fallback);
        assert_eq!(series.value, fixtures.fallback_series());
    }

    #[test]
    fn breakdown_copies_the_fixture_shares() {
        let fixtures = seed::demo().fixtures;
        let analysis = fixtures.analysis("camp_001").unwrap();
        let breakdown = sentiment_breakdown(analysis);
        assert!((breakdown.positive - 42.0).abs() < f64::EPSILON);
        assert!((breakdown.neutral - 30.0).abs() < f64::EPSILON);
        assert!((breakdown.negative - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn emotion_vector_is_scaled_capitalized_and_ordered() {
        let fixtures = seed::demo().fixtures;
        let analysis = fixtures.analysis("camp_001").unwrap();
        let rows = emotion_vector(analysis);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].emotion, "Joy");
        assert_eq!(rows[0].intensity, 32);
        assert_eq!(rows[7].emotion, "Disgust");
        assert_eq!(rows[7].intensity, 9);
    }

    #[test]
    fn topic_table_scales_sentiment_and_relevance() {
        let fixtures = seed::demo().fixtures;
        let analysis = fixtures.analysis("camp_001").unwrap();
        let rows = topic_table(analysis);
        assert_eq!(rows[0].topic, "Delivery Timeline");
        assert_eq!(rows[0].mentions, 1200);
        assert_eq!(rows[0].sentiment_percent, 65);
        assert_eq!(rows[0].relevance_percent, 85);
    }

    #[test]
    fn competitor_normalization_maps_minus_one_to_one_onto_0_to_100() {
        let fixtures = seed::demo().fixtures;
        let analysis = fixtures.analysis("camp_001").unwrap();
        let rows = competitor_table(analysis);
        // mention_share 0.35, sentiment_comparison -0.15 => 35 and 42.5 -> 43.
        assert_eq!(rows[0].share_percent, 35);
        assert_eq!(rows[0].normalized_sentiment, 43);
    }

    #[test]
    fn competitor_normalization_rounds_down_below_half() {
        use socint_core::CompetitorInsight;
        let fixtures = seed::demo().fixtures;
        let mut analysis = fixtures.analysis("camp_001").unwrap().clone();
        analysis.competitive_insights = vec![CompetitorInsight {
            competitor: "X".to_string(),
            mention_share: 0.5,
            // (x + 1) * 50 = 42.4 for x = -0.152
            sentiment_comparison: -0.152,
            key_differences: Vec::new(),
        }];
        let rows = competitor_table(&analysis);
        assert_eq!(rows[0].normalized_sentiment, 42);
    }

    #[test]
    fn funnel_stages_are_independent_of_each_other() {
        let metrics = Metrics {
            total_mentions: 0,
            reach: 0,
            impressions: 4_200_000,
            engagement_rate: 11.2,
            share_rate: 0.0,
            click_rate: 2.8,
            conversion_rate: 1.2,
        };
        let funnel = conversion_funnel(&metrics);
        assert_eq!(funnel.impressions, 4_200_000);
        assert_eq!(funnel.engagement, 470_400);
        assert_eq!(funnel.clicks, 117_600);
        assert_eq!(funnel.conversions, 50_400);
    }

    #[test]
    fn kpi_summary_rounds_reach_to_one_decimal() {
        let fixtures = seed::demo().fixtures;
        let analysis = fixtures.analysis("camp_001").unwrap();
        let kpis = kpi_summary(analysis);
        assert_eq!(kpis.overall_sentiment_percent, 68);
        assert_eq!(kpis.total_mentions, 38_500);
        assert!((kpis.reach_millions - 2.8).abs() < f64::EPSILON);
    }
}
