//! Precomputed analysis fixtures: the read-only records the aggregation
//! layer projects into chart-ready tables.
//!
//! Nothing in the core ever mutates these. They relate to an entity by
//! `entity_id` only (a lookup relation, not ownership), so deleting an
//! entity leaves its fixture behind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// Sentiment summary. `overall_score` and `confidence` are in [0, 1];
/// `positive`/`negative`/`neutral` are percentages of mention volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub overall_score: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    /// Relevance to the entity, in [0, 1].
    pub relevance: f64,
    pub mentions: u64,
    /// Topic-level sentiment, in [0, 1].
    pub sentiment: f64,
}

/// Eight named emotion intensities, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emotions {
    pub joy: f64,
    pub anger: f64,
    pub fear: f64,
    pub sadness: f64,
    pub surprise: f64,
    pub trust: f64,
    pub anticipation: f64,
    pub disgust: f64,
}

impl Emotions {
    /// Fixed presentation order: joy, anger, fear, sadness, surprise, trust,
    /// anticipation, disgust.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("joy", self.joy),
            ("anger", self.anger),
            ("fear", self.fear),
            ("sadness", self.sadness),
            ("surprise", self.surprise),
            ("trust", self.trust),
            ("anticipation", self.anticipation),
            ("disgust", self.disgust),
        ]
    }
}

/// One labeled percentage bucket (age range, gender, location).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareBucket {
    pub label: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age_groups: Vec<ShareBucket>,
    pub genders: Vec<ShareBucket>,
    pub locations: Vec<ShareBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPatterns {
    pub peak_hours: Vec<String>,
    pub active_days: Vec<String>,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub interest: String,
    /// Affinity strength, in [0, 1].
    pub affinity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub demographics: Demographics,
    pub engagement_patterns: EngagementPatterns,
    pub interests: Vec<Interest>,
}

/// Volume and rate metrics. Rates are percentages (e.g. 11.2 = 11.2%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_mentions: u64,
    pub reach: u64,
    pub impressions: u64,
    pub engagement_rate: f64,
    pub share_rate: f64,
    pub click_rate: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorInsight {
    pub competitor: String,
    /// Competitor's share of mention volume, in [0, 1].
    pub mention_share: f64,
    /// Relative sentiment vs. the monitored entity, in [-1, 1].
    pub sentiment_comparison: f64,
    pub key_differences: Vec<String>,
}

/// The full precomputed analysis bundle for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub entity_id: String,
    pub entity_kind: EntityKind,
    pub analysis_date: NaiveDate,
    pub sentiment: SentimentScore,
    pub topics: Vec<Topic>,
    pub emotions: Emotions,
    pub audience: Audience,
    pub metrics: Metrics,
    pub competitive_insights: Vec<CompetitorInsight>,
}

/// One day's aggregate sample for one entity.
///
/// `sentiment` and `engagement` are on a 0–100 scale;
/// `positive`/`negative`/`neutral` are percentages with
/// `neutral = 100 - positive - negative`. Fixtures are not validated, so
/// neutral can go negative when positive + negative exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub sentiment: f64,
    pub mentions: u64,
    pub engagement: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}
