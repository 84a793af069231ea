pub mod aggregate;
pub mod filter;
pub mod trend;

pub use aggregate::{
    competitor_table, conversion_funnel, emotion_vector, kpi_summary, resolve_analysis,
    resolve_series, sentiment_breakdown, topic_table, CompetitorRow, ConversionFunnel, EmotionRow,
    KpiSummary, Resolved, SentimentBreakdown, TopicRow,
};
pub use filter::{
    available_keywords, available_platforms, available_posts, DateRange, FilterError, FilterState,
};
pub use trend::{trend, Trend, TrendField};
