pub mod analysis;
pub mod app_config;
pub mod config;
pub mod draft;
pub mod entity;
pub mod ids;
pub mod parse;
pub mod repo;

mod error;

pub use analysis::{
    AnalysisResult, Audience, CompetitorInsight, Demographics, EngagementPatterns, Emotions,
    Interest, Metrics, SentimentScore, ShareBucket, TimeSeriesPoint, Topic,
};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use draft::{BrandDraft, CampaignDraft, ContentDraft, DraftError};
pub use entity::{
    Brand, BrandStatus, Campaign, CampaignKind, CampaignStatus, Content, ContentStatus,
    ContentType, Entity, EntityKind,
};
pub use error::{ConfigError, CoreError};
pub use repo::FixtureRepository;
