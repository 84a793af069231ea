//! The three monitorable subjects (campaigns, brands, content pieces) and
//! the tagged union consumers match on.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Campaign,
    Brand,
    Content,
}

impl EntityKind {
    /// Prefix used when generating ids for this kind (`camp_<millis>` etc.).
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::Campaign => "camp",
            EntityKind::Brand => "brand",
            EntityKind::Content => "content",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Campaign => write!(f, "campaign"),
            EntityKind::Brand => write!(f, "brand"),
            EntityKind::Content => write!(f, "content"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "campaign" => Ok(EntityKind::Campaign),
            "brand" => Ok(EntityKind::Brand),
            "content" => Ok(EntityKind::Content),
            other => Err(CoreError::variant("entity kind", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    #[default]
    ProductLaunch,
    BrandAwareness,
    FeatureHighlight,
    CrisisResponse,
}

impl fmt::Display for CampaignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignKind::ProductLaunch => write!(f, "product_launch"),
            CampaignKind::BrandAwareness => write!(f, "brand_awareness"),
            CampaignKind::FeatureHighlight => write!(f, "feature_highlight"),
            CampaignKind::CrisisResponse => write!(f, "crisis_response"),
        }
    }
}

impl FromStr for CampaignKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product_launch" => Ok(CampaignKind::ProductLaunch),
            "brand_awareness" => Ok(CampaignKind::BrandAwareness),
            "feature_highlight" => Ok(CampaignKind::FeatureHighlight),
            "crisis_response" => Ok(CampaignKind::CrisisResponse),
            other => Err(CoreError::variant("campaign type", other)),
        }
    }
}

/// New campaigns start as drafts until explicitly activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    #[default]
    Draft,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CampaignStatus::Active => write!(f, "active"),
            CampaignStatus::Paused => write!(f, "paused"),
            CampaignStatus::Completed => write!(f, "completed"),
            CampaignStatus::Draft => write!(f, "draft"),
        }
    }
}

impl FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            "draft" => Ok(CampaignStatus::Draft),
            other => Err(CoreError::variant("campaign status", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandStatus::Active => write!(f, "active"),
            BrandStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for BrandStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BrandStatus::Active),
            "inactive" => Ok(BrandStatus::Inactive),
            other => Err(CoreError::variant("brand status", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    #[default]
    Post,
    Article,
    Image,
    Story,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Video => write!(f, "video"),
            ContentType::Post => write!(f, "post"),
            ContentType::Article => write!(f, "article"),
            ContentType::Image => write!(f, "image"),
            ContentType::Story => write!(f, "story"),
        }
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(ContentType::Video),
            "post" => Ok(ContentType::Post),
            "article" => Ok(ContentType::Article),
            "image" => Ok(ContentType::Image),
            "story" => Ok(ContentType::Story),
            other => Err(CoreError::variant("content type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for ContentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(ContentStatus::Published),
            "draft" => Ok(ContentStatus::Draft),
            "archived" => Ok(ContentStatus::Archived),
            other => Err(CoreError::variant("content status", other)),
        }
    }
}

/// A monitored marketing campaign spanning a set of posts and platforms.
///
/// `start_date <= end_date` is deliberately NOT enforced here; the store
/// accepts whatever the form produced and the filter layer validates ranges
/// where they matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub description: String,
    pub post_urls: Vec<String>,
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub created_date: NaiveDate,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub target_audience: Vec<String>,
    pub platforms: Vec<String>,
}

/// A monitored brand with its keyword and competitor universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub post_urls: Vec<String>,
    pub keywords: Vec<String>,
    pub category: String,
    pub status: BrandStatus,
    pub created_date: NaiveDate,
    pub competitors: Vec<String>,
}

/// A single monitored post or article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub description: String,
    pub post_url: String,
    pub platform: String,
    pub content_type: ContentType,
    pub author: String,
    pub created_date: NaiveDate,
    pub publish_date: Option<NaiveDate>,
    pub status: ContentStatus,
    pub tags: Vec<String>,
}

/// Tagged union over the three entity kinds.
///
/// Borrowed views of this are handed to the filter and aggregation layers so
/// they can match exhaustively instead of shape-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Campaign(Campaign),
    Brand(Brand),
    Content(Content),
}

impl Entity {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Entity::Campaign(c) => &c.id,
            Entity::Brand(b) => &b.id,
            Entity::Content(c) => &c.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Campaign(_) => EntityKind::Campaign,
            Entity::Brand(_) => EntityKind::Brand,
            Entity::Content(_) => EntityKind::Content,
        }
    }

    /// Display label: campaign/brand name, content title.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Entity::Campaign(c) => &c.name,
            Entity::Brand(b) => &b.name,
            Entity::Content(c) => &c.title,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Entity::Campaign(c) => &c.description,
            Entity::Brand(b) => &b.description,
            Entity::Content(c) => &c.description,
        }
    }
}
