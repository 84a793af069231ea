//! Raw form input for creating and editing entities.
//!
//! A draft carries field values exactly as a form would submit them:
//! multi-valued fields are delimited text (`post_urls` one per line, the
//! rest comma-separated) and dates are ISO text that may be left blank.
//! Building a draft applies the [`crate::parse`] trim/drop-empty contract.

use chrono::NaiveDate;
use thiserror::Error;

use crate::entity::{
    Brand, BrandStatus, Campaign, CampaignKind, CampaignStatus, Content, ContentStatus,
    ContentType,
};
use crate::parse::{parse_list, parse_url_block};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| DraftError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

#[derive(Debug, Clone, Default)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    /// One URL per line.
    pub post_urls: String,
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub start_date: String,
    pub end_date: String,
    /// Comma-separated audience labels.
    pub target_audience: String,
    /// Comma-separated platform labels.
    pub platforms: String,
}

impl CampaignDraft {
    /// Materialize the draft into a campaign with the given identity fields.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidDate`] if a non-blank date field is not
    /// ISO `YYYY-MM-DD`. No start/end ordering check is made.
    pub fn build(&self, id: String, created_date: NaiveDate) -> Result<Campaign, DraftError> {
        Ok(Campaign {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            post_urls: parse_url_block(&self.post_urls),
            kind: self.kind,
            status: self.status,
            created_date,
            start_date: parse_date("start_date", &self.start_date)?,
            end_date: parse_date("end_date", &self.end_date)?,
            target_audience: parse_list(&self.target_audience, ','),
            platforms: parse_list(&self.platforms, ','),
        })
    }

    /// Replace every mutable field of `existing`, preserving id and
    /// `created_date`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidDate`] on malformed date text; `existing`
    /// is left untouched in that case.
    pub fn apply(&self, existing: &mut Campaign) -> Result<(), DraftError> {
        *existing = self.build(existing.id.clone(), existing.created_date)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandDraft {
    pub name: String,
    pub description: String,
    /// One URL per line.
    pub post_urls: String,
    /// Comma-separated keywords.
    pub keywords: String,
    pub category: String,
    pub status: BrandStatus,
    /// Comma-separated competitor names.
    pub competitors: String,
}

impl BrandDraft {
    #[must_use]
    pub fn build(&self, id: String, created_date: NaiveDate) -> Brand {
        Brand {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            post_urls: parse_url_block(&self.post_urls),
            keywords: parse_list(&self.keywords, ','),
            category: self.category.clone(),
            status: self.status,
            created_date,
            competitors: parse_list(&self.competitors, ','),
        }
    }

    /// Replace every mutable field of `existing`, preserving id and
    /// `created_date`.
    pub fn apply(&self, existing: &mut Brand) {
        *existing = self.build(existing.id.clone(), existing.created_date);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentDraft {
    pub title: String,
    pub description: String,
    pub post_url: String,
    pub platform: String,
    pub content_type: ContentType,
    pub author: String,
    pub publish_date: String,
    pub status: ContentStatus,
    /// Comma-separated tags.
    pub tags: String,
}

impl ContentDraft {
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidDate`] if `publish_date` is non-blank and
    /// not ISO `YYYY-MM-DD`.
    pub fn build(&self, id: String, created_date: NaiveDate) -> Result<Content, DraftError> {
        Ok(Content {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            post_url: self.post_url.trim().to_string(),
            platform: self.platform.clone(),
            content_type: self.content_type,
            author: self.author.clone(),
            created_date,
            publish_date: parse_date("publish_date", &self.publish_date)?,
            status: self.status,
            tags: parse_list(&self.tags, ','),
        })
    }

    /// Replace every mutable field of `existing`, preserving id and
    /// `created_date`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidDate`] on malformed date text; `existing`
    /// is left untouched in that case.
    pub fn apply(&self, existing: &mut Content) -> Result<(), DraftError> {
        *existing = self.build(existing.id.clone(), existing.created_date)?;
        Ok(())
    }
}
