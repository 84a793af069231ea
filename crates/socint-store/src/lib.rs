use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entity with id '{id}'")]
    NotFound { id: String },
    #[error(transparent)]
    Draft(#[from] socint_core::DraftError),
}

pub mod brands;
pub mod campaigns;
pub mod contents;
pub mod fixtures;
pub mod seed;
pub mod store;

pub use brands::{BrandFilter, BrandStore};
pub use campaigns::{CampaignFilter, CampaignStore};
pub use contents::{ContentFilter, ContentStore};
pub use fixtures::{FixtureError, FixtureSet, SeriesFixture};
pub use seed::{demo, load_seed, SeedData, SeedError};
