//! Client-side id and date generation.
//!
//! Ids are `<prefix>_<timestamp-millis>`. Collisions are only possible when
//! two creates land in the same millisecond, which the single-writer
//! in-memory model accepts.

use chrono::{NaiveDate, Utc};

use crate::entity::EntityKind;

/// Generate an id for a new entity of the given kind.
#[must_use]
pub fn generate(kind: EntityKind) -> String {
    format!("{}_{}", kind.id_prefix(), Utc::now().timestamp_millis())
}

/// Today's date (UTC), used for `created_date` and filter defaults.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
