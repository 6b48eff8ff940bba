//! Source entity model.

use newswire_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full source row from the `sources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Source {
    pub id: DbId,
    pub name: String,
    pub url: String,
}

/// Payload for inserting a new source or fully replacing an existing one.
#[derive(Debug, Clone)]
pub struct NewSource {
    pub name: String,
    pub url: String,
}

/// Wire-level sort fields accepted for source listings, mapped to columns.
pub const SORT_COLUMNS: &[(&str, &str)] = &[("id", "id"), ("name", "name"), ("url", "url")];
