//! Article entity model.

use newswire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full article row from the `articles` table.
///
/// Serialized camelCase so `published_at` appears as `publishedAt` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Free-text source label; not a reference to the `sources` table.
    pub source: String,
    pub published_at: Timestamp,
}

/// Payload for inserting a new article or fully replacing an existing one.
/// The id is never part of this payload.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub source: String,
    pub published_at: Timestamp,
}

/// Wire-level sort fields accepted for article listings, mapped to columns.
pub const SORT_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("source", "source"),
    ("publishedAt", "published_at"),
];
