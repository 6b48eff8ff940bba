//! Repository for the `sources` table.

use newswire_core::pagination::{Page, PageRequest};
use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::models::source::{NewSource, Source};

const COLUMNS: &str = "id, name, url";

/// Provides CRUD operations for sources.
pub struct SourceRepo;

impl SourceRepo {
    /// Insert a new source, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewSource) -> Result<Source, sqlx::Error> {
        let query = format!(
            "INSERT INTO sources (name, url) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Source>(&query)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a source by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Source>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sources WHERE id = $1");
        sqlx::query_as::<_, Source>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fully replace a source's fields, keeping its id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewSource,
    ) -> Result<Option<Source>, sqlx::Error> {
        let query = format!(
            "UPDATE sources SET name = $2, url = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Source>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a source, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Source>, sqlx::Error> {
        let query = format!("DELETE FROM sources WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Source>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sources ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Source>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sources ORDER BY id");
        sqlx::query_as::<_, Source>(&query).fetch_all(pool).await
    }

    /// Fetch one page of sources with the given ordering.
    pub async fn page(
        pool: &PgPool,
        request: &PageRequest,
        order_by: &str,
    ) -> Result<Page<Source>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sources {order_by} LIMIT $1 OFFSET $2");
        let content = sqlx::query_as::<_, Source>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM sources")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(content, request, total))
    }
}
