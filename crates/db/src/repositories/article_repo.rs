//! Repository for the `articles` table.

use newswire_core::pagination::{Page, PageRequest};
use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, NewArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, source, published_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, source, published_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.source)
            .bind(input.published_at)
            .fetch_one(pool)
            .await
    }

    /// Find an article by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fully replace an article's fields, keeping its id.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET title = $2, content = $3, source = $4, published_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.source)
            .bind(input.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("DELETE FROM articles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of articles with the given ordering.
    ///
    /// A page index past the end yields an empty page, not an error.
    pub async fn page(
        pool: &PgPool,
        request: &PageRequest,
        order_by: &str,
    ) -> Result<Page<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles {order_by} LIMIT $1 OFFSET $2");
        let content = sqlx::query_as::<_, Article>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM articles")
            .fetch_one(pool)
            .await?;

        Ok(Page::new(content, request, total))
    }

    /// List every article, most recently published first.
    pub async fn list_latest(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY published_at DESC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }
}
