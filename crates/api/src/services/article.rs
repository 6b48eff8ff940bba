//! Article service.

use newswire_core::error::CoreError;
use newswire_core::pagination::PageRequest;
use newswire_core::types::DbId;
use newswire_db::models::article::{self, Article};
use newswire_db::repositories::ArticleRepo;
use sqlx::PgPool;

use crate::dto::ArticleDto;
use crate::error::{AppError, AppResult};

pub async fn create(pool: &PgPool, dto: ArticleDto) -> AppResult<Article> {
    tracing::info!(title = %dto.title, "Creating article");
    let created = ArticleRepo::create(pool, &dto.into_new())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error creating article"))?;
    tracing::info!(id = created.id, "Article created");
    Ok(created)
}

/// Fully replace an article. Fails with NotFound when the id is absent;
/// never creates a row.
pub async fn update(pool: &PgPool, id: DbId, dto: ArticleDto) -> AppResult<Article> {
    tracing::info!(id, "Updating article");
    let updated = ArticleRepo::replace(pool, id, &dto.into_new())
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error updating article"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    tracing::info!(id, "Article updated");
    Ok(updated)
}

/// Delete an article. A missing id is a negative signal (`None`), not an
/// error -- the caller picks the status code.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<Option<Article>> {
    tracing::info!(id, "Deleting article");
    let deleted = ArticleRepo::delete(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error deleting article"))?;
    match &deleted {
        Some(_) => tracing::info!(id, "Article deleted"),
        None => tracing::warn!(id, "Attempted to delete article that does not exist"),
    }
    Ok(deleted)
}

pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Article> {
    tracing::info!(id, "Fetching article");
    ArticleRepo::find_by_id(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error fetching article"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))
}

/// One page of articles; the caller gets the page content only, matching
/// the list-shaped wire response.
pub async fn list(pool: &PgPool, request: &PageRequest) -> AppResult<Vec<Article>> {
    let order_by = request.order_by(article::SORT_COLUMNS)?;
    let page = ArticleRepo::page(pool, request, &order_by)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching articles page"))?;
    tracing::info!(
        count = page.content.len(),
        page = page.page,
        total_pages = page.total_pages,
        "Fetched articles"
    );
    Ok(page.content)
}

/// All articles, most recently published first.
pub async fn latest(pool: &PgPool) -> AppResult<Vec<Article>> {
    tracing::info!("Fetching latest articles");
    let articles = ArticleRepo::list_latest(pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching latest articles"))?;
    tracing::info!(count = articles.len(), "Fetched latest articles");
    Ok(articles)
}
