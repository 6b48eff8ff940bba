//! Source service.

use newswire_core::error::CoreError;
use newswire_core::pagination::{Page, PageRequest};
use newswire_core::types::DbId;
use newswire_db::models::source::{self, Source};
use newswire_db::repositories::SourceRepo;
use sqlx::PgPool;

use crate::dto::SourceDto;
use crate::error::{AppError, AppResult};

pub async fn create(pool: &PgPool, dto: SourceDto) -> AppResult<Source> {
    tracing::info!(name = %dto.name, "Creating source");
    let created = SourceRepo::create(pool, &dto.into_new())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error creating source"))?;
    tracing::info!(id = created.id, "Source created");
    Ok(created)
}

/// Fully replace a source. Fails with NotFound when the id is absent.
pub async fn update(pool: &PgPool, id: DbId, dto: SourceDto) -> AppResult<Source> {
    tracing::info!(id, "Updating source");
    let updated = SourceRepo::replace(pool, id, &dto.into_new())
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error updating source"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Source",
            id,
        }))?;
    tracing::info!(id, "Source updated");
    Ok(updated)
}

/// Delete a source, returning the deleted row if it existed.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<Option<Source>> {
    tracing::info!(id, "Deleting source");
    let deleted = SourceRepo::delete(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error deleting source"))?;
    match &deleted {
        Some(_) => tracing::info!(id, "Source deleted"),
        None => tracing::warn!(id, "Attempted to delete source that does not exist"),
    }
    Ok(deleted)
}

pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Source> {
    tracing::info!(id, "Fetching source");
    SourceRepo::find_by_id(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error fetching source"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Source",
            id,
        }))
}

/// Every source, unpaged.
pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Source>> {
    tracing::info!("Fetching all sources");
    let sources = SourceRepo::list(pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching all sources"))?;
    Ok(sources)
}

/// One page of sources, with pager totals.
pub async fn page(pool: &PgPool, request: &PageRequest) -> AppResult<Page<Source>> {
    let order_by = request.order_by(source::SORT_COLUMNS)?;
    let page = SourceRepo::page(pool, request, &order_by)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching sources page"))?;
    tracing::info!(
        count = page.content.len(),
        page = page.page,
        total_pages = page.total_pages,
        "Fetched sources"
    );
    Ok(page)
}
