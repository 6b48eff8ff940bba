//! Handlers for the `/sources` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::pagination::Page;
use newswire_core::types::DbId;
use newswire_db::models::source::Source;
use validator::Validate;

use crate::dto::SourceDto;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::services;
use crate::state::AppState;

/// POST /sources/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SourceDto>,
) -> AppResult<(StatusCode, Json<Source>)> {
    input.validate()?;
    let source = services::source::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(source)))
}

/// PUT /sources/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SourceDto>,
) -> AppResult<Json<Source>> {
    input.validate()?;
    let source = services::source::update(&state.pool, id, input).await?;
    Ok(Json(source))
}

/// DELETE /sources/delete/{id}
///
/// 204 when the row existed, 404 otherwise.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match services::source::delete(&state.pool, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Source",
            id,
        })),
    }
}

/// GET /sources/fetch/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Source>> {
    let source = services::source::get_by_id(&state.pool, id).await?;
    Ok(Json(source))
}

/// GET /sources/fetchAll
///
/// Every source, unpaged.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Source>>> {
    let sources = services::source::list_all(&state.pool).await?;
    Ok(Json(sources))
}

/// GET /sources/page?page&size&sort
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<Source>>> {
    let request = params.into_page_request()?;
    let page = services::source::page(&state.pool, &request).await?;
    Ok(Json(page))
}
