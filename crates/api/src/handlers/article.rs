//! Handlers for the `/articles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::types::DbId;
use newswire_db::models::article::Article;
use validator::Validate;

use crate::dto::ArticleDto;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::services;
use crate::state::AppState;

/// POST /articles/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ArticleDto>,
) -> AppResult<(StatusCode, Json<Article>)> {
    input.validate()?;
    let article = services::article::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /articles/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ArticleDto>,
) -> AppResult<Json<Article>> {
    input.validate()?;
    let article = services::article::update(&state.pool, id, input).await?;
    Ok(Json(article))
}

/// DELETE /articles/delete/{id}
///
/// 204 when the row existed, 404 otherwise.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match services::article::delete(&state.pool, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        })),
    }
}

/// GET /articles/fetch/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Article>> {
    let article = services::article::get_by_id(&state.pool, id).await?;
    Ok(Json(article))
}

/// GET /articles/fetchAll?page&size&sort
///
/// Returns the page content as a plain list.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<Article>>> {
    let request = params.into_page_request()?;
    let articles = services::article::list(&state.pool, &request).await?;
    Ok(Json(articles))
}
