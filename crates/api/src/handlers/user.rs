//! Handlers for the `/users` resource.
//!
//! All outbound payloads use [`UserResponse`] -- the password hash never
//! leaves the service boundary.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::pagination::Page;
use newswire_core::types::DbId;
use newswire_db::models::user::UserResponse;
use validator::Validate;

use crate::dto::UserDto;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::services;
use crate::state::AppState;

/// POST /users/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<UserDto>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = services::user::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /users/register
///
/// Like create, but rejects usernames that are already taken with 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<UserDto>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = services::user::register(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserDto>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;
    let user = services::user::update(&state.pool, id, input).await?;
    Ok(Json(user.into()))
}

/// DELETE /users/delete/{id}
///
/// 204 when the row existed, 404 otherwise.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    match services::user::delete(&state.pool, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound { entity: "User", id })),
    }
}

/// GET /users/fetch/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = services::user::get_by_id(&state.pool, id).await?;
    Ok(Json(user.into()))
}

/// GET /users/fetchAll
///
/// Every user, unpaged.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = services::user::list_all(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/page?page&size&sort
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<UserResponse>>> {
    let request = params.into_page_request()?;
    let page = services::user::page(&state.pool, &request).await?;
    Ok(Json(page))
}
