//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use newswire_db::models::user::UserResponse;
use serde::Serialize;
use validator::Validate;

use crate::auth::token::generate_token;
use crate::dto::LoginDto;
use crate::error::{AppError, AppResult};
use crate::services;
use crate::state::AppState;

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /auth/login
///
/// Authenticate with username + password. Returns a session token for the
/// `Authorization: Bearer` header.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginDto>,
) -> AppResult<Json<AuthResponse>> {
    input.validate()?;
    let user = services::user::authenticate(&state.pool, &input).await?;

    let token = generate_token(user.id, &user.username, &state.config.session)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        expires_in: state.config.session.expiry_mins * 60,
        user: user.into(),
    }))
}
