//! Route definitions for the `/articles` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(article::create))
        .route("/update/{id}", put(article::update))
        .route("/delete/{id}", delete(article::delete))
        .route("/fetch/{id}", get(article::get_by_id))
        .route("/fetchAll", get(article::list))
}
