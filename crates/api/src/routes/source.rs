//! Route definitions for the `/sources` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::source;
use crate::state::AppState;

/// Routes mounted at `/sources`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(source::create))
        .route("/update/{id}", put(source::update))
        .route("/delete/{id}", delete(source::delete))
        .route("/fetch/{id}", get(source::get_by_id))
        .route("/fetchAll", get(source::list))
        .route("/page", get(source::page))
}
