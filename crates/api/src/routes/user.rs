//! Route definitions for the `/users` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(user::create))
        .route("/register", post(user::register))
        .route("/update/{id}", put(user::update))
        .route("/delete/{id}", delete(user::delete))
        .route("/fetch/{id}", get(user::get_by_id))
        .route("/fetchAll", get(user::list))
        .route("/page", get(user::page))
}
