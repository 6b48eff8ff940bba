//! Route definitions for the server-rendered pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Root-level page routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/news", get(pages::news))
        .route("/news/{id}", get(pages::news_detail))
        .route("/settings", get(pages::settings).post(pages::save_settings))
        .route("/login", get(pages::login).post(pages::submit_login))
        .route("/register", get(pages::register).post(pages::submit_register))
}
