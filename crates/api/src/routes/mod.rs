//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                      liveness probe
//!
//! /articles/create             POST   create
//! /articles/update/{id}        PUT    update
//! /articles/delete/{id}        DELETE delete
//! /articles/fetch/{id}         GET    get_by_id
//! /articles/fetchAll           GET    paginated list
//!
//! /sources/...                 same CRUD shape, plus:
//! /sources/fetchAll            GET    all sources, unpaged
//! /sources/page                GET    paginated-object response
//!
//! /users/...                   same CRUD shape, plus:
//! /users/register              POST   register (duplicate-username check)
//! /users/fetchAll              GET    all users, unpaged
//! /users/page                  GET    paginated-object response
//!
//! /auth/login                  POST   login (returns session token)
//!
//! /                            GET    home page (latest articles)
//! /news                        GET    paginated news page
//! /news/{id}                   GET    article detail page
//! /settings                    GET, POST  profile settings (session required)
//! /login                       GET, POST  login form
//! /register                    GET, POST  registration form
//! ```

pub mod article;
pub mod auth;
pub mod health;
pub mod pages;
pub mod source;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the REST route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", article::router())
        .nest("/sources", source::router())
        .nest("/users", user::router())
        .nest("/auth", auth::router())
}
