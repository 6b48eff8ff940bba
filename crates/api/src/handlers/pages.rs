//! Server-rendered page surface.
//!
//! Renders askama templates over the same services as the REST API.
//! Successful mutating POSTs redirect; validation failures re-render the
//! originating form with the submitted values bound. A missing session on
//! the settings pages redirects to the login form.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use newswire_core::error::CoreError;
use newswire_core::pagination::{PageRequest, SortOrder};
use newswire_core::types::DbId;
use newswire_db::models::article::Article;
use validator::Validate;

use crate::auth::token::{generate_token, SESSION_COOKIE};
use crate::dto::{LoginDto, UserDto};
use crate::error::{field_error_map, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::services;
use crate::state::AppState;

/// Render an askama template, mapping render failures to a 500.
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template rendering error");
                (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    articles: Vec<Article>,
}

#[derive(Template)]
#[template(path = "news.html")]
struct NewsTemplate {
    articles: Vec<Article>,
    page: i64,
    size: i64,
}

#[derive(Template)]
#[template(path = "news_detail.html")]
struct NewsDetailTemplate {
    article: Article,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    username: String,
    email: String,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: Option<String>,
}

fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate)).into_response()
}

/// Pick one message for form-level error display.
fn first_error_message(errors: &validator::ValidationErrors) -> String {
    field_error_map(errors)
        .into_values()
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// Home page: every article, newest first.
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = services::article::latest(&state.pool).await?;
    Ok(HtmlTemplate(IndexTemplate { articles }))
}

/// GET /news?page&size&sort
pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let mut request = params.into_page_request()?;
    if request.sort.is_empty() {
        // Newest rows first when the pager has no explicit ordering.
        request = PageRequest::new(request.page, request.size, vec![SortOrder::parse("id,desc")?]);
    }
    let articles = services::article::list(&state.pool, &request).await?;
    Ok(HtmlTemplate(NewsTemplate {
        articles,
        page: request.page,
        size: request.size,
    }))
}

/// GET /news/{id}
pub async fn news_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match services::article::get_by_id(&state.pool, id).await {
        Ok(article) => Ok(HtmlTemplate(NewsDetailTemplate { article }).into_response()),
        Err(AppError::Core(CoreError::NotFound { .. })) => Ok(not_found_page()),
        Err(e) => Err(e),
    }
}

/// GET /settings
pub async fn settings(
    State(state): State<AppState>,
    user: Option<AuthUser>,
) -> AppResult<Response> {
    let Some(user) = user else {
        return Ok(Redirect::to("/login").into_response());
    };
    match services::user::current(&state.pool, &user.username).await {
        Ok(profile) => Ok(HtmlTemplate(SettingsTemplate {
            username: profile.username,
            email: profile.email,
            error: None,
        })
        .into_response()),
        Err(AppError::Core(CoreError::NotFoundByName { .. })) => Ok(not_found_page()),
        Err(e) => Err(e),
    }
}

/// POST /settings
pub async fn save_settings(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    Form(form): Form<UserDto>,
) -> AppResult<Response> {
    let Some(user) = user else {
        return Ok(Redirect::to("/login").into_response());
    };
    if let Err(errors) = form.validate() {
        return Ok(HtmlTemplate(SettingsTemplate {
            username: user.username,
            email: form.email,
            error: Some(first_error_message(&errors)),
        })
        .into_response());
    }
    services::user::update_settings(&state.pool, &user.username, form).await?;
    Ok(Redirect::to("/settings").into_response())
}

/// GET /login
pub async fn login() -> impl IntoResponse {
    HtmlTemplate(LoginTemplate { error: None })
}

/// POST /login
///
/// On success, establish the session cookie and redirect home.
pub async fn submit_login(
    State(state): State<AppState>,
    Form(form): Form<LoginDto>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(HtmlTemplate(LoginTemplate {
            error: Some(first_error_message(&errors)),
        })
        .into_response());
    }
    match services::user::authenticate(&state.pool, &form).await {
        Ok(user) => {
            let token = generate_token(user.id, &user.username, &state.config.session)
                .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;
            let cookie = format!(
                "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                state.config.session.expiry_mins * 60
            );
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
        }
        Err(AppError::Core(CoreError::Unauthorized(message))) => {
            Ok(HtmlTemplate(LoginTemplate {
                error: Some(message),
            })
            .into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /register
pub async fn register() -> impl IntoResponse {
    HtmlTemplate(RegisterTemplate { error: None })
}

/// POST /register
///
/// On success, redirect to the login form.
pub async fn submit_register(
    State(state): State<AppState>,
    Form(form): Form<UserDto>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(HtmlTemplate(RegisterTemplate {
            error: Some(first_error_message(&errors)),
        })
        .into_response());
    }
    match services::user::register(&state.pool, form).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(AppError::Core(CoreError::Conflict(message))) => Ok(HtmlTemplate(RegisterTemplate {
            error: Some(message),
        })
        .into_response()),
        Err(e) => Err(e),
    }
}
