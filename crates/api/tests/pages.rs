//! HTTP-level integration tests for the server-rendered page surface.

mod common;

use axum::http::{header, StatusCode};
use common::{body_text, get, get_with_headers, post_form, post_json, session_cookie};
use sqlx::PgPool;

async fn seed_article(app: &axum::Router, title: &str) {
    let response = post_json(
        app,
        "/articles/create",
        serde_json::json!({
            "title": title,
            "content": format!("{title} body"),
            "source": "Reuters",
            "publishedAt": "2026-08-01T10:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

fn location(response: &axum::http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Read-only pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn home_renders_latest_articles(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_article(&app, "Front page story").await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Front page story"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn news_detail_renders_article(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_article(&app, "Detailed story").await;

    let html = body_text(get(&app, "/news?page=0&size=10").await).await;
    assert!(html.contains("Detailed story"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_article_renders_404_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/news/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("404"));
}

// ---------------------------------------------------------------------------
// Session flow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_without_session_redirects_to_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(&app, "/settings").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_login_and_edit_settings(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // Register through the form; success redirects to the login page.
    let response = post_form(
        &app,
        "/register",
        "username=grace&email=grace%40example.com&password=hunter2-secret",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // Login sets the session cookie and redirects home.
    let response = post_form(
        &app,
        "/login",
        "username=grace&password=hunter2-secret",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = session_cookie(&response);

    // The settings page renders the current profile.
    let response = get_with_headers(&app, "/settings", &[(header::COOKIE, cookie.as_str())]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("grace"));
    assert!(html.contains("grace@example.com"));

    let original_hash =
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE username = 'grace'")
            .fetch_one(&pool)
            .await
            .unwrap();

    // Saving settings changes the email but preserves username and password
    // hash even though the form carries different values for both.
    let response = post_form(
        &app,
        "/settings",
        "username=mallory&email=grace%40new.example.com&password=other-password",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/settings");

    let row = sqlx::query_as::<_, (String, String, String)>(
        "SELECT username, email, password_hash FROM users ORDER BY id LIMIT 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row.0, "grace");
    assert_eq!(row.1, "grace@new.example.com");
    assert_eq!(row.2, original_hash);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bad_credentials_re_render_login_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(&app, "/login", "username=ghost&password=whatever-123", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Invalid username or password"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_registration_re_renders_with_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let form = "username=heidi&email=heidi%40example.com&password=hunter2-secret";
    post_form(&app, "/register", form, None).await;

    let response = post_form(&app, "/register", form, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("already taken"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_registration_re_renders_with_message(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(
        &app,
        "/register",
        "username=ivan&email=not-an-email&password=hunter2-secret",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Email should be valid"));
}
