//! HTTP-level integration tests for the `/users` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn user_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": password,
        "email": format!("{username}@example.com"),
    })
}

async fn stored_hash(pool: &PgPool, username: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("user row should exist")
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_hashes_password_and_hides_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(&app, "/users/create", user_body("alice", "hunter2-secret")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    // The password never appears in any outbound shape.
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());

    // Stored value is an argon2 hash, never the plaintext.
    let hash = stored_hash(&pool, "alice").await;
    assert_ne!(hash, "hunter2-secret");
    assert!(hash.starts_with("$argon2"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_validates_password_length(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(&app, "/users/create", user_body("alice", "short")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["password"], "Password must be between 6 and 255 characters");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn client_supplied_id_is_ignored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = user_body("alice", "hunter2-secret");
    body["id"] = serde_json::json!(424_242);
    let json = body_json(post_json(&app, "/users/create", body).await).await;
    assert_ne!(json["id"], 424_242);
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_taken_username_without_mutating(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(&app, "/users/register", user_body("bob", "hunter2-secret")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/users/register", user_body("bob", "other-password")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        &app,
        "/users/update/999999",
        user_body("ghost", "hunter2-secret"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_blank_password_preserves_the_hash(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(&app, "/users/create", user_body("carol", "hunter2-secret")).await).await;
    let id = created["id"].as_i64().unwrap();
    let original_hash = stored_hash(&pool, "carol").await;

    // Six spaces satisfy the length rule but are blank after trimming,
    // so the stored hash must survive byte-for-byte.
    let response = put_json(
        &app,
        &format!("/users/update/{id}"),
        serde_json::json!({
            "username": "carol",
            "password": "      ",
            "email": "carol@new.example.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(stored_hash(&pool, "carol").await, original_hash);
    let json = body_json(get(&app, &format!("/users/fetch/{id}")).await).await;
    assert_eq!(json["email"], "carol@new.example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_new_password_rehashes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(&app, "/users/create", user_body("dave", "hunter2-secret")).await).await;
    let id = created["id"].as_i64().unwrap();
    let original_hash = stored_hash(&pool, "dave").await;

    put_json(
        &app,
        &format!("/users/update/{id}"),
        user_body("dave", "brand-new-password"),
    )
    .await;

    let new_hash = stored_hash(&pool, "dave").await;
    assert_ne!(new_hash, original_hash);

    // The new credentials authenticate; the old ones no longer do.
    let response = post_json(
        &app,
        "/auth/login",
        serde_json::json!({"username": "dave", "password": "brand-new-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        &app,
        "/auth/login",
        serde_json::json!({"username": "dave", "password": "hunter2-secret"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Delete / listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let created = body_json(post_json(&app, "/users/create", user_body("erin", "hunter2-secret")).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/users/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(&app, &format!("/users/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listings_never_leak_hashes(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(&app, "/users/create", user_body("frank", "hunter2-secret")).await;

    let all = body_json(get(&app, "/users/fetchAll").await).await;
    let first = &all.as_array().unwrap()[0];
    assert_eq!(first["username"], "frank");
    assert!(first.get("password").is_none());
    assert!(first.get("passwordHash").is_none());

    let page = body_json(get(&app, "/users/page?page=0&size=10").await).await;
    assert_eq!(page["totalElements"], 1);
    assert!(page["content"][0].get("passwordHash").is_none());
}
