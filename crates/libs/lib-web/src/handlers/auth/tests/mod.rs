//! # Auth Handler Tests
//!
//! Test suite for registration, login, and the authentication gate,
//! driving the real router against an in-memory database.

mod login;

use crate::server::{app, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_auth::TokenService;
use lib_core::dto::TokenResponse;
use lib_core::DbPool;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-must-be-at-least-32-characters-long!";

/// Setup test database with schema.
pub async fn setup_test_db() -> DbPool {
    // One connection: every pooled connection to :memory: would otherwise
    // get its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    pool
}

/// Create the app router over a fresh in-memory state.
pub async fn test_app() -> (Router, AppState) {
    let state = AppState {
        db: setup_test_db().await,
        tokens: TokenService::new(TEST_SECRET, 3600),
    };
    (app(state.clone()), state)
}

/// Build a JSON POST request.
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request, optionally carrying a session token.
pub fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-auth-token", token);
    }
    builder.body(Body::empty()).unwrap()
}

/// Register a user through the API and return the issued token.
pub async fn register_user(app: &Router, name: &str, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/users",
            json!({ "name": name, "email": email, "password": password }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_body(response).await;
    let token_response: TokenResponse = serde_json::from_value(body).unwrap();
    token_response.token
}

/// Collect a response body as JSON.
pub async fn read_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// First error message from the canonical error body.
pub fn first_error_msg(body: &Value) -> &str {
    body["errors"][0]["msg"].as_str().unwrap()
}

/// First error code from the canonical error body.
pub fn first_error_code(body: &Value) -> &str {
    body["errors"][0]["code"].as_str().unwrap()
}

/// Count rows in the users table.
pub async fn user_count(pool: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
