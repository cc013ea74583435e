//! # Login Tests
//!
//! Tests for authenticating existing users.

use super::*;

#[tokio::test]
async fn test_login_returns_token() {
    let (app, state) = test_app().await;

    register_user(&app, "Ada", "ada@example.com", "secret1").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "ada@example.com", "password": "secret1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_body(response).await;
    let token = body["token"].as_str().unwrap();

    let claims = state.tokens.verify(token).expect("issued token verifies");
    assert_eq!(claims.sub, "1");
    assert_eq!(claims.name, "Ada");
}

#[tokio::test]
async fn test_login_accepts_differently_cased_email() {
    let (app, _state) = test_app().await;

    register_user(&app, "Ada", "ada@example.com", "secret1").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "ADA@example.com", "password": "secret1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password_is_rejected() {
    let (app, _state) = test_app().await;

    register_user(&app, "Ada", "ada@example.com", "secret1").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "ada@example.com", "password": "not-it" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_body(response).await;
    assert_eq!(first_error_msg(&body), "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let (app, _state) = test_app().await;

    register_user(&app, "Ada", "ada@example.com", "secret1").await;

    let unknown = app
        .clone()
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "eve@example.com", "password": "secret1" }),
        ))
        .await
        .unwrap();

    let wrong = app
        .clone()
        .oneshot(post_json(
            "/api/auth",
            json!({ "email": "ada@example.com", "password": "not-it" }),
        ))
        .await
        .unwrap();

    // Same status, same body: the endpoint must not reveal which emails exist.
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_body(unknown).await, read_body(wrong).await);
}
