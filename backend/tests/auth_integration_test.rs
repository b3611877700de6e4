//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_tokens() {
    let app = common::TestApp::new().await;

    let user = app.create_test_user().await;

    assert!(!user.tokens.access_token.is_empty());
    assert!(!user.tokens.refresh_token.is_empty());
    assert_eq!(user.tokens.token_type, "Bearer");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_conflicts() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "email": user.email,
        "password": "another-password-123",
    });
    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_rejects_short_password() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "short-password@example.com",
        "password": "short",
    });
    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_rejects_invalid_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": "not-an-email",
        "password": "valid-password-123",
    });
    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_with_valid_credentials() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "email": user.email,
        "password": user.password,
    });
    let (status, response) = app.post("/api/v1/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(response["access_token"].as_str().is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_with_wrong_password_unauthorized() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "email": user.email,
        "password": "wrong-password-123",
    });
    let (status, _) = app.post("/api/v1/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/auth/me").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app
        .get_auth("/api/v1/auth/me", &user.tokens.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["email"], user.email);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_token_issues_new_pair() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "refresh_token": user.tokens.refresh_token });
    let (status, response) = app.post("/api/v1/auth/refresh", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(response["access_token"].as_str().is_some());
    assert!(response["refresh_token"].as_str().is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_refresh_rejects_access_token() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    // An access token is not valid as a refresh token
    let body = json!({ "refresh_token": user.tokens.access_token });
    let (status, _) = app.post("/api/v1/auth/refresh", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
