//! Integration tests for the food catalog endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn chicken_body() -> String {
    json!({
        "name": "Chicken Breast",
        "serving_size": "100g",
        "protein": 31.0,
        "calories": 165.0,
        "carbs": 0.0,
    })
    .to_string()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_foods_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/foods").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_food() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    let (status, response) = app.post_auth("/api/v1/foods", &chicken_body(), token).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["name"], "Chicken Breast");
    assert_eq!(created["protein"], 31.0);

    let (status, response) = app.get_auth("/api/v1/foods", token).await;
    assert_eq!(status, StatusCode::OK);

    let foods: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(foods.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_duplicate_name_conflicts() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    app.post_auth("/api/v1/foods", &chicken_body(), token).await;
    let (status, _) = app.post_auth("/api/v1/foods", &chicken_body(), token).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_rejects_negative_nutrients() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "name": "Antimatter",
        "serving_size": "1 serving",
        "protein": -5.0,
        "calories": 100.0,
        "carbs": 0.0,
    });
    let (status, _) = app
        .post_auth("/api/v1/foods", &body.to_string(), &user.tokens.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_seed_catalog_inserts_once() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    let (status, response) = app.post_auth("/api/v1/foods/seed", "{}", token).await;
    assert_eq!(status, StatusCode::OK);

    let seeded: serde_json::Value = serde_json::from_str(&response).unwrap();
    let inserted = seeded["inserted"].as_u64().unwrap();
    assert!(inserted > 0);

    // Seeding again should skip every existing name
    let (status, response) = app.post_auth("/api/v1/foods/seed", "{}", token).await;
    assert_eq!(status, StatusCode::OK);

    let seeded: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(seeded["inserted"].as_u64().unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_food() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    let (_, response) = app.post_auth("/api/v1/foods", &chicken_body(), token).await;
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["id"].as_str().unwrap();

    let (status, _) = app.delete_auth(&format!("/api/v1/foods/{}", id), token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete_auth(&format!("/api/v1/foods/{}", id), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_users_cannot_see_each_others_foods() {
    let app = common::TestApp::new().await;
    let alice = app.create_test_user().await;
    let bob = app.create_test_user().await;

    app.post_auth("/api/v1/foods", &chicken_body(), &alice.tokens.access_token)
        .await;

    let (status, response) = app.get_auth("/api/v1/foods", &bob.tokens.access_token).await;
    assert_eq!(status, StatusCode::OK);

    let foods: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(foods.as_array().unwrap().is_empty());
}
