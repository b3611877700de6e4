//! Integration tests for the lift endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_lift_in_kg() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "exercise": "Bench Press",
        "weight": 80.0,
        "unit": "kg",
        "reps": 5,
    });
    let (status, response) = app
        .post_auth("/api/v1/lifts", &body.to_string(), &user.tokens.access_token)
        .await;

    assert_eq!(status, StatusCode::CREATED);

    let lift: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(lift["exercise"], "Bench Press");
    assert_eq!(lift["weight_kg"], 80.0);
    assert_eq!(lift["reps"], 5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_lift_converts_lbs() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "exercise": "Deadlift",
        "weight": 225.0,
        "unit": "lbs",
        "reps": 3,
    });
    let (status, response) = app
        .post_auth("/api/v1/lifts", &body.to_string(), &user.tokens.access_token)
        .await;

    assert_eq!(status, StatusCode::CREATED);

    let lift: serde_json::Value = serde_json::from_str(&response).unwrap();
    let weight_kg = lift["weight_kg"].as_f64().unwrap();
    assert!((weight_kg - 102.058).abs() < 0.01);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_lift_rejects_bad_reps() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({
        "exercise": "Squat",
        "weight": 100.0,
        "reps": 0,
    });
    let (status, _) = app
        .post_auth("/api/v1/lifts", &body.to_string(), &user.tokens.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_history_filters_by_exercise() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    for (exercise, weight) in [("Squat", 120.0), ("Bench Press", 80.0), ("Squat", 125.0)] {
        let body = json!({ "exercise": exercise, "weight": weight, "reps": 5 });
        app.post_auth("/api/v1/lifts", &body.to_string(), token).await;
    }

    let (status, response) = app.get_auth("/api/v1/lifts?exercise=Squat", token).await;
    assert_eq!(status, StatusCode::OK);

    let lifts: serde_json::Value = serde_json::from_str(&response).unwrap();
    let lifts = lifts.as_array().unwrap();
    assert_eq!(lifts.len(), 2);
    assert!(lifts.iter().all(|l| l["exercise"] == "Squat"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_exercises_is_distinct_and_sorted() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    for exercise in ["Squat", "Bench Press", "Squat"] {
        let body = json!({ "exercise": exercise, "weight": 100.0, "reps": 5 });
        app.post_auth("/api/v1/lifts", &body.to_string(), token).await;
    }

    let (status, response) = app.get_auth("/api/v1/lifts/exercises", token).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let exercises = response["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0], "Bench Press");
    assert_eq!(exercises[1], "Squat");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_lift() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = &user.tokens.access_token;

    let body = json!({ "exercise": "Overhead Press", "weight": 50.0, "reps": 8 });
    let (_, response) = app.post_auth("/api/v1/lifts", &body.to_string(), token).await;
    let lift: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = lift["id"].as_str().unwrap();

    let (status, _) = app.delete_auth(&format!("/api/v1/lifts/{}", id), token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete_auth(&format!("/api/v1/lifts/{}", id), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
