//! Lift API routes - strength-training sets

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::LiftRecord;
use crate::services::{dec_to_f64, LiftService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use macrolog_shared::types::{
    ExerciseListResponse, LiftHistoryQuery, LiftResponse, LogLiftRequest,
};
use uuid::Uuid;

/// Create lift routes
pub fn lift_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_lift).get(get_history))
        .route("/exercises", get(list_exercises))
        .route("/:id", delete(delete_lift))
}

fn to_response(record: LiftRecord) -> LiftResponse {
    LiftResponse {
        id: record.id.to_string(),
        exercise: record.exercise,
        weight_kg: dec_to_f64(record.weight_kg),
        reps: record.reps,
        performed_at: record.performed_at,
    }
}

/// POST /api/v1/lifts - Record a strength-training set
async fn log_lift(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogLiftRequest>,
) -> Result<(StatusCode, Json<LiftResponse>), ApiError> {
    let record = LiftService::log_lift(state.db(), auth.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// GET /api/v1/lifts - Lift history, most recent first
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<LiftHistoryQuery>,
) -> Result<Json<Vec<LiftResponse>>, ApiError> {
    let records = LiftService::get_history(state.db(), auth.user_id, query).await?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

/// GET /api/v1/lifts/exercises - Distinct exercise names
async fn list_exercises(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ExerciseListResponse>, ApiError> {
    let exercises = LiftService::list_exercises(state.db(), auth.user_id).await?;

    Ok(Json(ExerciseListResponse { exercises }))
}

/// DELETE /api/v1/lifts/:id - Delete a recorded set
async fn delete_lift(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let lift_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid lift ID".to_string()))?;

    LiftService::delete_lift(state.db(), auth.user_id, lift_id).await?;

    Ok(Json(()))
}
