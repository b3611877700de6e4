//! Diary API routes - live totals and saved daily summaries

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::DiaryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use macrolog_shared::nutrition::FoodSummary;
use macrolog_shared::types::{
    SelectionRequest, SummaryFoodResponse, SummaryResponse, TotalsResponse,
};
use uuid::Uuid;

/// Create diary routes
pub fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/totals", post(preview_totals))
        .route("/summaries", post(save_day).get(list_summaries))
        .route("/summaries/:id", delete(delete_summary))
}

fn to_response(summary: FoodSummary) -> SummaryResponse {
    SummaryResponse {
        id: summary.id.to_string(),
        date: summary.date,
        total_protein: summary.total_protein,
        total_calories: summary.total_calories,
        total_carbs: summary.total_carbs,
        foods: summary
            .foods
            .into_iter()
            .map(|food| SummaryFoodResponse {
                name: food.name,
                count: food.count,
                protein: food.protein,
                calories: food.calories,
                carbs: food.carbs,
            })
            .collect(),
    }
}

/// POST /api/v1/diary/totals - Live totals for the posted selection
async fn preview_totals(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<TotalsResponse>, ApiError> {
    let totals = DiaryService::preview_totals(state.db(), auth.user_id, &req.foods).await?;

    Ok(Json(TotalsResponse {
        protein: totals.protein,
        calories: totals.calories,
        carbs: totals.carbs,
    }))
}

/// POST /api/v1/diary/summaries - Save the day as an immutable summary
async fn save_day(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SelectionRequest>,
) -> Result<(StatusCode, Json<SummaryResponse>), ApiError> {
    let summary = DiaryService::save_day(state.db(), auth.user_id, &req.foods).await?;

    Ok((StatusCode::CREATED, Json(to_response(summary))))
}

/// GET /api/v1/diary/summaries - Saved summaries, most recent first
async fn list_summaries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<SummaryResponse>>, ApiError> {
    let summaries = DiaryService::list_summaries(state.db(), auth.user_id).await?;

    Ok(Json(summaries.into_iter().map(to_response).collect()))
}

/// DELETE /api/v1/diary/summaries/:id - Delete a saved summary
async fn delete_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let summary_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid summary ID".to_string()))?;

    DiaryService::delete_summary(state.db(), auth.user_id, summary_id).await?;

    Ok(Json(()))
}
