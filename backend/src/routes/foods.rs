//! Food catalog API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::FoodRecord;
use crate::services::{dec_to_f64, CatalogService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use macrolog_shared::types::{CreateFoodRequest, FoodResponse, SeedCatalogResponse};
use uuid::Uuid;

/// Create food catalog routes
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_foods).post(create_food))
        .route("/seed", post(seed_catalog))
        .route("/:id", delete(delete_food))
}

fn to_response(item: FoodRecord) -> FoodResponse {
    FoodResponse {
        id: item.id.to_string(),
        name: item.name,
        serving_size: item.serving_size,
        protein: dec_to_f64(item.protein),
        calories: dec_to_f64(item.calories),
        carbs: dec_to_f64(item.carbs),
        created_at: item.created_at,
    }
}

/// GET /api/v1/foods - List the user's catalog
async fn list_foods(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FoodResponse>>, ApiError> {
    let items = CatalogService::list_foods(state.db(), auth.user_id).await?;

    Ok(Json(items.into_iter().map(to_response).collect()))
}

/// POST /api/v1/foods - Add a food to the catalog
async fn create_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodResponse>), ApiError> {
    let item = CatalogService::create_food(state.db(), auth.user_id, req).await?;

    Ok((StatusCode::CREATED, Json(to_response(item))))
}

/// POST /api/v1/foods/seed - Seed the catalog with the starter list
async fn seed_catalog(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SeedCatalogResponse>, ApiError> {
    let inserted = CatalogService::seed_catalog(state.db(), auth.user_id).await?;

    Ok(Json(SeedCatalogResponse { inserted }))
}

/// DELETE /api/v1/foods/:id - Remove a food from the catalog
async fn delete_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let food_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::Validation("Invalid food ID".to_string()))?;

    CatalogService::delete_food(state.db(), auth.user_id, food_id).await?;

    Ok(Json(()))
}
