//! Target API routes - derived daily targets and the BMI scale

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::TargetRecord;
use crate::services::{dec_to_f64, TargetService};
use crate::state::AppState;
use axum::{extract::State, routing::put, Json, Router};
use macrolog_shared::targets::bmi_scale_position;
use macrolog_shared::types::{
    BmiScaleMarkers, DeriveTargetsRequest, TargetInputEcho, TargetsResponse,
};

/// Create target routes
pub fn target_routes() -> Router<AppState> {
    Router::new().route("/", put(set_targets).get(get_targets))
}

fn to_response(record: TargetRecord) -> TargetsResponse {
    TargetsResponse {
        bmi: dec_to_f64(record.bmi),
        bmi_category: record.bmi_category,
        bmi_scale_position: dec_to_f64(record.bmi_scale_position),
        scale_markers: BmiScaleMarkers {
            underweight_max: bmi_scale_position(18.5),
            normal_max: bmi_scale_position(25.0),
            overweight_max: bmi_scale_position(30.0),
        },
        weight_kg: dec_to_f64(record.weight_kg),
        weight_lbs: dec_to_f64(record.weight_lbs),
        calorie_target: record.calorie_target,
        protein_target_g: record.protein_target_g,
        carbs_target_g: record.carbs_target_g,
        input: TargetInputEcho {
            sex: record.sex,
            weight: dec_to_f64(record.weight),
            height: dec_to_f64(record.height),
            unit_system: record.unit_system,
            activity_level: record.activity_level,
            goal: record.goal,
        },
        updated_at: record.updated_at,
    }
}

/// PUT /api/v1/targets - Derive and store targets from biometric input
async fn set_targets(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DeriveTargetsRequest>,
) -> Result<Json<TargetsResponse>, ApiError> {
    let record = TargetService::set_targets(state.db(), auth.user_id, req).await?;

    Ok(Json(to_response(record)))
}

/// GET /api/v1/targets - Latest target set for the user
async fn get_targets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<TargetsResponse>, ApiError> {
    let record = TargetService::get_targets(state.db(), auth.user_id).await?;

    Ok(Json(to_response(record)))
}
