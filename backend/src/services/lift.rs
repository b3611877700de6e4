//! Lift service - business logic for strength-training sets

use crate::error::ApiError;
use crate::repositories::{CreateLift, LiftRecord, LiftRepository};
use crate::services::f64_to_dec;
use chrono::Utc;
use macrolog_shared::types::{LiftHistoryQuery, LogLiftRequest};
use macrolog_shared::units::lbs_to_kg;
use macrolog_shared::validation::{
    validate_exercise_name, validate_lift_weight_kg, validate_reps,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Default number of sets returned by history queries
const DEFAULT_HISTORY_LIMIT: i64 = 100;

/// Hard cap on history query size
const MAX_HISTORY_LIMIT: i64 = 500;

/// Lift service
pub struct LiftService;

impl LiftService {
    /// Record a strength-training set
    pub async fn log_lift(
        pool: &PgPool,
        user_id: Uuid,
        req: LogLiftRequest,
    ) -> Result<LiftRecord, ApiError> {
        validate_exercise_name(&req.exercise).map_err(ApiError::Validation)?;

        let weight_kg = weight_to_kg(req.weight, req.unit.as_deref())?;
        validate_lift_weight_kg(weight_kg).map_err(ApiError::Validation)?;
        validate_reps(req.reps).map_err(ApiError::Validation)?;

        let input = CreateLift {
            user_id,
            exercise: req.exercise.trim().to_string(),
            weight_kg: f64_to_dec(weight_kg),
            reps: req.reps,
            performed_at: req.performed_at.unwrap_or_else(Utc::now),
        };

        let record = LiftRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record)
    }

    /// Get the user's lift history, most recent first
    pub async fn get_history(
        pool: &PgPool,
        user_id: Uuid,
        query: LiftHistoryQuery,
    ) -> Result<Vec<LiftRecord>, ApiError> {
        let limit = query
            .limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        let records = match query.exercise.as_deref() {
            Some(exercise) if !exercise.trim().is_empty() => {
                LiftRepository::get_by_exercise(pool, user_id, exercise.trim(), limit).await
            }
            _ => LiftRepository::get_recent(pool, user_id, limit).await,
        }
        .map_err(ApiError::Internal)?;

        Ok(records)
    }

    /// Distinct exercise names the user has recorded
    pub async fn list_exercises(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, ApiError> {
        LiftRepository::list_exercises(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Delete a recorded set
    pub async fn delete_lift(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = LiftRepository::delete(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Lift set not found".to_string()));
        }

        Ok(())
    }
}

/// Normalize a payload weight into kilograms
///
/// Missing unit means the value is already in kg.
fn weight_to_kg(weight: f64, unit: Option<&str>) -> Result<f64, ApiError> {
    match unit {
        None => Ok(weight),
        Some(u) => match u.to_lowercase().as_str() {
            "kg" | "kgs" => Ok(weight),
            "lbs" | "lb" => Ok(lbs_to_kg(weight)),
            other => Err(ApiError::Validation(format!(
                "Unknown weight unit: {}",
                other
            ))),
        },
    }
}
