//! Target service - derive and store daily targets
//!
//! Parses the wire-format enum strings, applies the boundary range checks,
//! runs the pure deriver, and upserts the single latest target row per
//! user. The submitted inputs are stored next to the derived values so the
//! target form can be re-opened for editing.

use crate::error::ApiError;
use crate::repositories::{TargetRecord, TargetRepository, UpsertTarget};
use crate::services::f64_to_dec;
use macrolog_shared::targets::{
    derive_targets, ActivityLevel, BiometricInput, FitnessGoal, Sex,
};
use macrolog_shared::types::DeriveTargetsRequest;
use macrolog_shared::units::UnitSystem;
use macrolog_shared::validation::{validate_height_cm, validate_weight_kg};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Target service
pub struct TargetService;

impl TargetService {
    /// Derive targets from the request and store them as the user's latest
    pub async fn set_targets(
        pool: &PgPool,
        user_id: Uuid,
        req: DeriveTargetsRequest,
    ) -> Result<TargetRecord, ApiError> {
        let input = parse_request(&req)?;

        // Range-check in SI regardless of the submitted unit system
        let weight_kg = input.unit_system.weight_to_kg(input.weight);
        let height_cm = input.unit_system.height_to_cm(input.height);
        validate_weight_kg(weight_kg).map_err(ApiError::Validation)?;
        validate_height_cm(height_cm).map_err(ApiError::Validation)?;

        let targets = derive_targets(&input)?;

        let record = TargetRepository::upsert(
            pool,
            UpsertTarget {
                user_id,
                sex: input.sex.as_str().to_string(),
                weight: f64_to_dec(input.weight),
                height: f64_to_dec(input.height),
                unit_system: input.unit_system.to_string(),
                activity_level: input.activity_level.as_str().to_string(),
                goal: input.goal.as_str().to_string(),
                bmi: f64_to_dec(targets.bmi),
                bmi_category: targets.bmi_category.label().to_string(),
                bmi_scale_position: f64_to_dec(targets.bmi_scale_position),
                weight_kg: f64_to_dec(targets.weight_kg),
                weight_lbs: f64_to_dec(targets.weight_lbs),
                calorie_target: targets.calorie_target,
                protein_target_g: targets.protein_target_g,
                carbs_target_g: targets.carbs_target_g,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, calories = targets.calorie_target,
            protein_g = targets.protein_target_g, "Updated daily targets");

        Ok(record)
    }

    /// Fetch the user's latest target set
    pub async fn get_targets(pool: &PgPool, user_id: Uuid) -> Result<TargetRecord, ApiError> {
        TargetRepository::find_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("No targets set yet".to_string()))
    }
}

/// Parse the wire-format request into a typed biometric input
fn parse_request(req: &DeriveTargetsRequest) -> Result<BiometricInput, ApiError> {
    let sex: Sex = req.sex.parse().map_err(ApiError::Validation)?;
    let activity_level: ActivityLevel =
        req.activity_level.parse().map_err(ApiError::Validation)?;
    let goal: FitnessGoal = req.goal.parse().map_err(ApiError::Validation)?;
    let unit_system: UnitSystem = match &req.unit_system {
        Some(s) => s.parse().map_err(ApiError::Validation)?,
        None => UnitSystem::Metric,
    };

    Ok(BiometricInput {
        sex,
        weight: req.weight,
        height: req.height,
        unit_system,
        activity_level,
        goal,
    })
}
