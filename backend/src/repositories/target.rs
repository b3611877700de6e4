//! Target repository - one latest target set per user
//!
//! Each derivation supersedes the previous row wholesale. The biometric
//! inputs are stored next to the derived values so the target form can be
//! re-opened for editing.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Stored target set (inputs + derived values) from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TargetRecord {
    pub user_id: Uuid,
    // Biometric inputs as submitted
    pub sex: String,
    pub weight: Decimal,
    pub height: Decimal,
    pub unit_system: String,
    pub activity_level: String,
    pub goal: String,
    // Derived values
    pub bmi: Decimal,
    pub bmi_category: String,
    pub bmi_scale_position: Decimal,
    pub weight_kg: Decimal,
    pub weight_lbs: Decimal,
    pub calorie_target: i32,
    pub protein_target_g: i32,
    pub carbs_target_g: i32,
    pub updated_at: DateTime<Utc>,
}

/// Input for upserting a user's target set
#[derive(Debug, Clone)]
pub struct UpsertTarget {
    pub user_id: Uuid,
    pub sex: String,
    pub weight: Decimal,
    pub height: Decimal,
    pub unit_system: String,
    pub activity_level: String,
    pub goal: String,
    pub bmi: Decimal,
    pub bmi_category: String,
    pub bmi_scale_position: Decimal,
    pub weight_kg: Decimal,
    pub weight_lbs: Decimal,
    pub calorie_target: i32,
    pub protein_target_g: i32,
    pub carbs_target_g: i32,
}

/// Target repository
pub struct TargetRepository;

impl TargetRepository {
    /// Insert or replace the user's target set
    pub async fn upsert(pool: &PgPool, input: UpsertTarget) -> Result<TargetRecord> {
        let record = sqlx::query_as::<_, TargetRecord>(
            r#"
            INSERT INTO user_targets
                (user_id, sex, weight, height, unit_system, activity_level, goal,
                 bmi, bmi_category, bmi_scale_position, weight_kg, weight_lbs,
                 calorie_target, protein_target_g, carbs_target_g)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (user_id) DO UPDATE SET
                sex = EXCLUDED.sex,
                weight = EXCLUDED.weight,
                height = EXCLUDED.height,
                unit_system = EXCLUDED.unit_system,
                activity_level = EXCLUDED.activity_level,
                goal = EXCLUDED.goal,
                bmi = EXCLUDED.bmi,
                bmi_category = EXCLUDED.bmi_category,
                bmi_scale_position = EXCLUDED.bmi_scale_position,
                weight_kg = EXCLUDED.weight_kg,
                weight_lbs = EXCLUDED.weight_lbs,
                calorie_target = EXCLUDED.calorie_target,
                protein_target_g = EXCLUDED.protein_target_g,
                carbs_target_g = EXCLUDED.carbs_target_g,
                updated_at = NOW()
            RETURNING user_id, sex, weight, height, unit_system, activity_level, goal,
                      bmi, bmi_category, bmi_scale_position, weight_kg, weight_lbs,
                      calorie_target, protein_target_g, carbs_target_g, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.sex)
        .bind(input.weight)
        .bind(input.height)
        .bind(&input.unit_system)
        .bind(&input.activity_level)
        .bind(&input.goal)
        .bind(input.bmi)
        .bind(&input.bmi_category)
        .bind(input.bmi_scale_position)
        .bind(input.weight_kg)
        .bind(input.weight_lbs)
        .bind(input.calorie_target)
        .bind(input.protein_target_g)
        .bind(input.carbs_target_g)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Fetch the user's latest target set
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<TargetRecord>> {
        let record = sqlx::query_as::<_, TargetRecord>(
            r#"
            SELECT user_id, sex, weight, height, unit_system, activity_level, goal,
                   bmi, bmi_category, bmi_scale_position, weight_kg, weight_lbs,
                   calorie_target, protein_target_g, carbs_target_g, updated_at
            FROM user_targets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
