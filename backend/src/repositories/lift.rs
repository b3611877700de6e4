//! Lift repository - database operations for strength-training sets

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Recorded lift set from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LiftRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise: String,
    pub weight_kg: Decimal,
    pub reps: i32,
    pub performed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a lift set
#[derive(Debug, Clone)]
pub struct CreateLift {
    pub user_id: Uuid,
    pub exercise: String,
    pub weight_kg: Decimal,
    pub reps: i32,
    pub performed_at: DateTime<Utc>,
}

/// Lift repository
pub struct LiftRepository;

impl LiftRepository {
    /// Record a lift set
    pub async fn create(pool: &PgPool, input: CreateLift) -> Result<LiftRecord> {
        let record = sqlx::query_as::<_, LiftRecord>(
            r#"
            INSERT INTO lift_sets (user_id, exercise, weight_kg, reps, performed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, exercise, weight_kg, reps, performed_at, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.exercise)
        .bind(input.weight_kg)
        .bind(input.reps)
        .bind(input.performed_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the user's most recent lift sets
    pub async fn get_recent(pool: &PgPool, user_id: Uuid, limit: i64) -> Result<Vec<LiftRecord>> {
        let records = sqlx::query_as::<_, LiftRecord>(
            r#"
            SELECT id, user_id, exercise, weight_kg, reps, performed_at, created_at
            FROM lift_sets
            WHERE user_id = $1
            ORDER BY performed_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the user's most recent sets of one exercise
    pub async fn get_by_exercise(
        pool: &PgPool,
        user_id: Uuid,
        exercise: &str,
        limit: i64,
    ) -> Result<Vec<LiftRecord>> {
        let records = sqlx::query_as::<_, LiftRecord>(
            r#"
            SELECT id, user_id, exercise, weight_kg, reps, performed_at, created_at
            FROM lift_sets
            WHERE user_id = $1 AND exercise = $2
            ORDER BY performed_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(exercise)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Distinct exercise names the user has recorded
    pub async fn list_exercises(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT exercise
            FROM lift_sets
            WHERE user_id = $1
            ORDER BY exercise ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(names)
    }

    /// Delete a lift set
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM lift_sets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
