//! Daily summary repository - database operations for saved days
//!
//! Summaries are append-only snapshots: inserted once, listed newest
//! first, and deleted explicitly. There is no update path.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Saved daily summary from the database
///
/// The per-food breakdown is stored as a JSONB array of
/// `{name, count, protein, calories, carbs}` objects.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub total_protein: Decimal,
    pub total_calories: Decimal,
    pub total_carbs: Decimal,
    pub foods: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a summary
///
/// The id and timestamp come from the caller: the calculation core mints
/// the id when the summary is built.
#[derive(Debug, Clone)]
pub struct CreateSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub total_protein: Decimal,
    pub total_calories: Decimal,
    pub total_carbs: Decimal,
    pub foods: serde_json::Value,
}

/// Daily summary repository
pub struct SummaryRepository;

impl SummaryRepository {
    /// Persist a saved day
    pub async fn create(pool: &PgPool, input: CreateSummary) -> Result<SummaryRecord> {
        let record = sqlx::query_as::<_, SummaryRecord>(
            r#"
            INSERT INTO food_summaries
                (id, user_id, saved_at, total_protein, total_calories, total_carbs, foods)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, saved_at, total_protein, total_calories, total_carbs,
                      foods, created_at
            "#,
        )
        .bind(input.id)
        .bind(input.user_id)
        .bind(input.saved_at)
        .bind(input.total_protein)
        .bind(input.total_calories)
        .bind(input.total_carbs)
        .bind(&input.foods)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's summaries, most recent first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<SummaryRecord>> {
        let records = sqlx::query_as::<_, SummaryRecord>(
            r#"
            SELECT id, user_id, saved_at, total_protein, total_calories, total_carbs,
                   foods, created_at
            FROM food_summaries
            WHERE user_id = $1
            ORDER BY saved_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a summary
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM food_summaries
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
