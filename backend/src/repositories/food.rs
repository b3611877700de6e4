//! Food catalog repository - database operations for catalog entries

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Food catalog entry from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub serving_size: String,
    pub protein: Decimal,
    pub calories: Decimal,
    pub carbs: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a catalog entry
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub user_id: Uuid,
    pub name: String,
    pub serving_size: String,
    pub protein: Decimal,
    pub calories: Decimal,
    pub carbs: Decimal,
}

/// Food catalog repository
pub struct FoodRepository;

impl FoodRepository {
    /// Get a user's full catalog, ordered by name
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<FoodRecord>> {
        let items = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, user_id, name, serving_size, protein, calories, carbs, created_at
            FROM food_items
            WHERE user_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    /// Create a new catalog entry
    pub async fn create(pool: &PgPool, input: CreateFood) -> Result<FoodRecord> {
        let item = sqlx::query_as::<_, FoodRecord>(
            r#"
            INSERT INTO food_items (user_id, name, serving_size, protein, calories, carbs)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, serving_size, protein, calories, carbs, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.serving_size)
        .bind(input.protein)
        .bind(input.calories)
        .bind(input.carbs)
        .fetch_one(pool)
        .await?;

        Ok(item)
    }

    /// Insert many catalog entries, skipping names the user already has
    ///
    /// Returns the number of rows actually inserted.
    pub async fn create_many(pool: &PgPool, inputs: Vec<CreateFood>) -> Result<usize> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0usize;

        for input in inputs {
            let result = sqlx::query(
                r#"
                INSERT INTO food_items (user_id, name, serving_size, protein, calories, carbs)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (user_id, name) DO NOTHING
                "#,
            )
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.serving_size)
            .bind(input.protein)
            .bind(input.calories)
            .bind(input.carbs)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected() as usize;
        }

        tx.commit().await?;

        Ok(inserted)
    }

    /// Check if a name exists in the user's catalog
    pub async fn name_exists(pool: &PgPool, user_id: Uuid, name: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM food_items WHERE user_id = $1 AND name = $2)
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Delete a catalog entry
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM food_items
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
