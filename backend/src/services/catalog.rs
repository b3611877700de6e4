//! Catalog service - business logic for the per-user food catalog

use crate::error::ApiError;
use crate::repositories::{CreateFood, FoodRecord, FoodRepository};
use crate::services::f64_to_dec;
use macrolog_shared::types::CreateFoodRequest;
use macrolog_shared::validation::{validate_food_name, validate_nutrient};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Starter catalog shipped with the binary, seeded on request
const STARTER_FOODS_CSV: &str = include_str!("../../seed/starter_foods.csv");

/// One row of the starter catalog CSV
#[derive(Debug, Deserialize)]
struct StarterFood {
    name: String,
    serving_size: String,
    protein: f64,
    calories: f64,
    carbs: f64,
}

/// Catalog service
pub struct CatalogService;

impl CatalogService {
    /// List the user's catalog, ordered by name
    pub async fn list_foods(pool: &PgPool, user_id: Uuid) -> Result<Vec<FoodRecord>, ApiError> {
        let items = FoodRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(items)
    }

    /// Create a catalog entry
    pub async fn create_food(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateFoodRequest,
    ) -> Result<FoodRecord, ApiError> {
        validate_food_name(&req.name).map_err(ApiError::Validation)?;
        if req.serving_size.trim().is_empty() {
            return Err(ApiError::Validation(
                "Serving size cannot be empty".to_string(),
            ));
        }
        for value in [req.protein, req.calories, req.carbs] {
            validate_nutrient(value).map_err(ApiError::Validation)?;
        }

        let name = req.name.trim().to_string();

        if FoodRepository::name_exists(pool, user_id, &name)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(format!(
                "Food '{}' is already in the catalog",
                name
            )));
        }

        let input = CreateFood {
            user_id,
            name,
            serving_size: req.serving_size.trim().to_string(),
            protein: f64_to_dec(req.protein),
            calories: f64_to_dec(req.calories),
            carbs: f64_to_dec(req.carbs),
        };

        let item = FoodRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        Ok(item)
    }

    /// Seed the user's catalog from the embedded starter list
    ///
    /// Names the user already has are left untouched. Returns the number
    /// of foods actually inserted.
    pub async fn seed_catalog(pool: &PgPool, user_id: Uuid) -> Result<usize, ApiError> {
        let inputs: Vec<CreateFood> = parse_starter_foods()
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(|food| CreateFood {
                user_id,
                name: food.name,
                serving_size: food.serving_size,
                protein: f64_to_dec(food.protein),
                calories: f64_to_dec(food.calories),
                carbs: f64_to_dec(food.carbs),
            })
            .collect();

        let inserted = FoodRepository::create_many(pool, inputs)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, inserted, "Seeded starter catalog");

        Ok(inserted)
    }

    /// Delete a catalog entry
    pub async fn delete_food(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = FoodRepository::delete(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Food not found".to_string()));
        }

        Ok(())
    }
}

/// Parse the embedded starter catalog
fn parse_starter_foods() -> anyhow::Result<Vec<StarterFood>> {
    let mut reader = csv::Reader::from_reader(STARTER_FOODS_CSV.as_bytes());
    let mut foods = Vec::new();
    for row in reader.deserialize() {
        let food: StarterFood = row?;
        foods.push(food);
    }
    Ok(foods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_catalog_parses() {
        let foods = parse_starter_foods().unwrap();
        assert!(!foods.is_empty());
    }

    #[test]
    fn test_starter_catalog_rows_are_valid() {
        for food in parse_starter_foods().unwrap() {
            assert!(validate_food_name(&food.name).is_ok(), "bad name: {}", food.name);
            assert!(!food.serving_size.trim().is_empty());
            for value in [food.protein, food.calories, food.carbs] {
                assert!(validate_nutrient(value).is_ok(), "bad nutrient in {}", food.name);
            }
        }
    }

    #[test]
    fn test_starter_catalog_names_are_unique() {
        let foods = parse_starter_foods().unwrap();
        let mut names: Vec<&str> = foods.iter().map(|f| f.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate names in starter catalog");
    }
}
