//! Diary service - live totals and saved daily summaries
//!
//! The in-progress selection is client state; it arrives whole with each
//! request. This service loads the user's catalog, runs the pure
//! aggregation core against it, and persists the resulting summary on
//! save.

use crate::error::ApiError;
use crate::repositories::{CreateSummary, FoodRecord, SummaryRepository};
use crate::services::{dec_to_f64, f64_to_dec, CatalogService};
use chrono::Utc;
use macrolog_shared::nutrition::{
    build_summary, compute_totals, FoodItem, FoodSummary, NutritionTotals, SelectionCounts,
    SummaryFood,
};
use macrolog_shared::validation::{validate_food_name, validate_serving_count};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Diary service
pub struct DiaryService;

impl DiaryService {
    /// Compute live totals for the posted selection
    pub async fn preview_totals(
        pool: &PgPool,
        user_id: Uuid,
        selection: &SelectionCounts,
    ) -> Result<NutritionTotals, ApiError> {
        validate_selection(selection)?;

        let catalog = Self::load_catalog(pool, user_id).await?;

        Ok(compute_totals(&catalog, selection))
    }

    /// Save the day: build an immutable summary and persist it
    pub async fn save_day(
        pool: &PgPool,
        user_id: Uuid,
        selection: &SelectionCounts,
    ) -> Result<FoodSummary, ApiError> {
        validate_selection(selection)?;

        let catalog = Self::load_catalog(pool, user_id).await?;

        let summary = build_summary(&catalog, selection, user_id, Utc::now())?;

        let input = CreateSummary {
            id: summary.id,
            user_id,
            saved_at: summary.date,
            total_protein: f64_to_dec(summary.total_protein),
            total_calories: f64_to_dec(summary.total_calories),
            total_carbs: f64_to_dec(summary.total_carbs),
            foods: serde_json::to_value(&summary.foods)
                .map_err(|e| ApiError::Internal(e.into()))?,
        };

        SummaryRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %user_id, summary_id = %summary.id,
            foods = summary.foods.len(), "Saved daily summary");

        Ok(summary)
    }

    /// List the user's saved summaries, most recent first
    pub async fn list_summaries(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<FoodSummary>, ApiError> {
        let records = SummaryRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        records
            .into_iter()
            .map(|record| {
                let foods: Vec<SummaryFood> = serde_json::from_value(record.foods)
                    .map_err(|e| ApiError::Internal(e.into()))?;

                Ok(FoodSummary {
                    id: record.id,
                    user_id: record.user_id,
                    date: record.saved_at,
                    total_protein: dec_to_f64(record.total_protein),
                    total_calories: dec_to_f64(record.total_calories),
                    total_carbs: dec_to_f64(record.total_carbs),
                    foods,
                })
            })
            .collect()
    }

    /// Delete a saved summary
    pub async fn delete_summary(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = SummaryRepository::delete(pool, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Summary not found".to_string()));
        }

        Ok(())
    }

    /// Load the user's catalog in the form the aggregation core expects
    async fn load_catalog(pool: &PgPool, user_id: Uuid) -> Result<Vec<FoodItem>, ApiError> {
        let records = CatalogService::list_foods(pool, user_id).await?;
        Ok(records.iter().map(to_core_item).collect())
    }
}

/// Convert a catalog record into the core's food type
fn to_core_item(record: &FoodRecord) -> FoodItem {
    FoodItem {
        name: record.name.clone(),
        serving_size: record.serving_size.clone(),
        protein: dec_to_f64(record.protein),
        calories: dec_to_f64(record.calories),
        carbs: dec_to_f64(record.carbs),
    }
}

/// Reject malformed selections before they reach the core
///
/// The add/remove contract never produces zero counts, but the selection
/// arrives as client JSON and is not trusted.
fn validate_selection(selection: &SelectionCounts) -> Result<(), ApiError> {
    for (name, count) in selection.iter() {
        validate_food_name(name).map_err(ApiError::Validation)?;
        validate_serving_count(count).map_err(ApiError::Validation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_from(pairs: &[(&str, u32)]) -> SelectionCounts {
        pairs
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_validate_selection_accepts_normal_counts() {
        let selection = selection_from(&[("Chicken Breast", 2), ("White Rice", 1)]);
        assert!(validate_selection(&selection).is_ok());
    }

    #[test]
    fn test_validate_selection_rejects_oversized_counts() {
        let selection = selection_from(&[("Chicken Breast", 100)]);
        assert!(validate_selection(&selection).is_err());
    }

    #[test]
    fn test_validate_selection_rejects_blank_names() {
        let selection = selection_from(&[("   ", 1)]);
        assert!(validate_selection(&selection).is_err());
    }

    #[test]
    fn test_core_item_conversion_preserves_values() {
        let record = FoodRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Oatmeal".to_string(),
            serving_size: "1 cup cooked".to_string(),
            protein: f64_to_dec(6.0),
            calories: f64_to_dec(166.0),
            carbs: f64_to_dec(28.0),
            created_at: Utc::now(),
        };

        let item = to_core_item(&record);
        assert_eq!(item.name, "Oatmeal");
        assert_eq!(item.protein, 6.0);
        assert_eq!(item.calories, 166.0);
        assert_eq!(item.carbs, 28.0);
    }

    #[test]
    fn test_summary_foods_json_roundtrip() {
        // The JSONB column must round-trip the core's food entries exactly
        let foods = vec![SummaryFood {
            name: "Egg".to_string(),
            count: 3,
            protein: 18.0,
            calories: 234.0,
            carbs: 1.8,
        }];

        let value = serde_json::to_value(&foods).unwrap();
        let back: Vec<SummaryFood> = serde_json::from_value(value).unwrap();
        assert_eq!(back, foods);
    }
}
