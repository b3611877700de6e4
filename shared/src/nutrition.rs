//! Nutrition aggregation module
//!
//! Turns a food catalog plus a selection of serving counts into running
//! nutrient totals, and a completed day's selection into an immutable
//! summary record. All functions are pure folds over the inputs; the
//! catalog and selection are owned by the caller.

use crate::errors::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A food in a user's catalog
///
/// `name` is the identity: the selection references foods by name, and a
/// user's catalog holds at most one entry per name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Display string, e.g. "100g" or "1 cup"
    pub serving_size: String,
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// The day's in-progress selection: food name -> serving count
///
/// Counts are always at least 1; decrementing an entry to zero removes it
/// outright, so iteration never yields dead entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionCounts(BTreeMap<String, u32>);

impl SelectionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one serving of `name`, creating the entry at 1 if absent
    pub fn add(&mut self, name: &str) {
        *self.0.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Remove one serving of `name`
    ///
    /// Deletes the entry when the count reaches zero. Removing a name that
    /// is not selected is a no-op.
    pub fn remove(&mut self, name: &str) {
        if let Some(count) = self.0.get_mut(name) {
            if *count > 1 {
                *count -= 1;
            } else {
                self.0.remove(name);
            }
        }
    }

    /// Drop the entire selection
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Serving count for `name`, zero if not selected
    pub fn count(&self, name: &str) -> u32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct selected foods
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl FromIterator<(String, u32)> for SelectionCounts {
    /// Builds a selection from raw pairs, dropping zero counts
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, count)| *count > 0)
                .collect(),
        )
    }
}

/// Running nutrient totals for a selection
///
/// Derived, never stored; recomputed from the catalog and selection on
/// every read. Zero in all fields iff the selection is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// One food's contribution to a saved summary: per-item totals, not
/// per-serving values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryFood {
    pub name: String,
    pub count: u32,
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// An immutable record of one saved day's nutrition
///
/// Created only by [`build_summary`]; never updated, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub total_protein: f64,
    pub total_calories: f64,
    pub total_carbs: f64,
    pub foods: Vec<SummaryFood>,
}

/// Look up a food in the catalog by name
fn find_food<'a>(catalog: &'a [FoodItem], name: &str) -> Option<&'a FoodItem> {
    catalog.iter().find(|item| item.name == name)
}

/// Compute nutrient totals for a selection against a catalog
///
/// A selected name missing from the catalog contributes zero: the UI may
/// still reference a food that was deleted after being selected.
/// Deterministic, order-independent, side-effect free.
pub fn compute_totals(catalog: &[FoodItem], counts: &SelectionCounts) -> NutritionTotals {
    counts
        .iter()
        .fold(NutritionTotals::default(), |totals, (name, count)| {
            match find_food(catalog, name) {
                Some(item) => {
                    let servings = count as f64;
                    NutritionTotals {
                        protein: totals.protein + item.protein * servings,
                        calories: totals.calories + item.calories * servings,
                        carbs: totals.carbs + item.carbs * servings,
                    }
                }
                None => totals,
            }
        })
}

/// Build the immutable summary for a completed day
///
/// Fails with [`CoreError::EmptySelection`] for an empty selection; callers
/// should disable the save action in that state rather than surface the
/// error. The resulting totals always equal [`compute_totals`] on the same
/// inputs; foods missing from the catalog keep their entry with zeroed
/// nutrients.
pub fn build_summary(
    catalog: &[FoodItem],
    counts: &SelectionCounts,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<FoodSummary, CoreError> {
    if counts.is_empty() {
        return Err(CoreError::EmptySelection);
    }

    let foods: Vec<SummaryFood> = counts
        .iter()
        .map(|(name, count)| {
            let servings = count as f64;
            match find_food(catalog, name) {
                Some(item) => SummaryFood {
                    name: name.to_string(),
                    count,
                    protein: item.protein * servings,
                    calories: item.calories * servings,
                    carbs: item.carbs * servings,
                },
                None => SummaryFood {
                    name: name.to_string(),
                    count,
                    protein: 0.0,
                    calories: 0.0,
                    carbs: 0.0,
                },
            }
        })
        .collect();

    let totals = compute_totals(catalog, counts);

    Ok(FoodSummary {
        id: Uuid::new_v4(),
        user_id,
        date: now,
        total_protein: totals.protein,
        total_calories: totals.calories,
        total_carbs: totals.carbs,
        foods,
    })
}
