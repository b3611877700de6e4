//! API request and response types

use crate::nutrition::SelectionCounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Current user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Food Catalog Types
// ============================================================================

/// Create food request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    /// Display string, e.g. "100g" or "1 cup"
    pub serving_size: String,
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// Food catalog entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodResponse {
    pub id: String,
    pub name: String,
    pub serving_size: String,
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
    pub created_at: DateTime<Utc>,
}

/// Catalog seed result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCatalogResponse {
    /// Number of starter foods inserted (existing names are skipped)
    pub inserted: usize,
}

// ============================================================================
// Diary Types
// ============================================================================

/// A selection of serving counts posted by the client
///
/// Used both for the live totals preview and for saving the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub foods: SelectionCounts,
}

/// Live totals preview response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsResponse {
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// One food's contribution within a saved summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryFoodResponse {
    pub name: String,
    pub count: u32,
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
}

/// Saved daily summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub id: String,
    pub date: DateTime<Utc>,
    pub total_protein: f64,
    pub total_calories: f64,
    pub total_carbs: f64,
    pub foods: Vec<SummaryFoodResponse>,
}

// ============================================================================
// Target Types
// ============================================================================

/// Target derivation request
///
/// Enum fields travel as strings and are parsed case-insensitively at the
/// service boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveTargetsRequest {
    /// Biological sex: male or female
    pub sex: String,
    /// Weight in the unit system's weight unit
    pub weight: f64,
    /// Height in the unit system's height unit
    pub height: f64,
    /// Unit system: metric or imperial
    #[serde(default)]
    pub unit_system: Option<String>,
    /// Activity level: sedentary, moderately_active, highly_active
    pub activity_level: String,
    /// Fitness goal: build_muscle, lose_weight, maintain
    pub goal: String,
}

/// Positions of the category boundaries on the visual BMI scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiScaleMarkers {
    pub underweight_max: f64,
    pub normal_max: f64,
    pub overweight_max: f64,
}

/// Derived target set response
///
/// Echoes the biometric inputs so the target form can be re-edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsResponse {
    pub bmi: f64,
    pub bmi_category: String,
    /// Position on the 15-35 visual scale, 0-100
    pub bmi_scale_position: f64,
    pub scale_markers: BmiScaleMarkers,
    pub weight_kg: f64,
    pub weight_lbs: f64,
    pub calorie_target: i32,
    pub protein_target_g: i32,
    pub carbs_target_g: i32,
    pub input: TargetInputEcho,
    pub updated_at: DateTime<Utc>,
}

/// The stored biometric inputs behind a target set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetInputEcho {
    pub sex: String,
    pub weight: f64,
    pub height: f64,
    pub unit_system: String,
    pub activity_level: String,
    pub goal: String,
}

// ============================================================================
// Lift Types
// ============================================================================

/// Log a strength-training set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLiftRequest {
    pub exercise: String,
    /// Weight value in the specified unit (defaults to kg)
    pub weight: f64,
    /// Unit of the weight value (kg or lbs)
    #[serde(default)]
    pub unit: Option<String>,
    pub reps: i32,
    /// When the set was performed (defaults to now)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_at: Option<DateTime<Utc>>,
}

/// Recorded lift set response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftResponse {
    pub id: String,
    pub exercise: String,
    /// Weight in kg (always stored in SI)
    pub weight_kg: f64,
    pub reps: i32,
    pub performed_at: DateTime<Utc>,
}

/// Lift history query parameters
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LiftHistoryQuery {
    /// Restrict to a single exercise name
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Distinct exercise names response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<String>,
}
