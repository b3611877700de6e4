//! Daily target derivation module
//!
//! Converts biometric input (sex, weight, height, activity level, fitness
//! goal) into BMI, a BMI category with its position on the visual scale,
//! and daily calorie/protein/carb targets.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: derivation is deterministic arithmetic, no side effects
//! 2. **Validate First**: non-positive measurements are rejected before any math
//! 3. **Unit Agnostic**: metric and imperial input produce identical targets

use crate::errors::CoreError;
use crate::units::{Biometrics, UnitSystem};
use serde::{Deserialize, Serialize};

/// Calories per gram of carbohydrate
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;

/// Fraction of the calorie target allotted to carbohydrates
pub const CARB_CALORIE_SHARE: f64 = 0.5;

/// Lower bound of the visual BMI scale
pub const BMI_SCALE_MIN: f64 = 15.0;

/// Upper bound of the visual BMI scale
pub const BMI_SCALE_MAX: f64 = 35.0;

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex for target calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Canonical token, matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Activity level for the calorie-target formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise most days
    HighlyActive,
}

impl ActivityLevel {
    /// Daily calories per pound of body weight for this activity level
    pub fn kcal_per_lb(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 14.0,
            ActivityLevel::ModeratelyActive => 16.0,
            ActivityLevel::HighlyActive => 18.0,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::ModeratelyActive => "Exercise 3-5 days/week",
            ActivityLevel::HighlyActive => "Hard exercise most days",
        }
    }

    /// Canonical token, matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::HighlyActive => "highly_active",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "highly_active" => Ok(ActivityLevel::HighlyActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Fitness goal applied as a surplus/deficit on the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// 10% surplus, higher protein
    BuildMuscle,
    /// 20% deficit
    LoseWeight,
    #[default]
    Maintain,
}

impl FitnessGoal {
    /// Multiplier applied to the activity-based calorie figure
    pub fn calorie_factor(&self) -> f64 {
        match self {
            FitnessGoal::BuildMuscle => 1.1,
            FitnessGoal::LoseWeight => 0.8,
            FitnessGoal::Maintain => 1.0,
        }
    }

    /// Daily protein grams per kilogram of body weight
    pub fn protein_g_per_kg(&self) -> f64 {
        match self {
            FitnessGoal::BuildMuscle => 1.8,
            FitnessGoal::LoseWeight | FitnessGoal::Maintain => 1.6,
        }
    }

    /// Canonical token, matching the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::BuildMuscle => "build_muscle",
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::Maintain => "maintain",
        }
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "build_muscle" => Ok(FitnessGoal::BuildMuscle),
            "lose_weight" => Ok(FitnessGoal::LoseWeight),
            "maintain" => Ok(FitnessGoal::Maintain),
            _ => Err(format!("Unknown fitness goal: {}", s)),
        }
    }
}

/// Biometric input supplied once per target-setting action
///
/// Weight and height are interpreted in `unit_system`. The input is
/// transient; only the derived [`TargetSet`] (plus these fields for form
/// re-editing) is persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    pub unit_system: UnitSystem,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

// ============================================================================
// BMI Classification
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Upper BMI bound, where one exists (Obese is open-ended)
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            BmiCategory::Underweight => Some(18.5),
            BmiCategory::Normal => Some(25.0),
            BmiCategory::Overweight => Some(30.0),
            BmiCategory::Obese => None,
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Position of a BMI value on the fixed 15-35 visual scale, clamped to 0-100
///
/// Category boundaries (18.5, 25, 30) map through the same formula, so the
/// rendered markers always line up with the indicator.
pub fn bmi_scale_position(bmi: f64) -> f64 {
    let position = (bmi - BMI_SCALE_MIN) / (BMI_SCALE_MAX - BMI_SCALE_MIN) * 100.0;
    position.clamp(0.0, 100.0)
}

// ============================================================================
// Target Derivation
// ============================================================================

/// A derived set of daily targets
///
/// Superseded wholesale by the next derivation; never merged. The category
/// and scale position are always consistent with `bmi` via the fixed
/// thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSet {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Position on the 15-35 visual scale, 0-100
    pub bmi_scale_position: f64,
    pub weight_kg: f64,
    pub weight_lbs: f64,
    pub calorie_target: i32,
    pub protein_target_g: i32,
    pub carbs_target_g: i32,
}

/// Derive daily targets from biometric input
///
/// Total for all positive, finite weight/height; anything else is rejected
/// with [`CoreError::InvalidInput`] before derivation.
pub fn derive_targets(input: &BiometricInput) -> Result<TargetSet, CoreError> {
    if !input.weight.is_finite() || input.weight <= 0.0 {
        return Err(CoreError::InvalidInput(
            "weight must be a positive number".to_string(),
        ));
    }
    if !input.height.is_finite() || input.height <= 0.0 {
        return Err(CoreError::InvalidInput(
            "height must be a positive number".to_string(),
        ));
    }

    let body = Biometrics::from_input(input.weight, input.height, input.unit_system);

    let bmi = calculate_bmi(body.weight_kg, body.height_cm);

    let calorie_target = (body.weight_lbs
        * input.activity_level.kcal_per_lb()
        * input.goal.calorie_factor())
    .round() as i32;

    let protein_target_g = (body.weight_kg * input.goal.protein_g_per_kg()).round() as i32;

    // Half of calories from carbs at 4 kcal/g
    let carbs_target_g =
        (calorie_target as f64 * CARB_CALORIE_SHARE / CARB_KCAL_PER_GRAM).round() as i32;

    Ok(TargetSet {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmi_scale_position: bmi_scale_position(bmi),
        weight_kg: body.weight_kg,
        weight_lbs: body.weight_lbs,
        calorie_target,
        protein_target_g,
        carbs_target_g,
    })
}
