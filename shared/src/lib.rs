//! MacroLog Shared Library
//!
//! This crate contains the pure calculation core and the types shared
//! between the backend, frontend, and WASM modules. Nothing in here
//! performs I/O; persistence is the caller's concern.

pub mod errors;
pub mod nutrition;
pub mod targets;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::CoreError;
pub use nutrition::{
    build_summary, compute_totals, FoodItem, FoodSummary, NutritionTotals, SelectionCounts,
    SummaryFood,
};
pub use targets::{
    bmi_scale_position, classify_bmi, derive_targets, ActivityLevel, BiometricInput, BmiCategory,
    FitnessGoal, Sex, TargetSet,
};
pub use units::{Biometrics, UnitSystem};
