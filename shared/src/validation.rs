//! Input validation functions
//!
//! Range checks applied at the API boundary, before values reach the
//! calculation core or the database. Each returns `Result<(), String>` so
//! callers can wrap the message in their own error type.

/// Validate a body weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a per-serving nutrient value (grams or kcal)
pub fn validate_nutrient(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Nutrient value must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("Nutrient value cannot be negative".to_string());
    }
    if value > 10000.0 {
        return Err("Nutrient value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a food name
pub fn validate_food_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    if trimmed.len() > 100 {
        return Err("Food name too long".to_string());
    }
    Ok(())
}

/// Validate a serving count for a selection entry
pub fn validate_serving_count(count: u32) -> Result<(), String> {
    if count == 0 {
        return Err("Serving count must be at least 1".to_string());
    }
    if count > 99 {
        return Err("Serving count must be at most 99".to_string());
    }
    Ok(())
}

/// Validate a lift weight (in kg, after unit conversion)
pub fn validate_lift_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Lift weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Lift weight must be positive".to_string());
    }
    if weight_kg > 1000.0 {
        return Err("Lift weight unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a repetition count for a lift set
pub fn validate_reps(reps: i32) -> Result<(), String> {
    if reps < 1 {
        return Err("Reps must be at least 1".to_string());
    }
    if reps > 100 {
        return Err("Reps must be at most 100".to_string());
    }
    Ok(())
}

/// Validate an exercise name
pub fn validate_exercise_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Exercise name cannot be empty".to_string());
    }
    if trimmed.len() > 100 {
        return Err("Exercise name too long".to_string());
    }
    Ok(())
}
