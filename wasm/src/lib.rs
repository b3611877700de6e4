//! MacroLog WASM Module
//!
//! WebAssembly bindings over the shared calculation core for the live
//! client-side path: BMI and scale rendering, running totals while the
//! user queues foods, and JSON round-trips for parking the in-progress
//! selection and target set in localStorage. The page owns the actual
//! storage calls; these bindings only compute and (de)serialize.

use macrolog_shared::nutrition::{compute_totals, FoodItem, SelectionCounts};
use macrolog_shared::targets::{derive_targets, BiometricInput};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    macrolog_shared::targets::calculate_bmi(weight_kg, height_cm)
}

/// Position of a BMI value on the 15-35 visual scale, 0-100
#[wasm_bindgen]
pub fn bmi_scale_position(bmi: f64) -> f64 {
    macrolog_shared::targets::bmi_scale_position(bmi)
}

/// Add one serving to a JSON-encoded selection, returning the new JSON
///
/// The input is the string previously written to localStorage; malformed
/// input starts a fresh selection rather than erroring.
#[wasm_bindgen]
pub fn selection_add(selection_json: &str, name: &str) -> String {
    let mut selection = parse_selection(selection_json);
    selection.add(name);
    serialize_selection(&selection)
}

/// Remove one serving from a JSON-encoded selection, returning the new JSON
#[wasm_bindgen]
pub fn selection_remove(selection_json: &str, name: &str) -> String {
    let mut selection = parse_selection(selection_json);
    selection.remove(name);
    serialize_selection(&selection)
}

/// Running totals for a JSON-encoded catalog and selection
///
/// Returns `{"protein":..,"calories":..,"carbs":..}` for live display.
#[wasm_bindgen]
pub fn selection_totals(catalog_json: &str, selection_json: &str) -> String {
    let catalog: Vec<FoodItem> = serde_json::from_str(catalog_json).unwrap_or_default();
    let selection = parse_selection(selection_json);

    let totals = compute_totals(&catalog, &selection);
    serde_json::to_string(&totals).unwrap_or_else(|_| "{}".to_string())
}

/// Derive a target set from a JSON-encoded biometric input
///
/// Returns the target set as JSON, or `{"error": "..."}` when the input
/// is rejected. The page stores the result string directly.
#[wasm_bindgen]
pub fn derive_targets_json(input_json: &str) -> String {
    let input: BiometricInput = match serde_json::from_str(input_json) {
        Ok(input) => input,
        Err(e) => return error_json(&format!("malformed input: {}", e)),
    };

    match derive_targets(&input) {
        Ok(targets) => {
            serde_json::to_string(&targets).unwrap_or_else(|_| error_json("serialization failed"))
        }
        Err(e) => error_json(&e.to_string()),
    }
}

fn parse_selection(json: &str) -> SelectionCounts {
    serde_json::from_str(json).unwrap_or_default()
}

fn serialize_selection(selection: &SelectionCounts) -> String {
    serde_json::to_string(selection).unwrap_or_else(|_| "{}".to_string())
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
