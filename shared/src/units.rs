//! Unit conversion and normalization module
//!
//! MacroLog stores everything in SI units (kg, cm) and converts at the
//! boundaries. Users pick one of two unit systems; the normalized
//! [`Biometrics`] value carries both mirrors so downstream code never
//! re-converts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit system preference for biometric input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert a weight in this system to kilograms
    pub fn weight_to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * KG_PER_LB,
        }
    }

    /// Convert a height in this system to centimeters
    pub fn height_to_cm(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * CM_PER_INCH,
        }
    }

    /// Weight unit abbreviation for display
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Height unit abbreviation for display
    pub fn height_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimeters to inches
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Normalized body measurements carrying both unit mirrors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub weight_lbs: f64,
    pub height_in: f64,
}

impl Biometrics {
    /// Normalize raw weight/height from the given unit system
    pub fn from_input(weight: f64, height: f64, system: UnitSystem) -> Self {
        let weight_kg = system.weight_to_kg(weight);
        let height_cm = system.height_to_cm(height);
        Self {
            weight_kg,
            height_cm,
            weight_lbs: kg_to_lbs(weight_kg),
            height_in: cm_to_inches(height_cm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_weight_conversions() {
        // 100 lbs = 45.3592 kg
        assert!((lbs_to_kg(100.0) - 45.3592).abs() < 0.001);

        // 1 kg = 2.20462 lbs
        assert!((kg_to_lbs(1.0) - 2.20462).abs() < 0.001);
    }

    #[test]
    fn test_known_height_conversions() {
        // 70 inches = 177.8 cm
        assert!((inches_to_cm(70.0) - 177.8).abs() < 0.001);

        // 180 cm = 70.866 inches
        assert!((cm_to_inches(180.0) - 70.866).abs() < 0.01);
    }

    #[test]
    fn test_metric_input_is_identity() {
        let body = Biometrics::from_input(80.0, 180.0, UnitSystem::Metric);
        assert_eq!(body.weight_kg, 80.0);
        assert_eq!(body.height_cm, 180.0);
        assert!((body.weight_lbs - 176.3698).abs() < 0.001);
    }

    #[test]
    fn test_imperial_input_normalizes() {
        let body = Biometrics::from_input(176.3698, 70.8661, UnitSystem::Imperial);
        assert!((body.weight_kg - 80.0).abs() < 0.001);
        assert!((body.height_cm - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip(kg in 20.0f64..500.0) {
            let lbs = kg_to_lbs(kg);
            let back = lbs_to_kg(lbs);
            prop_assert!((kg - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", kg, lbs, back);
        }

        /// Property: height conversion round-trip preserves value
        #[test]
        fn prop_height_roundtrip(cm in 100.0f64..250.0) {
            let inches = cm_to_inches(cm);
            let back = inches_to_cm(inches);
            prop_assert!((cm - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", cm, inches, back);
        }

        /// Property: both mirrors of a normalized input agree
        #[test]
        fn prop_biometrics_mirrors_agree(
            weight in 20.0f64..500.0,
            height in 100.0f64..250.0
        ) {
            let body = Biometrics::from_input(weight, height, UnitSystem::Metric);
            prop_assert!((lbs_to_kg(body.weight_lbs) - body.weight_kg).abs() < 0.0001);
            prop_assert!((inches_to_cm(body.height_in) - body.height_cm).abs() < 0.0001);
        }
    }
}
