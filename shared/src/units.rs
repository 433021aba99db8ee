//! Unit conversion for the calculator form
//!
//! The estimator always works in kilograms and centimeters. The form lets
//! the user enter imperial values instead, which are converted on submit.
//!
//! Two conversion paths exist and they differ on purpose:
//!
//! - **Toggle**: switching the form between systems converts the displayed
//!   values and rounds them to whole numbers. Toggling back and forth can
//!   drift (155 lb -> 70 kg -> 154 lb).
//! - **Submit**: imperial input is converted to metric without rounding
//!   before estimation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;
/// Kilograms per pound (not the exact inverse of `LBS_PER_KG`)
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Raw Conversions
// ============================================================================

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

// ============================================================================
// Weight / Height Units
// ============================================================================

/// Weight unit shown in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => lbs_to_kg(value),
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Height unit shown in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => inches_to_cm(value),
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Measurement System
// ============================================================================

/// Unit system the calculator form is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            MeasurementSystem::Metric => WeightUnit::Kg,
            MeasurementSystem::Imperial => WeightUnit::Lbs,
        }
    }

    pub fn height_unit(&self) -> HeightUnit {
        match self {
            MeasurementSystem::Metric => HeightUnit::Cm,
            MeasurementSystem::Imperial => HeightUnit::Inches,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            MeasurementSystem::Metric => MeasurementSystem::Imperial,
            MeasurementSystem::Imperial => MeasurementSystem::Metric,
        }
    }
}

/// Weight and height as entered in the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub weight: f64,
    pub height: f64,
    pub system: MeasurementSystem,
}

impl BodyMeasurements {
    pub fn metric(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight: weight_kg,
            height: height_cm,
            system: MeasurementSystem::Metric,
        }
    }

    pub fn imperial(weight_lbs: f64, height_inches: f64) -> Self {
        Self {
            weight: weight_lbs,
            height: height_inches,
            system: MeasurementSystem::Imperial,
        }
    }

    /// Switch to the other system, rounding both values to whole numbers
    pub fn toggled(&self) -> Self {
        let (weight, height) = match self.system {
            MeasurementSystem::Metric => (kg_to_lbs(self.weight), cm_to_inches(self.height)),
            MeasurementSystem::Imperial => (lbs_to_kg(self.weight), inches_to_cm(self.height)),
        };
        Self {
            weight: weight.round(),
            height: height.round(),
            system: self.system.other(),
        }
    }

    /// Weight in kilograms, unrounded
    pub fn weight_kg(&self) -> f64 {
        self.system.weight_unit().to_kg(self.weight)
    }

    /// Height in centimeters, unrounded
    pub fn height_cm(&self) -> f64 {
        self.system.height_unit().to_cm(self.height)
    }
}

impl fmt::Display for BodyMeasurements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.weight,
            self.system.weight_unit(),
            self.height,
            self.system.height_unit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_conversions() {
        assert!((kg_to_lbs(1.0) - 2.20462).abs() < 1e-12);
        assert!((lbs_to_kg(100.0) - 45.3592).abs() < 1e-9);
        assert!((cm_to_inches(180.0) - 70.866).abs() < 0.001);
        assert!((inches_to_cm(72.0) - 182.88).abs() < 1e-9);
    }

    #[test]
    fn test_toggle_rounds_to_whole_numbers() {
        let imperial = BodyMeasurements::metric(70.0, 175.0).toggled();
        assert_eq!(imperial.system, MeasurementSystem::Imperial);
        // 154.3234 lb, 68.8976 in
        assert_eq!(imperial.weight, 154.0);
        assert_eq!(imperial.height, 69.0);
    }

    #[test]
    fn test_toggle_round_trip_from_70kg() {
        // 70 kg -> 154 lb -> 69.853 kg -> 70 kg
        let back = BodyMeasurements::metric(70.0, 175.0).toggled().toggled();
        assert_eq!(back.weight, 70.0);
        // 175 cm -> 69 in -> 175.26 cm -> 175 cm
        assert_eq!(back.height, 175.0);
    }

    #[test]
    fn test_toggle_round_trip_can_drift() {
        // 155 lb -> 70.307 kg -> 70 kg -> 154.32 lb -> 154 lb
        let back = BodyMeasurements::imperial(155.0, 69.0).toggled().toggled();
        assert_eq!(back.weight, 154.0);
        assert_eq!(back.height, 69.0);
    }

    #[test]
    fn test_submit_path_is_unrounded() {
        let form = BodyMeasurements::imperial(155.0, 69.0);
        assert!((form.weight_kg() - 70.30676).abs() < 1e-9);
        assert!((form.height_cm() - 175.26).abs() < 1e-9);

        let metric = BodyMeasurements::metric(70.5, 175.5);
        assert_eq!(metric.weight_kg(), 70.5);
        assert_eq!(metric.height_cm(), 175.5);
    }

    #[test]
    fn test_display() {
        let form = BodyMeasurements::imperial(154.0, 69.0);
        assert_eq!(form.to_string(), "154 lbs, 69 in");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: height round-trip without rounding is exact within float error
        #[test]
        fn prop_height_roundtrip_cm(cm in 140.0f64..220.0) {
            let back = inches_to_cm(cm_to_inches(cm));
            prop_assert!((cm - back).abs() < 1e-9);
        }

        /// Property: weight factors are near-inverse, not exact
        #[test]
        fn prop_weight_roundtrip_close(kg in 40.0f64..200.0) {
            let back = lbs_to_kg(kg_to_lbs(kg));
            prop_assert!((kg - back).abs() < 1e-3);
        }

        /// Property: a toggle always lands on whole numbers
        #[test]
        fn prop_toggle_is_integral(weight in 40.0f64..200.0, height in 140.0f64..220.0) {
            let toggled = BodyMeasurements::metric(weight, height).toggled();
            prop_assert_eq!(toggled.weight.fract(), 0.0);
            prop_assert_eq!(toggled.height.fract(), 0.0);
        }

        /// Property: double toggle of whole kilograms drifts by at most one unit
        #[test]
        fn prop_double_toggle_drift_bounded(kg in 40u32..200, cm in 140u32..220) {
            let start = BodyMeasurements::metric(f64::from(kg), f64::from(cm));
            let back = start.toggled().toggled();
            prop_assert!((back.weight - start.weight).abs() <= 1.0);
            prop_assert!((back.height - start.height).abs() <= 1.0);
        }
    }
}
