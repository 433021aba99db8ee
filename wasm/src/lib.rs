//! FitFuel WASM Module
//!
//! WebAssembly bindings so the calculator page can estimate calories and
//! toggle units in the browser without a round trip.

use fitfuel_shared::{
    estimate, ActivityLevel, BodyMeasurements, CalculatorForm, CalorieInput, CalorieResult,
    Gender, Goal, MacroBreakdown, MeasurementSystem,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Result plus macro breakdown, as handed to the page
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Estimate {
    #[serde(flatten)]
    result: CalorieResult,
    breakdown: MacroBreakdown,
}

fn estimate_json(input: &CalorieInput) -> serde_json::Result<String> {
    let result = estimate(input);
    serde_json::to_string(&Estimate {
        result,
        breakdown: result.macro_breakdown(),
    })
}

/// Estimate daily calories and macros from metric inputs
///
/// Unknown gender, activity or goal strings fall back to female, sedentary
/// and maintain. Returns the plan as a JSON object.
#[wasm_bindgen]
pub fn estimate_calories(
    age: i32,
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    activity_level: &str,
    goal: &str,
) -> Result<String, JsError> {
    let input = CalorieInput {
        age,
        gender: Gender::from(gender),
        weight_kg,
        height_cm,
        activity_level: ActivityLevel::from(activity_level),
        goal: Goal::from(goal),
    };
    estimate_json(&input).map_err(|e| JsError::new(&e.to_string()))
}

/// Activity multiplier for a level name (1.2 when unrecognized)
#[wasm_bindgen]
pub fn activity_multiplier(activity_level: &str) -> f64 {
    ActivityLevel::from(activity_level).multiplier()
}

fn measurements(weight: f64, height: f64, imperial: bool) -> BodyMeasurements {
    if imperial {
        BodyMeasurements::imperial(weight, height)
    } else {
        BodyMeasurements::metric(weight, height)
    }
}

/// Switch the form's weight and height to the other unit system
///
/// Returns `[weight, height]` rounded to whole numbers, so repeated toggling
/// can drift.
#[wasm_bindgen]
pub fn toggle_measurements(weight: f64, height: f64, imperial: bool) -> Vec<f64> {
    let toggled = measurements(weight, height, imperial).toggled();
    vec![toggled.weight, toggled.height]
}

/// Validate calculator form values
///
/// Returns a JSON array of user-facing messages, empty when the form is valid.
#[wasm_bindgen]
pub fn validate_calculator(age: i32, weight: f64, height: f64, imperial: bool) -> String {
    let form = CalculatorForm {
        age,
        gender: Gender::Male,
        measurements: measurements(weight, height, imperial),
        activity_level: ActivityLevel::default(),
        goal: Goal::default(),
    };
    let messages: Vec<String> = match form.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(|e| e.user_message()).collect(),
    };
    serde_json::to_string(&messages).unwrap_or_else(|_| "[]".to_string())
}

/// Unit system name for the toggle button label
#[wasm_bindgen]
pub fn other_system(imperial: bool) -> String {
    let current = if imperial {
        MeasurementSystem::Imperial
    } else {
        MeasurementSystem::Metric
    };
    format!("{:?}", current.other()).to_lowercase()
}
