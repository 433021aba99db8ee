//! Input validation functions
//!
//! The estimator trusts its inputs; these checks are what the form applies
//! before calling it. Bounds are the ones the calculator form suggests.

use crate::calculator::{ActivityLevel, CalorieInput, Gender, Goal};
use crate::types::RecipeQuery;
use crate::units::{BodyMeasurements, MeasurementSystem};
use validator::Validate;

/// Suggested age range (years)
pub const AGE_RANGE: (i32, i32) = (15, 80);
/// Suggested weight range (kg)
pub const WEIGHT_RANGE_KG: (f64, f64) = (40.0, 200.0);
/// Suggested weight range (lbs)
pub const WEIGHT_RANGE_LBS: (f64, f64) = (88.0, 440.0);
/// Suggested height range (cm)
pub const HEIGHT_RANGE_CM: (f64, f64) = (140.0, 220.0);
/// Suggested height range (inches)
pub const HEIGHT_RANGE_INCHES: (f64, f64) = (55.0, 87.0);

/// Validate age in years
pub fn validate_age(age: i32) -> Result<(), String> {
    let (min, max) = AGE_RANGE;
    if age < min {
        return Err(format!("Age must be at least {} years", min));
    }
    if age > max {
        return Err(format!("Age must be at most {} years", max));
    }
    Ok(())
}

fn validate_range(value: f64, (min, max): (f64, f64), unit: &str, what: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", what));
    }
    if value < min {
        return Err(format!("{} must be at least {} {}", what, min, unit));
    }
    if value > max {
        return Err(format!("{} must be at most {} {}", what, max, unit));
    }
    Ok(())
}

/// Validate weight as entered in the given unit system
pub fn validate_weight(weight: f64, system: MeasurementSystem) -> Result<(), String> {
    match system {
        MeasurementSystem::Metric => validate_range(weight, WEIGHT_RANGE_KG, "kg", "Weight"),
        MeasurementSystem::Imperial => validate_range(weight, WEIGHT_RANGE_LBS, "lbs", "Weight"),
    }
}

/// Validate height as entered in the given unit system
pub fn validate_height(height: f64, system: MeasurementSystem) -> Result<(), String> {
    match system {
        MeasurementSystem::Metric => validate_range(height, HEIGHT_RANGE_CM, "cm", "Height"),
        MeasurementSystem::Imperial => validate_range(height, HEIGHT_RANGE_INCHES, "in", "Height"),
    }
}

/// Validate a search string is not only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Search query cannot be empty".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "gender" => "Gender",
        "weight" => "Weight",
        "height" => "Height",
        "activity_level" => "Activity Level",
        "goal" => "Goal",
        "query" => "Search",
        "max_results" => "Max Results",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_message())
    }
}

// ============================================================================
// Calculator Form
// ============================================================================

/// Raw calculator form as submitted
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub age: i32,
    pub gender: Gender,
    pub measurements: BodyMeasurements,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl CalculatorForm {
    /// Check every numeric field, collecting all failures
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let system = self.measurements.system;
        let checks = [
            ("age", validate_age(self.age)),
            ("weight", validate_weight(self.measurements.weight, system)),
            ("height", validate_height(self.measurements.height, system)),
        ];

        let errors: Vec<ValidationError> = checks
            .into_iter()
            .filter_map(|(field, result)| result.err().map(|msg| ValidationError::new(field, &msg)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Estimator input in metric units (no rounding)
    pub fn to_input(&self) -> CalorieInput {
        CalorieInput {
            age: self.age,
            gender: self.gender,
            weight_kg: self.measurements.weight_kg(),
            height_cm: self.measurements.height_cm(),
            activity_level: self.activity_level,
            goal: self.goal,
        }
    }
}

/// Validate a recipe query before it is sent
pub fn validate_recipe_query(query: &RecipeQuery) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_not_blank(&query.query) {
        errors.push(ValidationError::new("query", &msg));
    }
    if let Err(derived) = query.validate() {
        for (field, field_errors) in derived.field_errors() {
            if field == "query" && !errors.is_empty() {
                continue;
            }
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            errors.push(ValidationError::new(&field, &message));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
