//! Calorie calculator service

use crate::error::ClientResult;
use fitfuel_shared::{estimate, CalculatorForm, CalorieResult, DomainError};
use tracing::debug;

/// Calorie calculator service
pub struct CalculatorService;

impl CalculatorService {
    /// Validate a submitted form and estimate the plan
    ///
    /// Imperial measurements are converted to metric without rounding.
    pub fn calculate(form: &CalculatorForm) -> ClientResult<CalorieResult> {
        form.validate().map_err(DomainError::from)?;

        let input = form.to_input();
        let result = estimate(&input);

        debug!(
            gender = %input.gender,
            activity = %input.activity_level,
            goal = %input.goal,
            bmr = result.bmr,
            goal_calories = result.goal_calories,
            "Estimated calorie plan"
        );
        Ok(result)
    }
}
