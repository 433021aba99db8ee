//! Calorie and macronutrient estimation
//!
//! Estimates daily energy expenditure and a macronutrient plan from a
//! person's biometrics, activity level and body-weight goal.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: `estimate` has no side effects and never fails
//! 2. **Closed Options**: gender, activity and goal are exhaustive enums
//! 3. **Permissive Parsing**: unknown option strings map to documented defaults
//! 4. **Caller Validates**: numeric ranges are checked in `validation`, not here

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Energy per gram of protein (kcal)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy per gram of carbohydrate (kcal)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy per gram of fat (kcal)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily offset applied to maintenance calories when losing or gaining
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

// ============================================================================
// Input Options
// ============================================================================

/// Sex used to select the BMR formula branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Constant term of the Mifflin-St Jeor equation
    pub fn bmr_constant(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Anything other than `male` takes the female branch.
impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            _ => Gender::Female,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::from(value.as_str())
    }
}

impl FromStr for Gender {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Gender::from(s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    Very,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Very,
    ];

    /// Multiplier applied to BMR to get maintenance calories
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Very => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::Very => "Very hard exercise or physical job",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Very => "very",
        }
    }
}

/// Unrecognized levels fall back to sedentary.
impl From<&str> for ActivityLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very" => ActivityLevel::Very,
            _ => ActivityLevel::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::from(value.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActivityLevel::from(s))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    /// Daily calorie adjustment relative to maintenance
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Maintain => 0.0,
            Goal::Lose => -GOAL_CALORIE_OFFSET,
            Goal::Gain => GOAL_CALORIE_OFFSET,
        }
    }

    /// Protein target in grams per kg of body weight
    pub fn protein_per_kg(&self) -> f64 {
        match self {
            Goal::Gain => 2.2,
            Goal::Lose => 2.5,
            Goal::Maintain => 1.8,
        }
    }

    /// Share of goal calories allotted to fat
    pub fn fat_fraction(&self) -> f64 {
        match self {
            Goal::Lose => 0.25,
            Goal::Gain | Goal::Maintain => 0.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }
}

/// Unrecognized goals fall back to maintain.
impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::from(value.as_str())
    }
}

impl FromStr for Goal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Goal::from(s))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Estimation
// ============================================================================

/// Biometric and lifestyle inputs, always in metric units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieInput {
    /// Age in years
    pub age: i32,
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

/// Daily energy and macronutrient plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// BMR scaled by the activity multiplier (kcal/day)
    pub maintenance: f64,
    /// Maintenance adjusted for the goal (kcal/day)
    #[serde(rename = "goal")]
    pub goal_calories: f64,
    /// Protein (g/day)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbohydrate (g/day); negative when protein and fat exceed the budget
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fat (g/day)
    #[serde(rename = "fat")]
    pub fat_g: f64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_constant()
}

/// Estimate the daily calorie budget and its macronutrient split
///
/// Total over its numeric domain: out-of-range inputs are not rejected and
/// simply flow through the arithmetic. Carbohydrate grams are whatever
/// remains after protein and fat and are not clamped at zero.
pub fn estimate(input: &CalorieInput) -> CalorieResult {
    let bmr = calculate_bmr(input.weight_kg, input.height_cm, input.age, input.gender);
    let maintenance = bmr * input.activity_level.multiplier();
    let goal_calories = maintenance + input.goal.calorie_adjustment();

    let protein_g = input.weight_kg * input.goal.protein_per_kg();

    let fat_calories = goal_calories * input.goal.fat_fraction();
    let fat_g = fat_calories / KCAL_PER_GRAM_FAT;

    let carb_calories = goal_calories - protein_g * KCAL_PER_GRAM_PROTEIN - fat_calories;
    let carbs_g = carb_calories / KCAL_PER_GRAM_CARBS;

    CalorieResult {
        bmr,
        maintenance,
        goal_calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

// ============================================================================
// Display Breakdown
// ============================================================================

/// One macronutrient line of a plan summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroShare {
    pub grams: f64,
    pub calories: f64,
    /// Percentage of goal calories (0-100 for a balanced plan)
    pub percent: f64,
}

impl MacroShare {
    fn new(grams: f64, kcal_per_gram: f64, goal_calories: f64) -> Self {
        let calories = grams * kcal_per_gram;
        let percent = if goal_calories == 0.0 {
            0.0
        } else {
            calories / goal_calories * 100.0
        };
        Self {
            grams,
            calories,
            percent,
        }
    }
}

/// Per-macro calories and share of the goal budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: MacroShare,
    pub carbs: MacroShare,
    pub fat: MacroShare,
}

impl CalorieResult {
    /// Calories accounted for by the three macros
    pub fn macro_calories(&self) -> f64 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g * KCAL_PER_GRAM_CARBS
            + self.fat_g * KCAL_PER_GRAM_FAT
    }

    pub fn macro_breakdown(&self) -> MacroBreakdown {
        MacroBreakdown {
            protein: MacroShare::new(self.protein_g, KCAL_PER_GRAM_PROTEIN, self.goal_calories),
            carbs: MacroShare::new(self.carbs_g, KCAL_PER_GRAM_CARBS, self.goal_calories),
            fat: MacroShare::new(self.fat_g, KCAL_PER_GRAM_FAT, self.goal_calories),
        }
    }
}
