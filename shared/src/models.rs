//! Catalog data models
//!
//! Shapes of the exercise, recipe and video records shown by the app. Field
//! names follow the camelCase used on the wire.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Body part, equipment and target muscle are free-form catalog strings
pub type BodyPart = String;
pub type Equipment = String;
pub type TargetMuscle = String;

/// Exercise from the exercise catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: BodyPart,
    pub target: TargetMuscle,
    pub equipment: Equipment,
    pub gif_url: String,
}

/// Demonstration video for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub thumbnail_url: String,
}

/// Amount of a single nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutrientQuantity {
    pub quantity: f64,
}

impl From<f64> for NutrientQuantity {
    fn from(quantity: f64) -> Self {
        Self { quantity }
    }
}

/// Per-recipe nutrient totals keyed by their conventional codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct RecipeNutrients {
    /// Protein (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procnt: Option<NutrientQuantity>,
    /// Carbohydrates (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chocdf: Option<NutrientQuantity>,
    /// Fat (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<NutrientQuantity>,
    /// Fiber (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibtg: Option<NutrientQuantity>,
    /// Sugar (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<NutrientQuantity>,
    /// Cholesterol (mg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chole: Option<NutrientQuantity>,
    /// Sodium (mg)
    #[serde(rename = "NA", skip_serializing_if = "Option::is_none")]
    pub sodium: Option<NutrientQuantity>,
}

/// Recipe search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub label: String,
    pub image: String,
    pub calories: f64,
    pub ingredient_lines: Vec<String>,
    /// Preparation time in minutes
    pub total_time: u32,
    /// Number of servings
    #[serde(rename = "yield")]
    pub servings: u32,
    pub diet_labels: Vec<String>,
    pub health_labels: Vec<String>,
    pub cautions: Vec<String>,
    pub total_nutrients: RecipeNutrients,
    pub url: String,
}

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// URL slug of a recipe title: whitespace runs become `-`, then lowercase
pub fn recipe_slug(title: &str) -> String {
    WHITESPACE_RUN.replace_all(title, "-").to_lowercase()
}

/// Public Spoonacular page for a recipe
pub fn spoonacular_recipe_url(title: &str, id: u64) -> String {
    format!("https://spoonacular.com/recipes/{}-{}", recipe_slug(title), id)
}
