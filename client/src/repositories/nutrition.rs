//! Spoonacular recipe repository

use super::{fetch_json, join_url, RecipeSource};
use crate::config::{has_key, SpoonacularConfig};
use crate::error::{ClientError, ClientResult, Service};
use async_trait::async_trait;
use fitfuel_shared::{spoonacular_recipe_url, NutrientQuantity, Recipe, RecipeNutrients, RecipeQuery};
use secrecy::ExposeSecret;
use serde::Deserialize;

/// `complexSearch` response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    id: u64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    diets: Option<Vec<String>>,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    nutrition: Option<Nutrition>,
}

#[derive(Debug, Deserialize, Default)]
struct Nutrition {
    #[serde(default)]
    nutrients: Vec<Nutrient>,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
struct Nutrient {
    name: String,
    #[serde(default)]
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct Ingredient {
    name: String,
}

impl Nutrition {
    /// Amount of the named nutrient, 0 when absent
    fn amount(&self, name: &str) -> f64 {
        self.nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
            .unwrap_or(0.0)
    }
}

/// Map one search result into the app's recipe shape
///
/// Spoonacular does not return health labels per recipe, so the requested
/// intolerance filter (if any) is echoed back as the only label.
fn into_recipe(result: SearchResult, health: &str) -> Recipe {
    let nutrition = result.nutrition.unwrap_or_default();
    let quantity = |name: &str| Some(NutrientQuantity::from(nutrition.amount(name)));

    let total_nutrients = RecipeNutrients {
        procnt: quantity("Protein"),
        chocdf: quantity("Carbohydrates"),
        fat: quantity("Fat"),
        fibtg: quantity("Fiber"),
        sugar: quantity("Sugar"),
        chole: quantity("Cholesterol"),
        sodium: quantity("Sodium"),
    };

    let health_labels = if health.is_empty() {
        Vec::new()
    } else {
        vec![health.to_string()]
    };

    Recipe {
        url: spoonacular_recipe_url(&result.title, result.id),
        id: result.id,
        label: result.title,
        image: result.image.unwrap_or_default(),
        calories: nutrition.amount("Calories"),
        ingredient_lines: nutrition.ingredients.iter().map(|i| i.name.clone()).collect(),
        total_time: result.ready_in_minutes.unwrap_or(0),
        servings: result.servings.unwrap_or(1),
        diet_labels: result.diets.unwrap_or_default(),
        health_labels,
        cautions: Vec::new(),
        total_nutrients,
    }
}

/// Recipe search backed by Spoonacular's `complexSearch`
#[derive(Clone)]
pub struct SpoonacularRepository {
    http: reqwest::Client,
    config: SpoonacularConfig,
}

impl SpoonacularRepository {
    pub fn new(http: reqwest::Client, config: SpoonacularConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl RecipeSource for SpoonacularRepository {
    async fn search_recipes(&self, query: &RecipeQuery) -> ClientResult<Vec<Recipe>> {
        if !has_key(&self.config.api_key) {
            return Err(ClientError::MissingApiKey(Service::Spoonacular));
        }

        let max_results = query.max_results.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("query", query.query.as_str()),
            ("number", max_results.as_str()),
            ("apiKey", self.config.api_key.expose_secret().as_str()),
            ("addRecipeNutrition", "true"),
        ];
        if !query.diet.is_empty() {
            params.push(("diet", query.diet.as_str()));
        }
        if !query.health.is_empty() {
            params.push(("intolerances", query.health.as_str()));
        }
        if !query.meal_type.is_empty() {
            params.push(("type", query.meal_type.as_str()));
        }

        let request = self
            .http
            .get(join_url(&self.config.base_url, "/recipes/complexSearch"))
            .query(&params);

        let response: SearchResponse = fetch_json(Service::Spoonacular, request).await?;

        Ok(response
            .results
            .into_iter()
            .map(|result| into_recipe(result, &query.health))
            .collect())
    }
}
