//! Query and pagination types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page size used by the exercise and recipe lists
pub const CATALOG_PAGE_SIZE: usize = 9;

/// Default number of recipes requested per search
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Pagination parameters (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: CATALOG_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }
}

/// One page of a client-side list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Current page, clamped to `1..=total_pages` (1 when empty)
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice `items` into the requested page
///
/// Out-of-range pages are clamped to the nearest valid page. A zero page
/// size is treated as one.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> Page<T> {
    let per_page = pagination.per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);
    let page = pagination.page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * per_page).min(total);
    let end = (page * per_page).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total,
        total_pages,
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Page number the "Previous" control leads to
    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Page number the "Next" control leads to
    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first item on this page
    pub fn first_index(&self) -> usize {
        (self.page - 1) * self.per_page + 1
    }

    /// 1-based position of the last item on this page
    pub fn last_index(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// e.g. "Showing 10-18 of 40 exercises"
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing {}-{} of {} {}",
            self.first_index(),
            self.last_index(),
            self.total,
            noun
        )
    }
}

// ============================================================================
// Recipe Search
// ============================================================================

/// Diet filters offered by the recipe search
pub const DIET_TYPES: &[&str] = &[
    "balanced",
    "high-protein",
    "low-fat",
    "low-carb",
    "vegan",
    "vegetarian",
    "pescatarian",
    "paleo",
    "keto",
    "gluten-free",
];

/// Intolerance filters offered by the recipe search
pub const HEALTH_LABELS: &[&str] = &[
    "sugar-conscious",
    "dairy-free",
    "gluten-free",
    "wheat-free",
    "egg-free",
    "peanut-free",
    "tree-nut-free",
    "soy-free",
    "fish-free",
    "shellfish-free",
];

/// Meal type filters offered by the recipe search
pub const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "snack"];

/// Recipe search request; empty filter strings mean "no filter"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    #[validate(length(min = 1, max = 200))]
    pub query: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub health: String,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default = "default_max_results")]
    #[validate(range(min = 1, max = 100))]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl RecipeQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            diet: String::new(),
            health: String::new(),
            meal_type: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Clear the query and every filter
    pub fn reset(&mut self) {
        *self = Self::new("");
    }
}
