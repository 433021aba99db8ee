//! Nutrition service - recipe search

use crate::error::ClientResult;
use crate::repositories::RecipeSource;
use fitfuel_shared::validation::validate_recipe_query;
use fitfuel_shared::{DomainError, Recipe, RecipeQuery};
use tracing::{error, info};

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// Search recipes
    ///
    /// The query is validated before any request is made. Unlike the
    /// exercise lookups, remote failures are returned to the caller.
    pub async fn search_recipes(
        source: &dyn RecipeSource,
        query: &RecipeQuery,
    ) -> ClientResult<Vec<Recipe>> {
        validate_recipe_query(query).map_err(DomainError::from)?;

        info!(
            query = %query.query,
            diet = %query.diet,
            health = %query.health,
            meal_type = %query.meal_type,
            max_results = query.max_results,
            "Searching recipes"
        );

        match source.search_recipes(query).await {
            Ok(recipes) => {
                info!(count = recipes.len(), "Recipe search complete");
                Ok(recipes)
            }
            Err(e) => {
                error!(error = %e, "Error fetching recipes");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, Service};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl RecipeSource for CountingSource {
        async fn search_recipes(&self, _query: &RecipeQuery) -> ClientResult<Vec<Recipe>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClientError::MissingApiKey(Service::Spoonacular));
            }
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_request() {
        let source = CountingSource::default();
        let result = NutritionService::search_recipes(&source, &RecipeQuery::new("   ")).await;

        assert!(matches!(result, Err(ClientError::Domain(DomainError::Validation(_)))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let source = CountingSource {
            fail: true,
            ..Default::default()
        };
        let result = NutritionService::search_recipes(&source, &RecipeQuery::new("salad")).await;

        assert!(matches!(result, Err(ClientError::MissingApiKey(Service::Spoonacular))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
