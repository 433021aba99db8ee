//! Application state management
//!
//! Shared resources built once at startup and handed to the commands.
//!
//! # Design Principles
//!
//! 1. **One connection pool**: every repository shares a single `reqwest::Client`
//! 2. **Cheap cloning**: `reqwest::Client` and the config are internally Arc'd
//! 3. **Immutable after creation**: state is read-only while commands run

use crate::config::AppConfig;
use crate::error::ClientResult;
use crate::repositories::{
    build_http_client, ExerciseDbRepository, SpoonacularRepository, YouTubeRepository,
};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Exercise catalog
    pub exercises: ExerciseDbRepository,
    /// Recipe search
    pub recipes: SpoonacularRepository,
    /// Exercise videos
    pub videos: YouTubeRepository,
}

impl AppState {
    /// Create a new application state
    ///
    /// Builds the HTTP client once; all repositories share its pool.
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let http = build_http_client(&config.http)?;

        Ok(Self {
            exercises: ExerciseDbRepository::new(http.clone(), config.exercise_db.clone()),
            recipes: SpoonacularRepository::new(http.clone(), config.spoonacular.clone()),
            videos: YouTubeRepository::new(http, config.youtube.clone()),
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
