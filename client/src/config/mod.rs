//! Configuration management for the FitFuel client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FF__)

use crate::error::ClientResult;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::env;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub exercise_db: ExerciseDbConfig,
    pub spoonacular: SpoonacularConfig,
    pub youtube: YouTubeConfig,
}

/// Shared HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// ExerciseDB (RapidAPI) settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseDbConfig {
    pub base_url: String,
    /// Value of the X-RapidAPI-Host header
    pub host: String,
    pub api_key: SecretString,
}

/// Spoonacular recipe API settings
#[derive(Debug, Clone, Deserialize)]
pub struct SpoonacularConfig {
    pub base_url: String,
    pub api_key: SecretString,
}

/// YouTube Data API settings
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    pub base_url: String,
    pub api_key: SecretString,
}

/// True when a secret holds a non-empty key
pub fn has_key(key: &SecretString) -> bool {
    !key.expose_secret().trim().is_empty()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                timeout_secs: 30,
                user_agent: format!("fitfuel/{}", env!("CARGO_PKG_VERSION")),
            },
            exercise_db: ExerciseDbConfig {
                base_url: "https://exercisedb.p.rapidapi.com".to_string(),
                host: "exercisedb.p.rapidapi.com".to_string(),
                api_key: SecretString::new(String::new()),
            },
            spoonacular: SpoonacularConfig {
                base_url: "https://api.spoonacular.com".to_string(),
                api_key: SecretString::new(String::new()),
            },
            youtube: YouTubeConfig {
                base_url: "https://youtube.googleapis.com".to_string(),
                api_key: SecretString::new(String::new()),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FF__ prefix
    pub fn load() -> ClientResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);
        let defaults = AppConfig::default();

        let config = config::Config::builder()
            // Start with defaults
            .set_default("http.timeout_secs", defaults.http.timeout_secs)?
            .set_default("http.user_agent", defaults.http.user_agent)?
            .set_default("exercise_db.base_url", defaults.exercise_db.base_url)?
            .set_default("exercise_db.host", defaults.exercise_db.host)?
            .set_default("exercise_db.api_key", "")?
            .set_default("spoonacular.base_url", defaults.spoonacular.base_url)?
            .set_default("spoonacular.api_key", "")?
            .set_default("youtube.base_url", defaults.youtube.base_url)?
            .set_default("youtube.api_key", "")?
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FF__ prefix)
            // e.g., FF__SPOONACULAR__API_KEY=... sets spoonacular.api_key
            .add_source(config::Environment::with_prefix("FF").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
