//! Remote repositories
//!
//! Data access layer over the external REST APIs. Each repository wraps a
//! shared `reqwest::Client` and exposes a trait so services can be driven by
//! in-memory fakes in tests.

pub mod exercise;
pub mod nutrition;
pub mod video;

pub use exercise::ExerciseDbRepository;
pub use nutrition::SpoonacularRepository;
pub use video::YouTubeRepository;

use crate::config::HttpConfig;
use crate::error::{ClientError, ClientResult, Service};
use async_trait::async_trait;
use fitfuel_shared::{BodyPart, Equipment, Exercise, Recipe, RecipeQuery, TargetMuscle, Video};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Exercise catalog data source
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    async fn list_exercises(&self) -> ClientResult<Vec<Exercise>>;
    async fn list_body_parts(&self) -> ClientResult<Vec<BodyPart>>;
    async fn list_equipment(&self) -> ClientResult<Vec<Equipment>>;
    async fn list_target_muscles(&self) -> ClientResult<Vec<TargetMuscle>>;
    async fn exercises_by_target(&self, target: &str) -> ClientResult<Vec<Exercise>>;
}

/// Recipe search data source
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search_recipes(&self, query: &RecipeQuery) -> ClientResult<Vec<Recipe>>;
}

/// Exercise video data source
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn search_videos(&self, exercise_name: &str) -> ClientResult<Vec<Video>>;
}

/// Build the HTTP client shared by every repository
pub fn build_http_client(config: &HttpConfig) -> ClientResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Send a prepared request and decode a JSON body
///
/// Non-success statuses become `ClientError::Status` with the response text.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: Service,
    request: reqwest::RequestBuilder,
) -> ClientResult<T> {
    let response = request.send().await?;
    let status = response.status();
    debug!(%service, %status, url = %response.url(), "Received response");

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::Status {
            service,
            status,
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
        service,
        message: e.to_string(),
    })
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
