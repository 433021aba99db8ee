//! ExerciseDB repository (RapidAPI)

use super::{fetch_json, join_url, ExerciseCatalog};
use crate::config::{has_key, ExerciseDbConfig};
use crate::error::{ClientError, ClientResult, Service};
use async_trait::async_trait;
use fitfuel_shared::{BodyPart, Equipment, Exercise, TargetMuscle};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

/// Exercise catalog backed by ExerciseDB
#[derive(Clone)]
pub struct ExerciseDbRepository {
    http: reqwest::Client,
    config: ExerciseDbConfig,
}

impl ExerciseDbRepository {
    pub fn new(http: reqwest::Client, config: ExerciseDbConfig) -> Self {
        Self { http, config }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        if !has_key(&self.config.api_key) {
            return Err(ClientError::MissingApiKey(Service::ExerciseDb));
        }

        let request = self
            .http
            .get(join_url(&self.config.base_url, path))
            .header("X-RapidAPI-Key", self.config.api_key.expose_secret())
            .header("X-RapidAPI-Host", &self.config.host);

        fetch_json(Service::ExerciseDb, request).await
    }
}

#[async_trait]
impl ExerciseCatalog for ExerciseDbRepository {
    async fn list_exercises(&self) -> ClientResult<Vec<Exercise>> {
        self.get("/exercises").await
    }

    async fn list_body_parts(&self) -> ClientResult<Vec<BodyPart>> {
        self.get("/exercises/bodyPartList").await
    }

    async fn list_equipment(&self) -> ClientResult<Vec<Equipment>> {
        self.get("/exercises/equipmentList").await
    }

    async fn list_target_muscles(&self) -> ClientResult<Vec<TargetMuscle>> {
        self.get("/exercises/targetList").await
    }

    async fn exercises_by_target(&self, target: &str) -> ClientResult<Vec<Exercise>> {
        // Spaces in names like "upper back" are percent-encoded when the URL is parsed
        self.get(&format!("/exercises/target/{}", target)).await
    }
}
