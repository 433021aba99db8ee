//! Exercise catalog service
//!
//! Provides business logic for browsing exercises:
//! - Loading the catalog and its filter options in one round
//! - Filtering and paginating the catalog client-side
//! - Exercise detail with similar exercises and videos
//!
//! Catalog and video lookups never fail: a failed request is logged and
//! treated as an empty list so the rest of the page still renders.

use crate::error::{ClientError, ClientResult};
use crate::repositories::{ExerciseCatalog, VideoSource};
use fitfuel_shared::{
    paginate, similar_exercises, top_videos, BodyPart, Equipment, Exercise, ExerciseFilters,
    Page, Pagination, TargetMuscle, Video,
};
use serde::Serialize;
use tracing::{error, info};

/// Everything the exercise browser needs up front
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCatalogData {
    pub exercises: Vec<Exercise>,
    pub body_parts: Vec<BodyPart>,
    pub equipment: Vec<Equipment>,
    pub target_muscles: Vec<TargetMuscle>,
}

impl ExerciseCatalogData {
    /// Filter then paginate the catalog
    pub fn browse(&self, filters: &ExerciseFilters, pagination: Pagination) -> Page<Exercise> {
        paginate(&filters.apply(&self.exercises), pagination)
    }

    pub fn find(&self, id: &str) -> ClientResult<&Exercise> {
        self.exercises
            .iter()
            .find(|exercise| exercise.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Exercise {} not found", id)))
    }
}

/// Selected exercise with related content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDetail {
    pub exercise: Exercise,
    pub similar: Vec<Exercise>,
    pub videos: Vec<Video>,
}

/// Log a failed lookup and fall back to an empty list
fn or_empty<T>(what: &str, result: ClientResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching {}", what);
        Vec::new()
    })
}

/// Exercise service
pub struct ExerciseService;

impl ExerciseService {
    /// Fetch exercises and all filter options concurrently
    pub async fn load_catalog(catalog: &dyn ExerciseCatalog) -> ExerciseCatalogData {
        let (exercises, body_parts, equipment, target_muscles) = tokio::join!(
            catalog.list_exercises(),
            catalog.list_body_parts(),
            catalog.list_equipment(),
            catalog.list_target_muscles(),
        );

        let data = ExerciseCatalogData {
            exercises: or_empty("exercises", exercises),
            body_parts: or_empty("body parts", body_parts),
            equipment: or_empty("equipment", equipment),
            target_muscles: or_empty("target muscles", target_muscles),
        };

        info!(
            exercises = data.exercises.len(),
            body_parts = data.body_parts.len(),
            equipment = data.equipment.len(),
            target_muscles = data.target_muscles.len(),
            "Loaded exercise catalog"
        );
        data
    }

    /// Load similar exercises and videos for the selected exercise
    pub async fn exercise_detail(
        catalog: &dyn ExerciseCatalog,
        videos: &dyn VideoSource,
        exercise: &Exercise,
    ) -> ExerciseDetail {
        let (similar, found_videos) = tokio::join!(
            catalog.exercises_by_target(&exercise.target),
            videos.search_videos(&exercise.name),
        );

        ExerciseDetail {
            exercise: exercise.clone(),
            similar: similar_exercises(exercise, or_empty("similar exercises", similar)),
            videos: top_videos(or_empty("exercise videos", found_videos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Service;
    use async_trait::async_trait;

    fn exercise(id: &str, name: &str, target: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: name.to_string(),
            body_part: "chest".to_string(),
            target: target.to_string(),
            equipment: "barbell".to_string(),
            gif_url: String::new(),
        }
    }

    struct FakeCatalog {
        exercises: Vec<Exercise>,
        fail_lists: bool,
    }

    #[async_trait]
    impl ExerciseCatalog for FakeCatalog {
        async fn list_exercises(&self) -> ClientResult<Vec<Exercise>> {
            Ok(self.exercises.clone())
        }

        async fn list_body_parts(&self) -> ClientResult<Vec<BodyPart>> {
            if self.fail_lists {
                return Err(ClientError::MissingApiKey(Service::ExerciseDb));
            }
            Ok(vec!["chest".to_string()])
        }

        async fn list_equipment(&self) -> ClientResult<Vec<Equipment>> {
            Ok(vec!["barbell".to_string()])
        }

        async fn list_target_muscles(&self) -> ClientResult<Vec<TargetMuscle>> {
            Ok(vec!["pectorals".to_string()])
        }

        async fn exercises_by_target(&self, target: &str) -> ClientResult<Vec<Exercise>> {
            Ok(self
                .exercises
                .iter()
                .filter(|e| e.target == target)
                .cloned()
                .collect())
        }
    }

    struct FailingVideos;

    #[async_trait]
    impl VideoSource for FailingVideos {
        async fn search_videos(&self, _exercise_name: &str) -> ClientResult<Vec<Video>> {
            Err(ClientError::MissingApiKey(Service::YouTube))
        }
    }

    fn fake_catalog(fail_lists: bool) -> FakeCatalog {
        FakeCatalog {
            exercises: (1..=12)
                .map(|i| exercise(&i.to_string(), &format!("Press variation {i}"), "pectorals"))
                .collect(),
            fail_lists,
        }
    }

    #[tokio::test]
    async fn test_load_catalog_swallows_failures() {
        let data = ExerciseService::load_catalog(&fake_catalog(true)).await;
        assert_eq!(data.exercises.len(), 12);
        assert!(data.body_parts.is_empty());
        assert_eq!(data.equipment, vec!["barbell"]);
    }

    #[tokio::test]
    async fn test_browse_paginates_filtered_catalog() {
        let data = ExerciseService::load_catalog(&fake_catalog(false)).await;
        let page = data.browse(&ExerciseFilters::default(), Pagination::new(2, 9));
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.summary("exercises"), "Showing 10-12 of 12 exercises");

        let filters = ExerciseFilters {
            search: "variation 1".to_string(),
            ..Default::default()
        };
        // "1", "10", "11", "12"
        assert_eq!(data.browse(&filters, Pagination::default()).total, 4);
    }

    #[tokio::test]
    async fn test_exercise_detail_without_videos() {
        let catalog = fake_catalog(false);
        let source = catalog.exercises[0].clone();
        let detail = ExerciseService::exercise_detail(&catalog, &FailingVideos, &source).await;

        assert_eq!(detail.similar.len(), 3);
        assert!(detail.similar.iter().all(|e| e.id != source.id));
        assert!(detail.videos.is_empty());
    }

    #[test]
    fn test_find_missing_exercise() {
        let data = ExerciseCatalogData::default();
        assert!(matches!(data.find("0001"), Err(ClientError::NotFound(_))));
    }
}
