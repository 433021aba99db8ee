//! Client-side exercise filtering

use crate::models::{Exercise, Video};
use serde::{Deserialize, Serialize};

/// How many similar exercises and videos an exercise detail shows
pub const DETAIL_RELATED_LIMIT: usize = 3;

/// Active exercise filters; an empty string disables that filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFilters {
    /// Case-insensitive substring of the exercise name
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub body_part: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub target_muscle: String,
}

impl ExerciseFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.body_part.is_empty()
            && self.equipment.is_empty()
            && self.target_muscle.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a single exercise passes every active filter
    ///
    /// Only the name search ignores case; the other filters are exact
    /// matches against catalog values.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if !self.search.is_empty()
            && !exercise
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if !self.body_part.is_empty() && exercise.body_part != self.body_part {
            return false;
        }
        if !self.equipment.is_empty() && exercise.equipment != self.equipment {
            return false;
        }
        if !self.target_muscle.is_empty() && exercise.target != self.target_muscle {
            return false;
        }
        true
    }

    /// Filter a catalog, preserving its order
    pub fn apply(&self, exercises: &[Exercise]) -> Vec<Exercise> {
        exercises
            .iter()
            .filter(|exercise| self.matches(exercise))
            .cloned()
            .collect()
    }
}

/// Exercises related to `exercise` by target, excluding itself
pub fn similar_exercises(exercise: &Exercise, candidates: Vec<Exercise>) -> Vec<Exercise> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.id != exercise.id)
        .take(DETAIL_RELATED_LIMIT)
        .collect()
}

/// Keep the first few videos for display
pub fn top_videos(mut videos: Vec<Video>) -> Vec<Video> {
    videos.truncate(DETAIL_RELATED_LIMIT);
    videos
}
