//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the presentation layer.

pub mod calculator;
pub mod exercise;
pub mod nutrition;

pub use calculator::CalculatorService;
pub use exercise::{ExerciseCatalogData, ExerciseDetail, ExerciseService};
pub use nutrition::NutritionService;
