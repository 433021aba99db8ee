//! FitFuel Shared Library
//!
//! Pure domain logic used by the client and WASM crates: the calorie
//! estimator, unit conversion, catalog models, filtering and pagination.

pub mod calculator;
pub mod errors;
pub mod filters;
pub mod models;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use calculator::*;
pub use errors::*;
pub use filters::*;
pub use models::*;
pub use types::*;
pub use units::*;

// Validation helpers stay namespaced; only the form and error types are re-exported
pub use validation::{CalculatorForm, ValidationError};
