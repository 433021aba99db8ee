//! Error types shared by the FitFuel crates

use crate::validation::ValidationError;
use thiserror::Error;

/// Domain-level failures raised before any estimate or request is made
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for DomainError {
    fn from(errors: Vec<ValidationError>) -> Self {
        DomainError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_fields() {
        let err = DomainError::from(vec![
            ValidationError::new("age", "Age must be at least 15 years"),
            ValidationError::new("height", "Height must be at most 220 cm"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: Age: Age must be at least 15 years; Height: Height must be at most 220 cm"
        );
    }
}
