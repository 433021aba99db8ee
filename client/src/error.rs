//! Client error handling
//!
//! One error type for everything that can go wrong while talking to the
//! external catalog APIs or preparing a request for them.

use fitfuel_shared::DomainError;
use reqwest::StatusCode;
use thiserror::Error;

/// External service a request was sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    ExerciseDb,
    Spoonacular,
    YouTube,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Service::ExerciseDb => "ExerciseDB",
            Service::Spoonacular => "Spoonacular",
            Service::YouTube => "YouTube",
        };
        f.write_str(name)
    }
}

/// Client error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: Service,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to decode {service} response: {message}")]
    Decode { service: Service, message: String },

    #[error("Missing API key for {0}")]
    MissingApiKey(Service),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// Whether the failure came from the remote side rather than local input
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::Status { .. } | ClientError::Decode { .. }
        )
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
