//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (data shape, timestamp parsing, validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream weather service failed, timed out or returned garbage
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested city is unknown upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error (e.g. missing or rejected API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Short message that is safe to show on the dashboard
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::ValidationError(msg)) => msg.clone(),
            Self::Domain(_) | Self::ExternalService(_) => {
                "Weather data is currently unavailable".to_string()
            },
            Self::NotFound(what) => format!("No forecast found for {what}"),
            Self::RateLimited => "Too many requests, try again shortly".to_string(),
            Self::Configuration(_) | Self::Internal(_) => {
                "The weather service is not configured correctly".to_string()
            },
        }
    }
}
