//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Forecast series is too short for the sampling policy
    #[error("Forecast has {actual} entries, at least {required} are required")]
    DataShape { required: usize, actual: usize },

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Upstream reading is outside any plausible range
    #[error("Invalid reading: {0}")]
    InvalidReading(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a data shape error
    pub const fn data_shape(required: usize, actual: usize) -> Self {
        Self::DataShape { required, actual }
    }
}
