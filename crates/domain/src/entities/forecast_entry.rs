//! Raw forecast entry
//!
//! One 3-hour sample as delivered by the upstream forecast API, before any
//! normalization. Lives for the duration of a single request.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Layout of the upstream `dt_txt` field, e.g. `2024-01-15 12:00:00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastEntry {
    /// Timestamp string in [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    /// Free-text weather description, e.g. "light rain"
    pub description: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed
    pub wind_speed: f64,
    /// Wind bearing in degrees
    pub wind_direction: f64,
}

impl RawForecastEntry {
    /// Parse the timestamp
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the string does not match
    /// [`TIMESTAMP_FORMAT`].
    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime, DomainError> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            DomainError::InvalidDateTime(format!("{:?}: {e}", self.timestamp))
        })
    }
}
