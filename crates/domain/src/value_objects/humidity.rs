//! Relative humidity value object (0-100%)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Relative humidity percentage, always within 0-100
///
/// ```
/// use domain::value_objects::Humidity;
///
/// assert_eq!(Humidity::new(65).unwrap().value(), 65);
/// assert!(Humidity::new(101).is_err());
/// assert_eq!(Humidity::from_reading(73.6).value(), 74);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Humidity(u8);

impl Humidity {
    /// Upper bound of the percentage scale
    pub const MAX: u8 = 100;

    /// Create a validated humidity value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the value exceeds 100.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::ValidationError(format!(
                "humidity {value}% is out of range (0-100)"
            )));
        }
        Ok(Self(value))
    }

    /// Build from a raw sensor reading, rounding and clamping into range
    ///
    /// Non-finite readings collapse to 0.
    #[must_use]
    pub fn from_reading(reading: f64) -> Self {
        if !reading.is_finite() {
            return Self(0);
        }
        // Clamped to [0, 100] first, so the cast is exact
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = reading.round().clamp(0.0, f64::from(Self::MAX)) as u8;
        Self(value)
    }

    /// Percentage as an integer
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Humidity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
