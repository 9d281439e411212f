//! Compass direction value object
//!
//! Maps a wind bearing in degrees onto one of the 16 points of the compass
//! rose. Each point owns a 22.5° sector centered on its nominal bearing, so
//! "N" covers [348.75°, 11.25°).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CompassDirection;
//!
//! let dir = CompassDirection::from_degrees(45.0).expect("finite bearing");
//! assert_eq!(dir.label(), "NE");
//!
//! // Bearings wrap modulo 360
//! assert_eq!(CompassDirection::from_degrees(360.0).unwrap(), CompassDirection::North);
//! assert_eq!(CompassDirection::from_degrees(-45.0).unwrap(), CompassDirection::NorthWest);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Width of one compass sector in degrees
const SECTOR_WIDTH: f64 = 22.5;

/// One of the 16 compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NNE")]
    NorthNorthEast,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "ENE")]
    EastNorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "ESE")]
    EastSouthEast,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SSE")]
    SouthSouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SSW")]
    SouthSouthWest,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "WSW")]
    WestSouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "WNW")]
    WestNorthWest,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "NNW")]
    NorthNorthWest,
}

impl CompassDirection {
    /// All points in clockwise order starting at north
    pub const ALL: [Self; 16] = [
        Self::North,
        Self::NorthNorthEast,
        Self::NorthEast,
        Self::EastNorthEast,
        Self::East,
        Self::EastSouthEast,
        Self::SouthEast,
        Self::SouthSouthEast,
        Self::South,
        Self::SouthSouthWest,
        Self::SouthWest,
        Self::WestSouthWest,
        Self::West,
        Self::WestNorthWest,
        Self::NorthWest,
        Self::NorthNorthWest,
    ];

    /// Resolve a bearing in degrees to its compass point
    ///
    /// Negative bearings and bearings of 360° or more wrap modulo 360.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for NaN or infinite input.
    pub fn from_degrees(degrees: f64) -> Result<Self, DomainError> {
        if !degrees.is_finite() {
            return Err(DomainError::ValidationError(format!(
                "wind bearing must be finite, got {degrees}"
            )));
        }

        let bearing = degrees.rem_euclid(360.0);
        // Bearing is in [0, 360], so the quotient is in [0, 16.5)
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sector = ((bearing + SECTOR_WIDTH / 2.0) / SECTOR_WIDTH).floor() as usize;

        Ok(Self::ALL[sector % Self::ALL.len()])
    }

    /// Short compass label, e.g. "NNE"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthNorthEast => "NNE",
            Self::NorthEast => "NE",
            Self::EastNorthEast => "ENE",
            Self::East => "E",
            Self::EastSouthEast => "ESE",
            Self::SouthEast => "SE",
            Self::SouthSouthEast => "SSE",
            Self::South => "S",
            Self::SouthSouthWest => "SSW",
            Self::SouthWest => "SW",
            Self::WestSouthWest => "WSW",
            Self::West => "W",
            Self::WestNorthWest => "WNW",
            Self::NorthWest => "NW",
            Self::NorthNorthWest => "NNW",
        }
    }

    /// Nominal bearing of this point in degrees
    #[must_use]
    pub fn bearing(self) -> f64 {
        let index = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        index * SECTOR_WIDTH
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a wind bearing to its 16-point compass label
///
/// # Errors
///
/// Returns `DomainError::ValidationError` for NaN or infinite input.
pub fn degrees_to_cardinal(degrees: f64) -> Result<&'static str, DomainError> {
    CompassDirection::from_degrees(degrees).map(CompassDirection::label)
}
