//! Weather icon selection
//!
//! Icons are picked by scanning the forecast description for known
//! substrings in a fixed priority order. The first match wins, so a
//! description like "light rain and snow" resolves to the snow icon.
//!
//! The order runs from harshest to mildest condition and is independent of
//! where a keyword appears in the description. It is not a "last keyword
//! checked wins" scan, which would let a milder keyword override snow.

use serde::{Deserialize, Serialize};

/// Icon shown next to the headline temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Snow,
    Rain,
    Cloudy,
    Fog,
    Sunny,
}

/// Match order for description substrings
const PRIORITY: [(&str, WeatherIcon); 6] = [
    ("snow", WeatherIcon::Snow),
    ("rain", WeatherIcon::Rain),
    ("cloud", WeatherIcon::Cloudy),
    ("fog", WeatherIcon::Fog),
    ("clear sky", WeatherIcon::Sunny),
    ("sunny", WeatherIcon::Sunny),
];

impl WeatherIcon {
    /// Find the icon for a forecast description
    ///
    /// Matching is case-insensitive. `None` means no known substring
    /// occurs and the caller should fall back to a blank icon.
    #[must_use]
    pub fn lookup(description: &str) -> Option<Self> {
        let description = description.to_lowercase();
        PRIORITY
            .iter()
            .find(|(needle, _)| description.contains(needle))
            .map(|(_, icon)| *icon)
    }

    /// Asset path relative to the static assets root
    #[must_use]
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Snow => "img/snow.png",
            Self::Rain => "img/rain.png",
            Self::Cloudy => "img/cloudy.png",
            Self::Fog => "img/fog.png",
            Self::Sunny => "img/sunny.png",
        }
    }
}
