//! Forecast data models
//!
//! Wire types for the OpenWeatherMap `/forecast` endpoint. Only the fields
//! the dashboard reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

/// Top-level `/forecast` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// 3-hourly forecast entries, oldest first
    pub list: Vec<ForecastItem>,
    /// Resolved city
    #[serde(default)]
    pub city: Option<CityInfo>,
}

impl ForecastResponse {
    /// Display name of the resolved city, e.g. "Lisbon, PT"
    #[must_use]
    pub fn city_label(&self) -> Option<String> {
        let city = self.city.as_ref()?;
        Some(match city.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {country}", city.name),
            _ => city.name.clone(),
        })
    }
}

/// One 3-hour forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Timestamp text, `YYYY-MM-DD HH:MM:SS` (UTC)
    pub dt_txt: String,
    /// Temperature and humidity
    pub main: MainReadings,
    /// Weather conditions; the first element is the primary one
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
    /// Wind readings
    pub wind: Wind,
}

impl ForecastItem {
    /// Description of the primary weather condition, empty if absent
    #[must_use]
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map_or("", |w| w.description.as_str())
    }
}

/// `main` block of a forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature (°C with `units=metric`)
    pub temp: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// One element of the `weather` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherDescription {
    /// Condition text, e.g. "light rain"
    pub description: String,
}

/// `wind` block of a forecast entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed (m/s with `units=metric`)
    pub speed: f64,
    /// Wind bearing in degrees
    pub deg: f64,
}

/// `city` block of the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}
