//! Weather integration configuration.

use domain::{CityQuery, DEFAULT_CITY, DomainError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather service configuration
///
/// The API key is never serialized and is redacted in `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    ///
    /// Usually supplied through `SKYCAST_WEATHER__API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Unit system requested upstream
    #[serde(default = "default_units")]
    pub units: String,

    /// City shown when the request carries none, e.g. "Lisbon, prt"
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl WeatherAppConfig {
    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Parsed default city
    ///
    /// # Errors
    ///
    /// Returns a validation error if `default_city` is not a usable query.
    pub fn default_query(&self) -> Result<CityQuery, DomainError> {
        CityQuery::parse(&self.default_city)
    }

    /// Client configuration for the OpenWeatherMap integration
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
            units: self.units.clone(),
        }
    }
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
            units: default_units(),
            default_city: default_city(),
        }
    }
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("units", &self.units)
            .field("default_city", &self.default_city)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_config_default() {
        let config = WeatherAppConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.units, "metric");
        assert_eq!(config.default_city, "Lisbon");
        assert!(!config.has_api_key());
    }

    #[test]
    fn blank_api_key_is_not_configured() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("   ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = WeatherAppConfig {
            api_key: Some(SecretString::from("owm-secret".to_string())),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("owm-secret"));
    }

    #[test]
    fn to_client_config_copies_fields() {
        let config = WeatherAppConfig {
            base_url: "http://localhost:9999".to_string(),
            api_key: Some(SecretString::from("k".to_string())),
            timeout_secs: 3,
            units: "imperial".to_string(),
            default_city: "Porto".to_string(),
        };
        let client = config.to_client_config();
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.timeout_secs, 3);
        assert_eq!(client.units, "imperial");
        assert!(client.api_key.is_some());
    }

    #[test]
    fn default_query_parses_region() {
        let config = WeatherAppConfig {
            default_city: "Lisbon, prt".to_string(),
            ..Default::default()
        };
        let query = config.default_query().unwrap();
        assert_eq!(query.city(), "Lisbon");
        assert_eq!(query.region(), Some("prt"));
    }

    #[test]
    fn default_query_rejects_blank() {
        let config = WeatherAppConfig {
            default_city: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.default_query().is_err());
    }
}
