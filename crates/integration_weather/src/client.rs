//! OpenWeatherMap forecast client
//!
//! HTTP client for the OpenWeatherMap 5 day / 3 hour forecast API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ForecastResponse;

/// Location used by the health probe
const HEALTH_CHECK_LOCATION: &str = "London";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Weather service did not answer in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No API key configured
    #[error("No API key configured")]
    MissingApiKey,

    /// API key rejected by the weather service
    #[error("API key rejected")]
    InvalidApiKey,

    /// Weather service does not know the location
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system passed upstream (default: metric)
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
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
            .finish()
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the 3-hourly forecast for a location (`city` or `city,region`)
    async fn get_forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Whether an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.is_empty())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a transport error, keeping timeouts distinct
    ///
    /// The URL is stripped because its query string carries the API key.
    fn map_send_error(&self, e: reqwest::Error) -> WeatherError {
        let e = e.without_url();
        if e.is_timeout() {
            WeatherError::Timeout(Duration::from_secs(self.config.timeout_secs))
        } else if e.is_connect() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    fn check_status(status: StatusCode, location: &str) -> Result<(), WeatherError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(location.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimitExceeded),
            s if s.is_server_error() => Err(WeatherError::ServiceUnavailable(format!("HTTP {s}"))),
            s => Err(WeatherError::RequestFailed(format!("HTTP {s}"))),
        }
    }

    async fn fetch(
        &self,
        location: &str,
        count: Option<u32>,
    ) -> Result<ForecastResponse, WeatherError> {
        let api_key = self.api_key().ok_or(WeatherError::MissingApiKey)?;

        let mut request = self.client.get(self.forecast_url()).query(&[
            ("q", location),
            ("appid", api_key),
            ("units", self.config.units.as_str()),
        ]);
        if let Some(count) = count {
            request = request.query(&[("cnt", count)]);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        Self::check_status(response.status(), location)?;

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    self.map_send_error(e)
                } else {
                    WeatherError::ParseError(e.without_url().to_string())
                }
            })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_forecast(&self, location: &str) -> Result<ForecastResponse, WeatherError> {
        debug!(url = %self.forecast_url(), "Fetching forecast");

        let forecast = self.fetch(location, None).await?;
        debug!(entries = forecast.list.len(), "Received forecast");
        Ok(forecast)
    }

    async fn is_healthy(&self) -> bool {
        match self.fetch(HEALTH_CHECK_LOCATION, Some(1)).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Weather health check failed");
                false
            },
        }
    }
}
