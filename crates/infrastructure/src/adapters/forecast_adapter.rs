//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{CityQuery, RawForecastEntry};
use integration_weather::{
    ForecastItem, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap 5 day / 3 hour forecast
pub struct ForecastAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenWeatherMapClient")
            .field("has_api_key", &self.client.has_api_key())
            .finish()
    }
}

impl ForecastAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::Timeout(after) => {
                ApplicationError::ExternalService(format!("timed out after {after:?}"))
            },
            WeatherError::MissingApiKey | WeatherError::InvalidApiKey => {
                ApplicationError::Configuration(err.to_string())
            },
            WeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert an upstream entry into the raw domain entry
    fn map_item(item: &ForecastItem) -> RawForecastEntry {
        RawForecastEntry {
            timestamp: item.dt_txt.clone(),
            description: item.description().to_string(),
            temperature: item.main.temp,
            humidity: item.main.humidity,
            wind_speed: item.wind.speed,
            wind_direction: item.wind.deg,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(city = %query))]
    async fn fetch_forecast(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<RawForecastEntry>, ApplicationError> {
        let result = self
            .client
            .get_forecast(&query.to_query_param())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    entries = forecast.list.len(),
                    resolved = ?forecast.city_label(),
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result.map(|f| f.list.iter().map(Self::map_item).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        if !self.client.has_api_key() {
            return false;
        }
        self.client.is_healthy().await
    }
}
