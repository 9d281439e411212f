//! Forecast service port
//!
//! Defines the interface for retrieving the raw 3-hourly forecast series.

use async_trait::async_trait;
use domain::{CityQuery, RawForecastEntry};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the raw forecast series for a city, oldest entry first
    async fn fetch_forecast(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<RawForecastEntry>, ApplicationError>;

    /// Check if the forecast service is reachable and configured
    async fn is_available(&self) -> bool;
}
