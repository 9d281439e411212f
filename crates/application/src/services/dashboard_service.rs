//! Dashboard service
//!
//! Fetches the raw forecast for a city, normalizes it and builds the
//! dashboard view. Failures never escape [`DashboardService::dashboard`];
//! they become a degraded view instead.

use std::sync::Arc;
use std::time::Duration;

use domain::{CityQuery, DailySummaryRow};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::dashboard_view::{DashboardView, render_dashboard};
use super::forecast_normalizer::ForecastNormalizer;
use crate::{error::ApplicationError, ports::ForecastPort};

/// Upper bound for the availability probe
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Use case: show the five-day dashboard for a city
pub struct DashboardService {
    forecasts: Arc<dyn ForecastPort>,
    normalizer: ForecastNormalizer,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Create a new dashboard service
    #[must_use]
    pub fn new(forecasts: Arc<dyn ForecastPort>, normalizer: ForecastNormalizer) -> Self {
        Self {
            forecasts,
            normalizer,
        }
    }

    /// Normalizer used for every request
    #[must_use]
    pub const fn normalizer(&self) -> &ForecastNormalizer {
        &self.normalizer
    }

    /// Fetch and normalize the daily rows for a city
    ///
    /// # Errors
    ///
    /// Propagates port errors and normalization errors.
    #[instrument(skip(self), fields(city = %query))]
    pub async fn daily_summary(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<DailySummaryRow>, ApplicationError> {
        let entries = self.forecasts.fetch_forecast(query).await?;
        debug!(entries = entries.len(), "Fetched raw forecast");

        let rows = self.normalizer.normalize(&entries)?;
        debug!(rows = rows.len(), "Normalized forecast");
        Ok(rows)
    }

    /// Build the dashboard view, degrading on any failure
    #[instrument(skip(self), fields(city = %query))]
    pub async fn dashboard(&self, query: &CityQuery) -> DashboardView {
        match self.daily_summary(query).await {
            Ok(rows) => render_dashboard(query, &rows),
            Err(e) => {
                warn!(error = %e, "Rendering degraded dashboard");
                DashboardView::unavailable(query.to_string(), e.user_message())
            },
        }
    }

    /// Whether the upstream forecast service is usable
    pub async fn is_healthy(&self) -> bool {
        match timeout(HEALTH_CHECK_TIMEOUT, self.forecasts.is_available()).await {
            Ok(healthy) => healthy,
            Err(_) => {
                warn!("Forecast availability check timed out");
                false
            },
        }
    }
}
