//! Application state shared across handlers

use std::sync::Arc;

use application::DashboardService;
use domain::{CityQuery, DEFAULT_CITY};
use infrastructure::{AppConfig, TemplateEngine};
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Dashboard use case
    pub dashboard_service: Arc<DashboardService>,
    /// Compiled HTML templates
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// City used when a request carries none
    pub default_city: Arc<str>,
}

impl AppState {
    /// Build the state, resolving the configured default city
    ///
    /// An unusable `weather.default_city` falls back to the built-in default.
    #[must_use]
    pub fn new(
        dashboard_service: Arc<DashboardService>,
        templates: TemplateEngine,
        config: Arc<AppConfig>,
    ) -> Self {
        let default_city = match CityQuery::parse(&config.weather.default_city) {
            Ok(_) => config.weather.default_city.trim().to_string(),
            Err(e) => {
                warn!(error = %e, fallback = DEFAULT_CITY, "Invalid default city");
                DEFAULT_CITY.to_string()
            },
        };

        Self {
            dashboard_service,
            templates,
            config,
            default_city: Arc::from(default_city),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dashboard_service", &self.dashboard_service)
            .field("default_city", &self.default_city)
            .finish_non_exhaustive()
    }
}
