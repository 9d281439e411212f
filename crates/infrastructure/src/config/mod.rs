//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: OpenWeatherMap client settings
//! - `forecast`: sampling of the 3-hourly series
//!
//! Logging settings live in [`crate::telemetry::TelemetryConfig`].
//!
//! Sources, lowest precedence first: built-in defaults, the optional
//! `config.toml` (path overridable through `SKYCAST_CONFIG`), then
//! `SKYCAST_*` environment variables with `__` between section and key,
//! e.g. `SKYCAST_WEATHER__API_KEY`.

mod forecast;
mod integrations;
mod server;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::telemetry::TelemetryConfig;
use crate::validation::{ConfigValidator, ConfigWarning};

pub use forecast::ForecastAppConfig;
pub use integrations::WeatherAppConfig;
pub use server::ServerConfig;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "SKYCAST_CONFIG";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "SKYCAST";

/// Configuration file looked up when `SKYCAST_CONFIG` is unset
const DEFAULT_CONFIG_NAME: &str = "config";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls validation strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - configuration problems are warnings
    #[default]
    Development,
    /// Production environment - configuration problems block startup
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Forecast sampling configuration
    #[serde(default)]
    pub forecast: ForecastAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from `path` (extension optional) and environment
    ///
    /// A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", server::DEFAULT_HOST)?
            .set_default("server.port", i64::from(server::DEFAULT_PORT))?
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., SKYCAST_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Whether running in production
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Check the configuration and return all findings, most severe first
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigWarning> {
        ConfigValidator::validate(self)
    }
}
