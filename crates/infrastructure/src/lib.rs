//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides the
//! configuration, logging and HTML templating used by the binaries.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;
pub mod validation;

pub use adapters::*;
pub use config::{
    AppConfig, Environment, ForecastAppConfig, ServerConfig, WeatherAppConfig,
};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
pub use templates::{TemplateContext, TemplateEngine, TemplateError};
pub use validation::{ConfigValidator, ConfigWarning, WarningSeverity};
