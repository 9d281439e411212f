//! Startup validation for application configuration
//!
//! Critical findings in production prevent startup unless
//! `SKYCAST_ALLOW_INVALID_CONFIG` is set. In development every finding is
//! reported and the server falls back to defaults where it can.

use crate::config::AppConfig;
use std::fmt;

/// Environment variable that lets a production server start anyway
pub const ALLOW_INVALID_CONFIG_ENV: &str = "SKYCAST_ALLOW_INVALID_CONFIG";

/// Severity level for configuration findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    /// Informational - no action required
    Info,
    /// Warning - should be addressed but not critical
    Warning,
    /// Critical - must be addressed in production
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A configuration finding with severity and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Severity level of the finding
    pub severity: WarningSeverity,
    /// Short code identifying the finding
    pub code: &'static str,
    /// Human-readable description of the issue
    pub message: String,
    /// Recommended action to resolve the issue
    pub recommendation: &'static str,
}

impl ConfigWarning {
    /// Create a new finding
    #[must_use]
    pub fn new(
        severity: WarningSeverity,
        code: &'static str,
        message: impl Into<String>,
        recommendation: &'static str,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            recommendation,
        }
    }

    /// Check if this finding is critical
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, WarningSeverity::Critical)
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.severity, self.code, self.message, self.recommendation
        )
    }
}

/// Validates application configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and return all findings
    ///
    /// Returns findings sorted by severity (critical first).
    #[must_use]
    pub fn validate(config: &AppConfig) -> Vec<ConfigWarning> {
        let severity = if config.is_production() {
            WarningSeverity::Critical
        } else {
            WarningSeverity::Warning
        };
        let mut warnings = Vec::new();

        Self::check_api_key(config, severity, &mut warnings);
        Self::check_weather_endpoint(config, severity, &mut warnings);
        Self::check_sampling(config, severity, &mut warnings);
        Self::check_default_city(config, severity, &mut warnings);
        Self::check_cors_configuration(config, &mut warnings);

        warnings.sort_by(|a, b| b.severity.cmp(&a.severity));
        warnings
    }

    /// Check if startup should be blocked
    ///
    /// Returns `true` if the server should refuse to start.
    #[must_use]
    pub fn should_block_startup(config: &AppConfig, warnings: &[ConfigWarning]) -> bool {
        let has_critical = warnings.iter().any(ConfigWarning::is_critical);
        let allow_invalid = std::env::var(ALLOW_INVALID_CONFIG_ENV)
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        config.is_production() && has_critical && !allow_invalid
    }

    /// Log all findings using tracing
    pub fn log_warnings(warnings: &[ConfigWarning]) {
        for warning in warnings {
            match warning.severity {
                WarningSeverity::Critical => {
                    tracing::error!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration issue"
                    );
                },
                WarningSeverity::Warning => {
                    tracing::warn!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration warning"
                    );
                },
                WarningSeverity::Info => {
                    tracing::info!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration notice"
                    );
                },
            }
        }
    }

    fn check_api_key(
        config: &AppConfig,
        severity: WarningSeverity,
        warnings: &mut Vec<ConfigWarning>,
    ) {
        if !config.weather.has_api_key() {
            warnings.push(ConfigWarning::new(
                severity,
                "CFG001",
                "No OpenWeatherMap API key configured",
                "Set SKYCAST_WEATHER__API_KEY or weather.api_key",
            ));
        }
    }

    fn check_weather_endpoint(
        config: &AppConfig,
        severity: WarningSeverity,
        warnings: &mut Vec<ConfigWarning>,
    ) {
        let base_url = config.weather.base_url.as_str();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            warnings.push(ConfigWarning::new(
                severity,
                "CFG002",
                format!("weather.base_url is not an HTTP URL: {base_url}"),
                "Use an http:// or https:// URL",
            ));
        }
        if config.weather.timeout_secs == 0 {
            warnings.push(ConfigWarning::new(
                severity,
                "CFG003",
                "weather.timeout_secs is 0, every request would time out",
                "Use a timeout of at least one second",
            ));
        }
    }

    fn check_sampling(
        config: &AppConfig,
        severity: WarningSeverity,
        warnings: &mut Vec<ConfigWarning>,
    ) {
        if let Err(e) = config.forecast.to_policy() {
            warnings.push(ConfigWarning::new(
                severity,
                "CFG004",
                format!("Invalid forecast sampling: {e}"),
                "Use a positive sample_stride and sample_count",
            ));
        }
    }

    fn check_default_city(
        config: &AppConfig,
        severity: WarningSeverity,
        warnings: &mut Vec<ConfigWarning>,
    ) {
        if let Err(e) = config.weather.default_query() {
            warnings.push(ConfigWarning::new(
                severity,
                "CFG005",
                format!("Invalid weather.default_city: {e}"),
                "Use a city name, optionally followed by a comma and a region",
            ));
        }
    }

    fn check_cors_configuration(config: &AppConfig, warnings: &mut Vec<ConfigWarning>) {
        if config.server.cors_enabled && config.server.allowed_origins.is_empty() {
            let severity = if config.is_production() {
                WarningSeverity::Warning
            } else {
                WarningSeverity::Info
            };

            warnings.push(ConfigWarning::new(
                severity,
                "CFG006",
                "CORS is enabled with no origin restrictions (allows all origins)",
                "Specify server.allowed_origins to restrict cross-origin requests",
            ));
        }
    }
}
