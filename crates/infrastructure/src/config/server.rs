//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Bind host used when none is configured
pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";

/// Bind port used when none is configured
pub(crate) const DEFAULT_PORT: u16 = 8080;

/// Seconds in-flight requests get to finish after a shutdown signal
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (empty = allow all in dev, specific origins in production)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,

    /// Directory served under `/assets` (icons, stylesheet)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_shutdown_timeout_secs() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT_SECS
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl ServerConfig {
    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
            assets_dir: default_assets_dir(),
        }
    }
}
