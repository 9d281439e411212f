//! Configuration validation module
//!
//! Startup checks for application configuration.

pub mod config_validator;

pub use config_validator::{ConfigValidator, ConfigWarning, WarningSeverity};
