//! Application layer - Use cases and orchestration
//!
//! Defines the forecast port, normalizes raw forecasts into daily rows and
//! turns those rows into a render description for the dashboard.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
