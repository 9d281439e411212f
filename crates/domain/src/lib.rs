//! Domain layer for Skycast
//!
//! Forecast entries, daily summaries and the value objects they are built
//! from. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
