//! Skycast HTTP presentation layer
//!
//! Serves the dashboard page, its live-update fragment and a small JSON API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
