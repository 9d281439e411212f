//! Route definitions

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.server.assets_dir);

    Router::new()
        // Dashboard
        .route("/", get(handlers::dashboard::dashboard_page))
        .route("/dashboard", get(handlers::dashboard::dashboard_fragment))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Forecast API (v1)
        .route("/v1/forecast", get(handlers::forecast::get_forecast))
        .route("/v1/cardinal", get(handlers::forecast::get_cardinal))
        // Icons and stylesheet
        .nest_service("/assets", assets)
        // Attach state
        .with_state(state)
}
