//! Skycast HTTP Server
//!
//! Main entry point for the dashboard server.

use std::{sync::Arc, time::Duration};

use application::{DashboardService, ForecastNormalizer};
use domain::SamplingPolicy;
use infrastructure::{
    AppConfig, ConfigValidator, ForecastAdapter, TemplateEngine, init_telemetry,
};
use presentation_http::{
    error::set_expose_internal_errors,
    routes,
    shutdown::{run_until_drained, shutdown_signal},
    state::AppState,
};
use tokio::{net::TcpListener, sync::Notify};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the filter and format apply
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_telemetry(&config.telemetry)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!("🌦️ Skycast v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        host = %config.server.host,
        port = %config.server.port,
        default_city = %config.weather.default_city,
        "Configuration loaded"
    );

    // Validate configuration
    let warnings = config.validate();
    ConfigValidator::log_warnings(&warnings);
    if ConfigValidator::should_block_startup(&config, &warnings) {
        anyhow::bail!(
            "Refusing to start in production with {} critical configuration issue(s)",
            warnings.iter().filter(|w| w.is_critical()).count()
        );
    }

    set_expose_internal_errors(!config.is_production());

    // Initialize services
    let policy = config.forecast.to_policy().unwrap_or_else(|e| {
        warn!(error = %e, "Invalid sampling policy, using daily default");
        SamplingPolicy::DAILY
    });

    let forecast_adapter = ForecastAdapter::with_config(config.weather.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;

    let dashboard_service =
        DashboardService::new(Arc::new(forecast_adapter), ForecastNormalizer::new(policy));

    let templates = TemplateEngine::new()
        .map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

    let config = Arc::new(config);
    let state = AppState::new(Arc::new(dashboard_service), templates, Arc::clone(&config));

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if !config.server.cors_enabled {
        CorsLayer::new()
    } else if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Add middleware (first listed = outermost)
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let drain_started = Arc::new(Notify::new());

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&drain_started)));
    run_until_drained(server, drain_started, shutdown_timeout).await?;

    info!("👋 Server shutdown complete");

    Ok(())
}
