//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{DashboardService, ForecastNormalizer, error::ApplicationError, ports::ForecastPort};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::{CityQuery, RawForecastEntry};
use infrastructure::{AppConfig, TemplateEngine};
use presentation_http::{routes::create_router, state::AppState};
use secrecy::SecretString;

/// Stub forecast service for testing
struct StubForecast {
    entries: usize,
    temperature: f64,
    error: Option<fn(&CityQuery) -> ApplicationError>,
    healthy: bool,
}

impl StubForecast {
    const fn new() -> Self {
        Self {
            entries: 40,
            temperature: 14.4,
            error: None,
            healthy: true,
        }
    }

    const fn failing(error: fn(&CityQuery) -> ApplicationError) -> Self {
        Self {
            entries: 0,
            temperature: 14.4,
            error: Some(error),
            healthy: false,
        }
    }

    const fn short(entries: usize) -> Self {
        Self {
            entries,
            temperature: 14.4,
            error: None,
            healthy: true,
        }
    }

    const fn with_temperature(temperature: f64) -> Self {
        Self {
            entries: 40,
            temperature,
            error: None,
            healthy: true,
        }
    }
}

#[async_trait]
impl ForecastPort for StubForecast {
    async fn fetch_forecast(
        &self,
        query: &CityQuery,
    ) -> Result<Vec<RawForecastEntry>, ApplicationError> {
        if let Some(error) = self.error {
            return Err(error(query));
        }
        Ok((0..self.entries)
            .map(|i| RawForecastEntry {
                timestamp: format!("2024-01-{:02} {:02}:00:00", 15 + i / 8, (i % 8) * 3),
                description: "light rain".to_string(),
                temperature: self.temperature,
                humidity: 70.0,
                wind_speed: 5.2,
                wind_direction: 225.0,
            })
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.healthy
    }
}

fn config_with_key() -> AppConfig {
    let mut config = AppConfig::default();
    config.weather.api_key = Some(SecretString::from("test-key".to_string()));
    config
}

fn create_state(forecast: StubForecast, config: AppConfig) -> AppState {
    let service = DashboardService::new(Arc::new(forecast), ForecastNormalizer::default());
    AppState::new(
        Arc::new(service),
        TemplateEngine::new().expect("templates compile"),
        Arc::new(config),
    )
}

fn create_test_server(forecast: StubForecast) -> TestServer {
    let router = create_router(create_state(forecast, config_with_key()));
    TestServer::new(router).expect("Failed to create test server")
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_endpoint_returns_ready_when_healthy() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/ready").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["weather"]["healthy"], true);
    assert_eq!(body["weather"]["api_key_configured"], true);
}

#[tokio::test]
async fn readiness_endpoint_returns_unavailable_when_unhealthy() {
    let server = create_test_server(StubForecast::failing(|_| {
        ApplicationError::ExternalService("down".into())
    }));

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["weather"]["healthy"], false);
}

#[tokio::test]
async fn readiness_endpoint_requires_api_key() {
    let router = create_router(create_state(StubForecast::new(), AppConfig::default()));
    let server = TestServer::new(router).expect("Failed to create test server");

    let response = server.get("/ready").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["weather"]["api_key_configured"], false);
}

// ============ Dashboard Page Tests ============

#[tokio::test]
async fn dashboard_page_renders_default_city() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("placeholder=\"ex Lisbon, prt\""));
    assert!(html.contains(r#"data-state="ready""#));
    assert!(html.contains("Five Day Weather Forecast For Lisbon"));
}

#[tokio::test]
async fn dashboard_page_uses_city_param() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/").add_query_param("city", "Porto, prt").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"value="Porto, prt""#));
    assert!(html.contains("Table for Porto, prt Weather Information"));
    assert!(html.contains("<td>Monday</td>"));
}

#[tokio::test]
async fn dashboard_page_ignores_repeated_city_param() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/?city=Lisbon&city=Porto").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-state="ready""#));
    assert!(html.contains("Five Day Weather Forecast For Lisbon"));
}

#[tokio::test]
async fn dashboard_page_degrades_on_upstream_error() {
    let server = create_test_server(StubForecast::failing(|_| {
        ApplicationError::ExternalService("connection refused".into())
    }));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-state="unavailable""#));
    assert!(html.contains("Weather data is currently unavailable"));
    assert!(!html.contains("connection refused"));
}

// ============ Dashboard Fragment Tests ============

#[tokio::test]
async fn dashboard_fragment_renders_section_only() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/dashboard").add_query_param("city", "Lisbon").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-state="ready""#));
    assert_eq!(html.matches("<polyline").count(), 3);
}

#[tokio::test]
async fn dashboard_fragment_reports_unknown_city() {
    let server = create_test_server(StubForecast::failing(|q| {
        ApplicationError::NotFound(q.to_string())
    }));

    let response = server
        .get("/dashboard")
        .add_query_param("city", "Atlantis")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-state="unavailable""#));
    assert!(html.contains("No forecast found for Atlantis"));
}

#[tokio::test]
async fn dashboard_fragment_rejects_empty_city_part() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/dashboard").add_query_param("city", ", prt").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-state="unavailable""#));
    assert!(html.contains("city name must not be empty"));
}

#[tokio::test]
async fn dashboard_fragment_ignores_repeated_city_param() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/dashboard?city=a&city=b").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"data-state="ready""#));
}

#[tokio::test]
async fn dashboard_fragment_hides_implausible_reading() {
    let server = create_test_server(StubForecast::with_temperature(5000.0));

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-state="unavailable""#));
    assert!(html.contains("Weather data is currently unavailable"));
    assert!(!html.contains("5000"));
}

#[tokio::test]
async fn dashboard_fragment_degrades_on_short_series() {
    let server = create_test_server(StubForecast::short(20));

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"data-state="unavailable""#));
}

// ============ Forecast API Tests ============

#[tokio::test]
async fn forecast_endpoint_returns_five_rows() {
    let server = create_test_server(StubForecast::new());

    let response = server
        .get("/v1/forecast")
        .add_query_param("city", "Lisbon, prt")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["city"], "Lisbon, prt");
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["day"], "Monday");
    assert_eq!(rows[0]["temperature"], 14);
    assert_eq!(rows[0]["humidity"], 70);
    assert_eq!(rows[0]["wind_direction"], "SW");
}

#[tokio::test]
async fn forecast_endpoint_defaults_city() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/v1/forecast").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["city"], "Lisbon");
}

#[tokio::test]
async fn forecast_endpoint_upstream_failure_is_503() {
    let server = create_test_server(StubForecast::failing(|_| {
        ApplicationError::ExternalService("timeout".into())
    }));

    let response = server.get("/v1/forecast").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

#[tokio::test]
async fn forecast_endpoint_short_series_is_503() {
    let server = create_test_server(StubForecast::short(35));

    let response = server.get("/v1/forecast").await;

    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn forecast_endpoint_implausible_reading_is_503() {
    let server = create_test_server(StubForecast::with_temperature(5000.0));

    let response = server.get("/v1/forecast").await;

    response.assert_status_service_unavailable();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "service_unavailable");
}

#[tokio::test]
async fn forecast_endpoint_unknown_city_is_404() {
    let server = create_test_server(StubForecast::failing(|q| {
        ApplicationError::NotFound(q.to_string())
    }));

    let response = server
        .get("/v1/forecast")
        .add_query_param("city", "Atlantis")
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No forecast found for Atlantis");
}

#[tokio::test]
async fn forecast_endpoint_rate_limited_is_429() {
    let server = create_test_server(StubForecast::failing(|_| ApplicationError::RateLimited));

    let response = server.get("/v1/forecast").await;

    response.assert_status(axum::http::StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn forecast_endpoint_configuration_error_is_500() {
    let server = create_test_server(StubForecast::failing(|_| {
        ApplicationError::Configuration("API key rejected".into())
    }));

    let response = server.get("/v1/forecast").await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "internal_error");
}

#[tokio::test]
async fn forecast_endpoint_invalid_city_is_400() {
    let server = create_test_server(StubForecast::new());

    let response = server
        .get("/v1/forecast")
        .add_query_param("city", ",prt")
        .await;

    response.assert_status_bad_request();
}

// ============ Cardinal Endpoint Tests ============

#[tokio::test]
async fn cardinal_endpoint_converts_degrees() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/v1/cardinal").add_query_param("degrees", "45").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["direction"], "NE");
}

#[tokio::test]
async fn cardinal_endpoint_wraps_negative_bearing() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/v1/cardinal").add_query_param("degrees", "-90").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["direction"], "W");
}

#[tokio::test]
async fn cardinal_endpoint_missing_degrees_is_400() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/v1/cardinal").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn cardinal_endpoint_nan_is_400() {
    let server = create_test_server(StubForecast::new());

    let response = server.get("/v1/cardinal").add_query_param("degrees", "NaN").await;

    response.assert_status_bad_request();
}

// ============ Asset Tests ============

#[tokio::test]
async fn assets_are_served_from_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("img")).unwrap();
    std::fs::write(dir.path().join("img/rain.png"), b"png").unwrap();

    let mut config = config_with_key();
    config.server.assets_dir = dir.path().to_string_lossy().into_owned();
    let router = create_router(create_state(StubForecast::new(), config));
    let server = TestServer::new(router).expect("Failed to create test server");

    let response = server.get("/assets/img/rain.png").await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"png");

    let response = server.get("/assets/img/snow.png").await;
    response.assert_status_not_found();
}
