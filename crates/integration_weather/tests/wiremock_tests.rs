//! Integration tests for the forecast client using wiremock
//!
//! These tests run the OpenWeatherMap client against a mock HTTP server and
//! check how each upstream response is mapped.

use std::time::Duration;

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/forecast` response with `len` 3-hourly entries starting 2024-01-15
fn sample_forecast_response(len: usize) -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..len)
        .map(|i| {
            serde_json::json!({
                "dt": 1_705_276_800 + i64::try_from(i).unwrap() * 10_800,
                "main": {
                    "temp": 14.0 + (i % 8) as f64 * 0.5,
                    "feels_like": 13.0,
                    "pressure": 1018,
                    "humidity": 70
                },
                "weather": [{
                    "id": 500,
                    "main": "Rain",
                    "description": "light rain",
                    "icon": "10d"
                }],
                "wind": {"speed": 5.2, "deg": 225},
                "dt_txt": format!("2024-01-{:02} {:02}:00:00", 15 + i / 8, (i % 8) * 3)
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": len,
        "list": list,
        "city": {"id": 2_267_057, "name": "Lisbon", "country": "PT", "timezone": 0}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: Some(SecretString::from("test-key".to_string())),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(40)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon,prt").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.list.len(), 40);
    assert_eq!(forecast.list[3].dt_txt, "2024-01-15 09:00:00");
    assert_eq!(forecast.list[3].description(), "light rain");
    assert!((forecast.list[3].wind.deg - 225.0).abs() < 0.1);
    assert_eq!(forecast.city_label().as_deref(), Some("Lisbon, PT"));
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(1)),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Too Many Requests"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unauthorized_returns_invalid_api_key() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon").await;

    assert!(
        matches!(result, Err(WeatherError::InvalidApiKey)),
        "Expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_city_returns_city_not_found() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Atlantis").await;

    assert!(
        matches!(result, Err(WeatherError::CityNotFound(ref c)) if c == "Atlantis"),
        "Expected CityNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_list_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"cod": "200"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon").await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn test_slow_response_returns_timeout() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_forecast_response(40))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: Some(SecretString::from("test-key".to_string())),
        timeout_secs: 1,
        ..Default::default()
    };
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.get_forecast("Lisbon").await;

    assert!(
        matches!(result, Err(WeatherError::Timeout(d)) if d == Duration::from_secs(1)),
        "Expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_failure() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

// ============================================================================
// Configuration scenarios
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(40)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        ..Default::default()
    };
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.get_forecast("Lisbon").await;

    assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    assert!(!client.is_healthy().await);
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_forecast_sends_location_key_and_units() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Lisbon,prt"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(40)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Lisbon,prt").await;

    assert!(result.is_ok(), "Query parameters did not match: {result:?}");
}

#[tokio::test]
async fn test_health_check_limits_entry_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("cnt", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}
