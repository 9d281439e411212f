//! JSON forecast API

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{CityQuery, CompassDirection, DailySummaryRow};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters of `GET /v1/forecast`
#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    pub city: Option<String>,
}

/// Daily rows for one city
#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Normalized city label, `"city"` or `"city, region"`
    pub city: String,
    pub rows: Vec<DailySummaryRow>,
}

/// Five daily rows for a city
///
/// Unlike the HTML endpoints, failures map to error statuses.
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
    params: Result<Query<ForecastParams>, QueryRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = CityQuery::parse_or(params.city.as_deref(), &state.default_city)?;
    let rows = state.dashboard_service.daily_summary(&query).await?;

    Ok(Json(ForecastResponse {
        city: query.to_string(),
        rows,
    }))
}

/// Query parameters of `GET /v1/cardinal`
#[derive(Debug, Deserialize)]
pub struct CardinalParams {
    pub degrees: f64,
}

/// Compass label for a bearing
#[derive(Debug, Serialize, Deserialize)]
pub struct CardinalResponse {
    pub degrees: f64,
    pub direction: CompassDirection,
}

/// Convert a bearing in degrees to one of the 16 compass points
pub async fn get_cardinal(
    params: Result<Query<CardinalParams>, QueryRejection>,
) -> Result<Json<CardinalResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let direction = CompassDirection::from_degrees(params.degrees)?;

    Ok(Json(CardinalResponse {
        degrees: params.degrees,
        direction,
    }))
}
