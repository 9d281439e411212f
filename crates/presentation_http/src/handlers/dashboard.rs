//! Dashboard page handlers
//!
//! `GET /` serves the whole page, `GET /dashboard` only the section the
//! page swaps in while the user types. Both always answer with HTML: a
//! forecast failure renders the degraded view, never an error status. A
//! query string that does not deserialize is treated as no city at all.

use application::{ApplicationError, DashboardView};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use domain::CityQuery;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Query parameters of the dashboard endpoints
#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    /// Free-text city input, `"city"` or `"city, region"`
    pub city: Option<String>,
}

impl CityParams {
    /// The raw input, or the default city when absent or blank
    fn input<'a>(&'a self, default_city: &'a str) -> &'a str {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(default_city)
    }
}

/// Unwrap the query, falling back to no city on a malformed query string
fn city_params(params: Result<Query<CityParams>, QueryRejection>) -> CityParams {
    match params {
        Ok(Query(params)) => params,
        Err(e) => {
            warn!(error = %e.body_text(), "Ignoring malformed dashboard query");
            CityParams::default()
        },
    }
}

async fn build_view(state: &AppState, input: &str) -> DashboardView {
    match CityQuery::parse(input) {
        Ok(query) => state.dashboard_service.dashboard(&query).await,
        Err(e) => {
            debug!(error = %e, "Rejected city input");
            DashboardView::unavailable(input, ApplicationError::from(e).user_message())
        },
    }
}

/// Full dashboard page
#[instrument(skip(state))]
pub async fn dashboard_page(
    State(state): State<AppState>,
    params: Result<Query<CityParams>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let params = city_params(params);
    let input = params.input(&state.default_city);
    let view = build_view(&state, input).await;

    let html = state
        .templates
        .render_page(&view, input)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(html))
}

/// Dashboard section only, for in-place refreshes
#[instrument(skip(state))]
pub async fn dashboard_fragment(
    State(state): State<AppState>,
    params: Result<Query<CityParams>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let params = city_params(params);
    let input = params.input(&state.default_city);
    let view = build_view(&state, input).await;

    let html = state
        .templates
        .render_fragment(&view)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(html))
}
