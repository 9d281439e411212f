//! Application services - Use case implementations

mod dashboard_service;
mod dashboard_view;
mod forecast_normalizer;

pub use dashboard_service::DashboardService;
pub use dashboard_view::{
    ChartSeries, ChartSpec, DashboardView, Headline, PlotLine, TABLE_COLUMNS, TableSpec,
    ViewStatus, render_dashboard,
};
pub use forecast_normalizer::ForecastNormalizer;
