//! Dashboard render description
//!
//! A plain data description of what the dashboard shows for one city:
//! headline card, chart series and table. Built fresh for every request by
//! [`render_dashboard`]; the HTML and JSON layers only serialize it.

use domain::{CityQuery, DailySummaryRow, WeatherIcon};
use serde::{Deserialize, Serialize};

/// Column headers of the forecast table
pub const TABLE_COLUMNS: [&str; 6] = [
    "Day",
    "Description",
    "Humidity",
    "Temperature",
    "Wind",
    "Wind Direction",
];

/// Whether the view carries forecast data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewStatus {
    /// Forecast rendered normally
    Ready,
    /// Forecast could not be produced; `message` is safe to display
    Unavailable { message: String },
}

/// Headline card for the first forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub day: String,
    pub description: String,
    /// Asset path of the icon, `None` when no icon matches
    pub icon: Option<String>,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

/// One named line of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// A polyline ready to drop into an SVG `points` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLine {
    pub name: String,
    pub points: String,
}

/// Line chart over the forecast days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Lowest and highest value across every series
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Project every series onto a `width` x `height` canvas
    ///
    /// All series share one y axis. A flat range is centered vertically.
    #[must_use]
    pub fn plot(&self, width: f64, height: f64) -> Vec<PlotLine> {
        let Some((lo, hi)) = self.value_range() else {
            return Vec::new();
        };
        let span = hi - lo;
        let steps = self.labels.len().saturating_sub(1).max(1);
        #[allow(clippy::cast_precision_loss)]
        let dx = width / steps as f64;

        self.series
            .iter()
            .map(|series| {
                let points = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        #[allow(clippy::cast_precision_loss)]
                        let x = i as f64 * dx;
                        let y = if span > 0.0 {
                            height - (v - lo) / span * height
                        } else {
                            height / 2.0
                        };
                        format!("{x:.1},{y:.1}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                PlotLine {
                    name: series.name.clone(),
                    points,
                }
            })
            .collect()
    }
}

/// Forecast table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the dashboard needs to draw one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub status: ViewStatus,
    pub headline: Option<Headline>,
    pub chart: Option<ChartSpec>,
    pub table: Option<TableSpec>,
}

impl DashboardView {
    /// Degraded view shown when the forecast cannot be produced
    #[must_use]
    pub fn unavailable(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: ViewStatus::Unavailable {
                message: message.into(),
            },
            headline: None,
            chart: None,
            table: None,
        }
    }

    /// Whether the view carries forecast data
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.status, ViewStatus::Ready)
    }
}

/// Build the render description for a city and its daily rows
#[must_use]
pub fn render_dashboard(query: &CityQuery, rows: &[DailySummaryRow]) -> DashboardView {
    let title = query.to_string();
    let Some(first) = rows.first() else {
        return DashboardView::unavailable(title, "No forecast data available");
    };

    let headline = Headline {
        day: first.day.clone(),
        description: first.description.clone(),
        icon: WeatherIcon::lookup(&first.description).map(|i| i.asset_path().to_string()),
        temperature: format!("{} °C", first.temperature),
        humidity: format!("Humidity: {}", first.humidity),
        wind: format!("Wind: {} kph", first.wind_speed),
    };

    let chart = ChartSpec {
        title: format!("Five Day Weather Forecast For {title}"),
        labels: rows.iter().map(|r| r.day.clone()).collect(),
        series: vec![
            ChartSeries {
                name: "temperature".to_string(),
                values: rows.iter().map(|r| f64::from(r.temperature)).collect(),
            },
            ChartSeries {
                name: "humidity".to_string(),
                values: rows
                    .iter()
                    .map(|r| f64::from(r.humidity.value()))
                    .collect(),
            },
            ChartSeries {
                name: "wind".to_string(),
                values: rows.iter().map(|r| r.wind_speed).collect(),
            },
        ],
    };

    let table = TableSpec {
        caption: format!("Table for {title} Weather Information"),
        columns: TABLE_COLUMNS.iter().map(ToString::to_string).collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.day.clone(),
                    r.description.clone(),
                    r.humidity.value().to_string(),
                    r.temperature.to_string(),
                    r.wind_speed.to_string(),
                    r.wind_direction.label().to_string(),
                ]
            })
            .collect(),
    };

    DashboardView {
        title,
        status: ViewStatus::Ready,
        headline: Some(headline),
        chart: Some(chart),
        table: Some(table),
    }
}
