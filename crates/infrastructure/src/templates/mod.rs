//! Template engine module for rendering the dashboard
//!
//! Uses the Tera templating engine. Templates are compiled into the binary:
//! - `dashboard/page.html`: full page with the city input and refresh script
//! - `dashboard/fragment.html`: headline, chart and table for one city
//!
//! The page includes the fragment, so both render the same markup for a
//! given [`DashboardView`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_page(&view, "Lisbon, prt")?;
//! ```

use application::DashboardView;
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Width of the chart plot area in SVG units
pub const CHART_WIDTH: f64 = 600.0;
/// Height of the chart plot area in SVG units
pub const CHART_HEIGHT: f64 = 240.0;
/// Space around the plot area for tick labels
const CHART_MARGIN: f64 = 40.0;
/// Delay before the page refetches after typing stops
const DEBOUNCE_MS: u32 = 300;

const PAGE_TEMPLATE: &str = "dashboard/page.html";
const FRAGMENT_TEMPLATE: &str = "dashboard/fragment.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }

    /// Get the inner Tera context
    #[must_use]
    pub fn into_inner(self) -> Context {
        self.inner
    }
}

/// X axis label placed under a chart column
#[derive(Debug, Clone, PartialEq, Serialize)]
struct AxisLabel {
    text: String,
    x: f64,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const DASHBOARD_PAGE: &str = include_str!("dashboard/page.html");
    pub const DASHBOARD_FRAGMENT: &str = include_str!("dashboard/fragment.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.list_templates())
            .finish()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_templates(vec![
            (FRAGMENT_TEMPLATE, embedded::DASHBOARD_FRAGMENT),
            (PAGE_TEMPLATE, embedded::DASHBOARD_PAGE),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!("Dashboard templates compiled");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the full dashboard page
    ///
    /// `city_input` is echoed back into the text field.
    pub fn render_page(
        &self,
        view: &DashboardView,
        city_input: &str,
    ) -> Result<String, TemplateError> {
        let mut ctx = Self::view_context(view);
        ctx.insert("city_input", city_input);
        ctx.insert("debounce_ms", &DEBOUNCE_MS);
        self.render(PAGE_TEMPLATE, &ctx)
    }

    /// Render only the dashboard section, for in-place refreshes
    pub fn render_fragment(&self, view: &DashboardView) -> Result<String, TemplateError> {
        self.render(FRAGMENT_TEMPLATE, &Self::view_context(view))
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// List all available template names
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn view_context(view: &DashboardView) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        ctx.insert("view", view);
        ctx.insert("chart_width", &CHART_WIDTH);
        ctx.insert("chart_height", &CHART_HEIGHT);
        ctx.insert("chart_margin", &CHART_MARGIN);

        let (plot_lines, axis_labels, value_range) = view.chart.as_ref().map_or_else(
            || (Vec::new(), Vec::new(), None),
            |chart| {
                let steps = chart.labels.len().saturating_sub(1).max(1);
                let dx = CHART_WIDTH / steps as f64;
                let labels: Vec<AxisLabel> = chart
                    .labels
                    .iter()
                    .enumerate()
                    .map(|(i, text)| AxisLabel {
                        text: text.clone(),
                        x: i as f64 * dx,
                    })
                    .collect();
                (
                    chart.plot(CHART_WIDTH, CHART_HEIGHT),
                    labels,
                    chart.value_range(),
                )
            },
        );
        ctx.insert("plot_lines", &plot_lines);
        ctx.insert("axis_labels", &axis_labels);
        ctx.insert("value_range", &value_range);
        ctx
    }
}
