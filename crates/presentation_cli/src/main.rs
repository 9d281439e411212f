//! Skycast CLI
//!
//! Command-line client for a running Skycast server, plus a few local
//! helpers that need no server.

#![allow(clippy::print_stdout)]

use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use domain::{DailySummaryRow, degrees_to_cardinal};
use infrastructure::{AppConfig, ConfigValidator};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast-cli")]
#[command(author, version, about = "Skycast weather dashboard CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the five-day forecast table for a city
    ///
    /// Example: skycast-cli forecast "Lisbon, prt"
    Forecast {
        /// City, optionally followed by a comma and a country code
        city: String,

        /// Server URL
        #[arg(short, long, env = "SKYCAST_URL", default_value = DEFAULT_SERVER_URL)]
        url: String,
    },

    /// Check whether the server is up
    Status {
        /// Server URL
        #[arg(short, long, env = "SKYCAST_URL", default_value = DEFAULT_SERVER_URL)]
        url: String,
    },

    /// Print the compass label for a bearing in degrees
    #[command(allow_negative_numbers = true)]
    Cardinal {
        /// Bearing in degrees, any finite value
        degrees: f64,
    },

    /// Load the local configuration and report problems
    CheckConfig,
}

/// Body of `GET /v1/forecast`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    city: String,
    rows: Vec<DailySummaryRow>,
}

/// Body of a failed API call
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Render the daily rows as a fixed-width table
fn format_table(city: &str, rows: &[DailySummaryRow]) -> String {
    let mut out = format!("Five day forecast for {city}\n\n");
    let _ = writeln!(
        out,
        "{:<10} {:<24} {:>8} {:>6} {:>10} {:>4}",
        "Day", "Description", "Humidity", "Temp", "Wind", "Dir"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10} {:<24} {:>7}% {:>4}°C {:>6} kph {:>4}",
            row.day,
            row.description,
            row.humidity.value(),
            row.temperature,
            row.wind_speed,
            row.wind_direction.label()
        );
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Forecast { city, url } => {
            let endpoint = endpoint_url(&url, "/v1/forecast");
            debug!(%endpoint, %city, "Requesting forecast");

            let resp = client
                .get(endpoint)
                .query(&[("city", city.as_str())])
                .send()
                .await?;

            if resp.status().is_success() {
                let body = resp.json::<ForecastResponse>().await?;
                println!("{}", format_table(&body.city, &body.rows));
            } else {
                let status = resp.status();
                let message = resp
                    .json::<ErrorResponse>()
                    .await
                    .map_or_else(|_| status.to_string(), |e| e.error);
                println!("❌ {message}");
                std::process::exit(1);
            }
        },

        Commands::Status { url } => {
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body = resp.json::<serde_json::Value>().await?;
                    println!("✅ Healthy");
                    println!("{}", serde_json::to_string_pretty(&body)?);
                },
                Ok(resp) => {
                    println!("❌ Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("❌ Unreachable: {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Cardinal { degrees } => {
            let label = degrees_to_cardinal(degrees)?;
            println!("{label}");
        },

        Commands::CheckConfig => {
            let config = AppConfig::load()?;
            let warnings = config.validate();

            println!("🔧 Environment: {}", config.environment);
            if warnings.is_empty() {
                println!("✅ No configuration issues");
            }
            for warning in &warnings {
                println!(
                    "[{:?}] {}: {}\n    → {}",
                    warning.severity, warning.code, warning.message, warning.recommendation
                );
            }

            if ConfigValidator::should_block_startup(&config, &warnings) {
                println!("❌ The server would refuse to start with this configuration");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
