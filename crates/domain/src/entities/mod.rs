//! Domain entities - forecast samples and the rows derived from them

mod daily_summary;
mod forecast_entry;

pub use daily_summary::{DailySummaryRow, weekday_name};
pub use forecast_entry::{RawForecastEntry, TIMESTAMP_FORMAT};
