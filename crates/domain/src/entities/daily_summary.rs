//! Daily summary row
//!
//! One line of the five-day table: a single sampled forecast entry with
//! the temperature rounded and the wind bearing turned into a compass
//! label.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::RawForecastEntry;
use crate::errors::DomainError;
use crate::value_objects::{CompassDirection, Humidity};

/// Full English weekday name
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Summary of one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryRow {
    /// Weekday label, e.g. "Monday"
    pub day: String,
    /// Calendar date of the sampled entry
    pub date: NaiveDate,
    /// Weather description
    pub description: String,
    /// Temperature in °C, rounded half away from zero
    pub temperature: i32,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed as reported upstream
    pub wind_speed: f64,
    /// Wind direction on the 16-point compass
    pub wind_direction: CompassDirection,
}

impl DailySummaryRow {
    /// Derive a row from a raw entry
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` for an unparsable timestamp and
    /// `DomainError::InvalidReading` for an implausible temperature or a
    /// non-finite wind bearing.
    pub fn from_entry(entry: &RawForecastEntry) -> Result<Self, DomainError> {
        let date = entry.parsed_timestamp()?.date();

        Ok(Self {
            day: weekday_name(date.weekday()).to_string(),
            date,
            description: entry.description.clone(),
            temperature: round_temperature(entry.temperature)?,
            humidity: Humidity::from_reading(entry.humidity),
            wind_speed: entry.wind_speed,
            wind_direction: CompassDirection::from_degrees(entry.wind_direction)
                .map_err(|_| {
                    DomainError::InvalidReading(format!(
                        "wind bearing {} is not a plausible reading",
                        entry.wind_direction
                    ))
                })?,
        })
    }
}

fn round_temperature(celsius: f64) -> Result<i32, DomainError> {
    // Anything outside ±1000 °C is a broken feed, not weather
    if !celsius.is_finite() || celsius.abs() > 1000.0 {
        return Err(DomainError::InvalidReading(format!(
            "temperature {celsius} is not a plausible reading"
        )));
    }
    #[allow(clippy::cast_possible_truncation)]
    let rounded = celsius.round() as i32;
    Ok(rounded)
}
