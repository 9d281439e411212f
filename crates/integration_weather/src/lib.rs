//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>). Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CityInfo, ForecastItem, ForecastResponse, MainReadings, WeatherDescription, Wind};
