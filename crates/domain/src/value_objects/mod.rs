//! Value Objects - Immutable, identity-less domain primitives

mod city_query;
mod compass_direction;
mod humidity;
mod sampling_policy;
mod weather_icon;

pub use city_query::{CityQuery, DEFAULT_CITY};
pub use compass_direction::{CompassDirection, degrees_to_cardinal};
pub use humidity::Humidity;
pub use sampling_policy::SamplingPolicy;
pub use weather_icon::WeatherIcon;
