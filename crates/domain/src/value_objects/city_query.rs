//! City query value object
//!
//! The dashboard accepts a single free-form string such as `"Lisbon"` or
//! `"Lisbon, prt"`. Everything before the first comma is the city, anything
//! after it is an optional country or region code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// City shown when the user has not typed anything
pub const DEFAULT_CITY: &str = "Lisbon";

const MAX_LEN: usize = 100;

/// A validated city lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityQuery {
    city: String,
    region: Option<String>,
}

impl CityQuery {
    /// Parse user input into a city query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the city part is empty,
    /// too long, or contains control characters.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let (city, region) = match input.split_once(',') {
            Some((city, region)) => (city.trim(), Some(region.trim())),
            None => (input.trim(), None),
        };

        if city.is_empty() {
            return Err(DomainError::ValidationError(
                "city name must not be empty".to_string(),
            ));
        }
        if input.len() > MAX_LEN {
            return Err(DomainError::ValidationError(format!(
                "city query exceeds {MAX_LEN} characters"
            )));
        }
        if input.chars().any(char::is_control) {
            return Err(DomainError::ValidationError(
                "city query contains control characters".to_string(),
            ));
        }

        Ok(Self {
            city: city.to_string(),
            region: region.filter(|r| !r.is_empty()).map(str::to_string),
        })
    }

    /// Parse optional input, using `fallback` when it is missing or blank
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`CityQuery::parse`].
    pub fn parse_or(input: Option<&str>, fallback: &str) -> Result<Self, DomainError> {
        match input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => Self::parse(value),
            None => Self::parse(fallback),
        }
    }

    /// City name
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Optional country or region code
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Value for the upstream `q` parameter (`city` or `city,region`)
    #[must_use]
    pub fn to_query_param(&self) -> String {
        match &self.region {
            Some(region) => format!("{},{}", self.city, region),
            None => self.city.clone(),
        }
    }
}

impl Default for CityQuery {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            region: None,
        }
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}, {}", self.city, region),
            None => f.write_str(&self.city),
        }
    }
}

impl FromStr for CityQuery {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
