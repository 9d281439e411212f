//! Forecast sampling configuration.

use domain::{DomainError, SamplingPolicy};
use serde::{Deserialize, Serialize};

/// Which entries of the 3-hourly series become daily rows
///
/// Defaults to the 4th entry of each 8-entry day, for five days. Which
/// wall-clock hour that is depends on where the upstream series starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastAppConfig {
    /// Index of the first sampled entry
    #[serde(default = "default_sample_offset")]
    pub sample_offset: usize,

    /// Distance between sampled entries
    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,

    /// Number of daily rows
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

const fn default_sample_offset() -> usize {
    SamplingPolicy::DAILY.offset()
}

const fn default_sample_stride() -> usize {
    SamplingPolicy::DAILY.stride()
}

const fn default_sample_count() -> usize {
    SamplingPolicy::DAILY.count()
}

impl ForecastAppConfig {
    /// Build the sampling policy
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero stride or count.
    pub fn to_policy(&self) -> Result<SamplingPolicy, DomainError> {
        SamplingPolicy::new(self.sample_offset, self.sample_stride, self.sample_count)
    }
}

impl Default for ForecastAppConfig {
    fn default() -> Self {
        Self {
            sample_offset: default_sample_offset(),
            sample_stride: default_sample_stride(),
            sample_count: default_sample_count(),
        }
    }
}
