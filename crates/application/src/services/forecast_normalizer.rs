//! Forecast normalizer
//!
//! Turns the raw 3-hourly forecast series into a fixed number of daily
//! summary rows by sampling it according to a [`SamplingPolicy`].

use domain::{DailySummaryRow, DomainError, RawForecastEntry, SamplingPolicy};
use tracing::trace;

/// Samples a forecast series into daily rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastNormalizer {
    policy: SamplingPolicy,
}

impl ForecastNormalizer {
    /// Create a normalizer with the given sampling policy
    #[must_use]
    pub const fn new(policy: SamplingPolicy) -> Self {
        Self { policy }
    }

    /// Sampling policy in use
    #[must_use]
    pub const fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Indices of the entries that become rows
    #[must_use]
    pub fn sample_indices(&self) -> Vec<usize> {
        self.policy.indices().collect()
    }

    /// Convert a single entry into a summary row
    ///
    /// # Errors
    ///
    /// See [`DailySummaryRow::from_entry`].
    pub fn to_daily_row(entry: &RawForecastEntry) -> Result<DailySummaryRow, DomainError> {
        DailySummaryRow::from_entry(entry)
    }

    /// Normalize a full series into one row per sampled index
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DataShape` if the series is shorter than the
    /// policy requires, or the first per-entry conversion error.
    pub fn normalize(
        &self,
        entries: &[RawForecastEntry],
    ) -> Result<Vec<DailySummaryRow>, DomainError> {
        let required = self.policy.required_len();
        if entries.len() < required {
            return Err(DomainError::data_shape(required, entries.len()));
        }

        self.policy
            .indices()
            .map(|index| {
                let entry = entries
                    .get(index)
                    .ok_or_else(|| DomainError::data_shape(required, entries.len()))?;
                trace!(index, timestamp = %entry.timestamp, "Sampling forecast entry");
                Self::to_daily_row(entry)
            })
            .collect()
    }
}
