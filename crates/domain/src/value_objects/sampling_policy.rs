//! Sampling policy for picking one reading per day out of a sub-daily feed
//!
//! The upstream forecast arrives in 3-hour steps (8 per day). Taking every
//! 8th entry from a fixed offset yields one reading per day at roughly the
//! same local hour.

use crate::errors::DomainError;

/// Offset/stride/count triple describing which entries to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingPolicy {
    offset: usize,
    stride: usize,
    count: usize,
}

impl SamplingPolicy {
    /// One afternoon reading per day over five days of a 3-hourly feed
    pub const DAILY: Self = Self {
        offset: 3,
        stride: 8,
        count: 5,
    };

    /// Create a validated policy
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` when `stride` or `count` is
    /// zero, or when the last sampled index would overflow `usize`.
    pub fn new(offset: usize, stride: usize, count: usize) -> Result<Self, DomainError> {
        if stride == 0 {
            return Err(DomainError::ValidationError(
                "sampling stride must be at least 1".to_string(),
            ));
        }
        if count == 0 {
            return Err(DomainError::ValidationError(
                "sampling count must be at least 1".to_string(),
            ));
        }

        let policy = Self {
            offset,
            stride,
            count,
        };
        if policy.checked_required_len().is_none() {
            return Err(DomainError::ValidationError(format!(
                "sampling policy {offset}+{stride}x{count} overflows"
            )));
        }
        Ok(policy)
    }

    /// Index of the first sampled entry
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Distance between sampled entries
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of sampled entries
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Sampled indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let Self {
            offset,
            stride,
            count,
        } = *self;
        (0..count).map(move |k| offset + k * stride)
    }

    /// Minimum series length for every index to be in range
    #[must_use]
    pub fn required_len(&self) -> usize {
        // Construction guarantees this does not overflow
        self.checked_required_len().unwrap_or(usize::MAX)
    }

    fn checked_required_len(&self) -> Option<usize> {
        self.stride
            .checked_mul(self.count - 1)?
            .checked_add(self.offset)?
            .checked_add(1)
    }
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::DAILY
    }
}
