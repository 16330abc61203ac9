//! Simulated connections and the parameters that bound them.

use crate::error::{Error, Result};
use crate::{DEFAULT_CHANNEL_COUNT, DEFAULT_MAX_RATE, DEFAULT_MIN_RATE};

/// A simulated connection with a single current rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    id: String,
    rate: f64,
}

impl Channel {
    /// Create the channel shown at display position `index` (0-based).
    ///
    /// Identifiers are 1-based: index 0 becomes `Conn-1`.
    pub fn new(index: usize, rate: f64) -> Self {
        Self {
            id: format!("Conn-{}", index + 1),
            rate,
        }
    }

    /// Stable identifier assigned at creation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current rate in bytes/second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub(crate) fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}

/// Immutable simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    channel_count: usize,
    min_rate: f64,
    max_rate: f64,
}

impl SimulationParams {
    /// Validate and build a parameter set.
    ///
    /// Requires at least one channel and finite, non-negative bounds with
    /// `min_rate < max_rate`.
    pub fn new(channel_count: usize, min_rate: f64, max_rate: f64) -> Result<Self> {
        if channel_count == 0 {
            return Err(Error::InvalidParameters(
                "channel count must be at least 1".into(),
            ));
        }
        if !min_rate.is_finite() || !max_rate.is_finite() {
            return Err(Error::InvalidParameters(format!(
                "rate bounds must be finite (got {min_rate}..{max_rate})"
            )));
        }
        if min_rate < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "min rate {min_rate} must not be negative"
            )));
        }
        if min_rate >= max_rate {
            return Err(Error::InvalidParameters(format!(
                "min rate {min_rate} must be below max rate {max_rate}"
            )));
        }
        Ok(Self {
            channel_count,
            min_rate,
            max_rate,
        })
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn min_rate(&self) -> f64 {
        self.min_rate
    }

    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNEL_COUNT,
            min_rate: DEFAULT_MIN_RATE,
            max_rate: DEFAULT_MAX_RATE,
        }
    }
}
