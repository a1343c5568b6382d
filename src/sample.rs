//! # Samples
//!
//! A [`Sample`] is one scalar observation (or estimate) pinned to a point
//! in time. Raw sensor readings go into the filter as samples, and
//! filtered estimates come back out as samples of the same shape.
//!
//! Samples are plain `Copy` values. The filter never rewrites a sample it
//! was handed; every update builds a fresh estimate.

use serde::{Deserialize, Deserializer, Serialize};

/// One scalar value at one point in time.
///
/// The time unit is whatever the caller uses consistently (seconds,
/// milliseconds, ticks). The filter only ever looks at differences
/// between timestamps, and the derivative it estimates is expressed in
/// value units per that time unit.
///
/// Formats without NaN or infinity (JSON among them) write non-finite
/// fields as `null`. A `null` field reads back as NaN, so a sample that
/// went NaN in the filter still round-trips, but an infinite one comes back
/// as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// When the value was observed (or estimated for).
    #[serde(deserialize_with = "null_as_nan")]
    pub time: f64,
    /// The observed or estimated value.
    #[serde(deserialize_with = "null_as_nan")]
    pub value: f64,
}

fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Sample {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// `true` when neither the timestamp nor the value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, value): (f64, f64)) -> Self {
        Self::new(time, value)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
