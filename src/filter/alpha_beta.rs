//! # Alpha-Beta Tracking Filter
//!
//! An alpha-beta filter tracks a scalar that changes at a roughly constant
//! rate over short stretches of time: a sensor reading drifting with
//! temperature, an altitude during a steady climb, one axis of a noisy
//! accelerometer. It keeps two numbers of memory, the current value
//! estimate `x` and the current rate estimate `v`, and refines both every
//! time a new measurement arrives.
//!
//! ## The Filter Equations
//!
//! For a measurement `z` taken `dt` time units after the previous estimate:
//!
//! ```text
//! x_pred = x + v * dt          (predict forward)
//! r      = z - x_pred          (innovation / residual)
//! x      = x_pred + alpha * r  (correct the value)
//! v      = v + beta * r / dt   (correct the rate)
//! ```
//!
//! - `alpha` decides how much of the residual goes into the value. Near 0
//!   the filter trusts its prediction and smooths heavily; near 1 it
//!   follows the raw measurements.
//! - `beta` decides how quickly the rate estimate reacts. Small values give
//!   a steady rate that is slow to notice real changes.
//!
//! Gains in the open interval (0, 1) keep the filter stable. Nothing here
//! enforces that unless the caller asks for it through
//! [`check_gains`] or [`AlphaBetaFilter::try_update`].
//!
//! ## Irregular Timestamps
//!
//! Because `dt` is recomputed from the timestamps on every call, samples do
//! not need to arrive on a fixed clock. The one timestamp pattern the
//! equations cannot handle is a repeat of the previous timestamp: with
//! `dt = 0` the rate correction would divide by zero. Such a sample is
//! handed back untouched and the filter state is left as it was.

use log::{debug, trace};

use super::Filter;
use crate::error::{FilterError, Gain};
use crate::sample::Sample;

/// A scalar alpha-beta tracking filter.
#[derive(Debug, Clone)]
pub struct AlphaBetaFilter {
    /// Value gain: the share of each residual that corrects the value.
    alpha: f64,

    /// Rate gain: the share of each residual (per unit time) that corrects
    /// the rate estimate.
    beta: f64,

    /// The most recent committed estimate. Its `time` is the timestamp of
    /// the last accepted measurement, or `initial_time` if there is none.
    last_sample: Sample,

    /// The most recent rate estimate, in value units per time unit.
    last_derivative: f64,

    /// The `dt` used by the most recent accepted update.
    last_dt: f64,

    /// Time origin restored by `reset()`. Fixed at construction.
    initial_time: f64,
}

impl AlphaBetaFilter {
    /// Create a filter whose time origin is 0.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self::with_initial_time(alpha, beta, 0.0)
    }

    /// Create a filter whose first update measures `dt` from `initial_time`.
    ///
    /// Neither gain is validated here; see [`check_gains`] for the strict
    /// variant used by [`FilterConfig::build`](crate::config::FilterConfig::build).
    pub fn with_initial_time(alpha: f64, beta: f64, initial_time: f64) -> Self {
        Self {
            alpha,
            beta,
            last_sample: Sample::new(initial_time, 0.0),
            last_derivative: 0.0,
            last_dt: 0.0,
            initial_time,
        }
    }

    /// Ingest one raw measurement and return the filtered estimate for it.
    ///
    /// # The Algorithm
    ///
    /// 1. `dt` is the time since the last committed estimate.
    /// 2. If `dt == 0` the input is returned as-is and nothing changes.
    /// 3. Otherwise predict, compute the residual, correct value and rate,
    ///    commit, and return the committed estimate.
    ///
    /// The returned sample always carries the input's timestamp.
    ///
    /// No input is rejected. NaN or infinite values, and timestamps that go
    /// backwards, flow straight into the arithmetic. Once a NaN is
    /// committed every later estimate is NaN until [`reset`](Self::reset).
    pub fn update(&mut self, sample: Sample) -> Sample {
        let dt = sample.time - self.last_sample.time;

        if dt == 0.0 {
            trace!("zero dt at time {}, passing sample through", sample.time);
            return sample;
        }

        let predicted = self.last_sample.value + self.last_derivative * dt;
        let error = sample.value - predicted;

        let estimate = Sample::new(sample.time, predicted + self.alpha * error);

        self.last_derivative += (self.beta * error) / dt;
        self.last_sample = estimate;
        self.last_dt = dt;

        estimate
    }

    /// Like [`update`](Self::update), but refuses samples that would
    /// corrupt the state.
    ///
    /// Rejected are samples with a NaN or infinite time or value, and
    /// samples older than the last accepted one. A sample at exactly the
    /// last accepted time is still passed through unchanged. On rejection
    /// the filter state is untouched.
    pub fn try_update(&mut self, sample: Sample) -> Result<Sample, FilterError> {
        self.check_sample(&sample)?;
        Ok(self.update(sample))
    }

    /// The checks [`try_update`](Self::try_update) runs, without updating.
    pub fn check_sample(&self, sample: &Sample) -> Result<(), FilterError> {
        if !sample.is_finite() {
            debug!("rejecting non-finite sample {sample:?}");
            return Err(FilterError::NonFiniteSample(*sample));
        }

        if sample.time < self.last_sample.time {
            debug!(
                "rejecting sample at {} older than last accepted {}",
                sample.time, self.last_sample.time
            );
            return Err(FilterError::NonMonotonicTime {
                last: self.last_sample.time,
                got: sample.time,
            });
        }

        Ok(())
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        debug!("alpha {} -> {}", self.alpha, alpha);
        self.alpha = alpha;
    }

    pub fn set_beta(&mut self, beta: f64) {
        debug!("beta {} -> {}", self.beta, beta);
        self.beta = beta;
    }

    /// Return to the state the filter had right after construction.
    ///
    /// The value estimate goes back to `(initial_time, 0)` and the rate
    /// estimate and `last_dt` go back to 0. The gains are kept. Clearing
    /// the rate as well is what lets a filter recover from a NaN that got
    /// into its state.
    pub fn reset(&mut self) {
        debug!("resetting to time {}", self.initial_time);
        self.last_sample = Sample::new(self.initial_time, 0.0);
        self.last_derivative = 0.0;
        self.last_dt = 0.0;
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The `dt` of the most recent accepted update, 0 before the first.
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }

    /// The most recent committed estimate.
    pub fn last_sample(&self) -> Sample {
        self.last_sample
    }

    /// The current rate-of-change estimate.
    pub fn last_derivative(&self) -> f64 {
        self.last_derivative
    }

    pub fn initial_time(&self) -> f64 {
        self.initial_time
    }
}

impl Filter for AlphaBetaFilter {
    fn update(&mut self, sample: Sample) -> Sample {
        AlphaBetaFilter::update(self, sample)
    }

    fn set_alpha(&mut self, alpha: f64) {
        AlphaBetaFilter::set_alpha(self, alpha);
    }

    fn set_beta(&mut self, beta: f64) {
        AlphaBetaFilter::set_beta(self, beta);
    }

    fn reset(&mut self) {
        AlphaBetaFilter::reset(self);
    }
}

/// Check that both gains lie in the open interval (0, 1).
///
/// NaN fails the check like any other out-of-range value.
pub fn check_gains(alpha: f64, beta: f64) -> Result<(), FilterError> {
    for (gain, value) in [(Gain::Alpha, alpha), (Gain::Beta, beta)] {
        if !(value > 0.0 && value < 1.0) {
            return Err(FilterError::GainOutOfRange { gain, value });
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
