//! # Tracking Filters
//!
//! This module contains the filtering building blocks:
//!
//! - **`alpha_beta`**: The alpha-beta tracking filter. It keeps a running
//!   estimate of a value and its rate of change, predicts forward to each
//!   new sample's timestamp, and blends the prediction with the
//!   observation using two fixed gains.
//!
//! - **`bank`**: One independent filter per raw sensor channel, so a
//!   three-axis accelerometer or gyro can be smoothed with a single call
//!   per frame.

pub mod alpha_beta;
pub mod bank;

use crate::sample::Sample;

/// What every tracking filter in this crate can do.
///
/// [`FilterBank`](bank::FilterBank) is generic over this trait, so other
/// filter variants (an alpha-beta-gamma filter tracking acceleration, for
/// instance) can be dropped into a bank without touching it.
pub trait Filter {
    /// Ingest one raw sample and return the filtered estimate for it.
    fn update(&mut self, sample: Sample) -> Sample;

    /// Replace the value gain. Takes effect on the next `update`.
    fn set_alpha(&mut self, alpha: f64);

    /// Replace the rate gain. Takes effect on the next `update`.
    fn set_beta(&mut self, beta: f64);

    /// Forget everything learned from past samples.
    fn reset(&mut self);
}
