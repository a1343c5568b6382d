//! Errors raised by the opt-in strict checks and by [`FilterBank`] indexing.
//!
//! The plain [`AlphaBetaFilter::update`] path never produces one of these.
//!
//! [`FilterBank`]: crate::filter::bank::FilterBank
//! [`AlphaBetaFilter::update`]: crate::filter::alpha_beta::AlphaBetaFilter::update

use std::fmt;

use crate::sample::Sample;

/// Which of the two gain coefficients a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    Alpha,
    Beta,
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gain::Alpha => write!(f, "alpha"),
            Gain::Beta => write!(f, "beta"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A gain lies outside the open interval (0, 1).
    GainOutOfRange { gain: Gain, value: f64 },
    /// The sample's time or value is NaN or infinite.
    NonFiniteSample(Sample),
    /// The sample is older than the last accepted one.
    NonMonotonicTime { last: f64, got: f64 },
    UnknownChannel { channel: usize, channels: usize },
    ChannelCountMismatch { expected: usize, got: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::GainOutOfRange { gain, value } => {
                write!(f, "{gain} gain {value} is outside the open interval (0, 1)")
            }
            FilterError::NonFiniteSample(sample) => write!(
                f,
                "sample at time {} with value {} is not finite",
                sample.time, sample.value
            ),
            FilterError::NonMonotonicTime { last, got } => write!(
                f,
                "sample time {got} is earlier than the last accepted time {last}"
            ),
            FilterError::UnknownChannel { channel, channels } => {
                write!(f, "channel {channel} does not exist (bank has {channels})")
            }
            FilterError::ChannelCountMismatch { expected, got } => {
                write!(f, "frame has {got} values but the bank has {expected} channels")
            }
        }
    }
}

impl std::error::Error for FilterError {}
