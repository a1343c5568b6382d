//! # Filter Bank
//!
//! Inertial sensors report several raw channels at once: three axes of
//! acceleration, three of angular rate, sometimes a barometric altitude on
//! top. Each channel gets its own filter here, and each filter only ever
//! sees its own channel's samples. Nothing is mixed between channels; if
//! only the X axis is noisy, only the X estimate is smoothed.

use log::debug;

use super::alpha_beta::AlphaBetaFilter;
use super::Filter;
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::sample::Sample;

/// One independent filter per sensor channel.
#[derive(Debug, Clone)]
pub struct FilterBank<F = AlphaBetaFilter> {
    /// Index `i` filters channel `i`.
    filters: Vec<F>,

    /// Route updates through [`AlphaBetaFilter::try_update`]. Only set
    /// for banks built from a strict [`FilterConfig`].
    strict: bool,
}

impl FilterBank<AlphaBetaFilter> {
    /// Build `channels` identical alpha-beta filters from `config`.
    ///
    /// With `config.strict` set, the gains are checked once here and every
    /// later update goes through the strict path.
    pub fn new(channels: usize, config: &FilterConfig) -> Result<Self, FilterError> {
        let filters = (0..channels)
            .map(|_| config.build())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            filters,
            strict: config.strict,
        })
    }

    /// Feed `sample` to one channel and return that channel's estimate.
    pub fn update(&mut self, channel: usize, sample: Sample) -> Result<Sample, FilterError> {
        let channels = self.filters.len();
        let strict = self.strict;
        let Some(filter) = self.filters.get_mut(channel) else {
            return Err(FilterError::UnknownChannel { channel, channels });
        };

        if strict {
            filter.try_update(sample)
        } else {
            Ok(filter.update(sample))
        }
    }

    /// Feed one frame (one value per channel, all taken at `time`) and
    /// return the estimates in channel order.
    ///
    /// In strict mode the whole frame is checked before any channel is
    /// touched, so a rejected frame leaves every channel as it was.
    pub fn update_frame(&mut self, time: f64, values: &[f64]) -> Result<Vec<Sample>, FilterError> {
        if self.strict {
            self.check_frame(values)?;
            for (filter, &value) in self.filters.iter().zip(values) {
                filter.check_sample(&Sample::new(time, value))?;
            }
        }

        self.update_all(time, values)
    }
}

impl<F: Filter> FilterBank<F> {
    /// Wrap already-built filters. Updates always use the plain
    /// [`Filter::update`] path.
    pub fn from_filters(filters: Vec<F>) -> Self {
        Self {
            filters,
            strict: false,
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Read access to one channel's filter, for diagnostics.
    pub fn channel(&self, channel: usize) -> Option<&F> {
        self.filters.get(channel)
    }

    /// Feed one frame through the plain [`Filter::update`] of every channel.
    pub fn update_all(&mut self, time: f64, values: &[f64]) -> Result<Vec<Sample>, FilterError> {
        self.check_frame(values)?;

        Ok(self
            .filters
            .iter_mut()
            .zip(values)
            .map(|(filter, &value)| filter.update(Sample::new(time, value)))
            .collect())
    }

    /// Set alpha on every channel.
    pub fn set_alpha(&mut self, alpha: f64) {
        for f in &mut self.filters {
            f.set_alpha(alpha);
        }
    }

    /// Set beta on every channel.
    pub fn set_beta(&mut self, beta: f64) {
        for f in &mut self.filters {
            f.set_beta(beta);
        }
    }

    /// Reset every channel, e.g. after the sensor was re-initialised and
    /// its old readings say nothing about the new ones.
    pub fn reset(&mut self) {
        debug!("resetting {} channels", self.filters.len());
        for f in &mut self.filters {
            f.reset();
        }
    }

    fn check_frame(&self, values: &[f64]) -> Result<(), FilterError> {
        if values.len() != self.filters.len() {
            return Err(FilterError::ChannelCountMismatch {
                expected: self.filters.len(),
                got: values.len(),
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive() -> FilterConfig {
        FilterConfig {
            alpha: 0.5,
            beta: 0.1,
            ..FilterConfig::default()
        }
    }

    /// Each channel keeps its own state: feeding channel 0 leaves channel 1
    /// exactly as it was built.
    #[test]
    fn test_channels_are_independent() {
        let mut bank = FilterBank::new(2, &permissive()).unwrap();

        let out = bank.update(0, Sample::new(1.0, 10.0)).unwrap();

        assert!((out.value - 5.0).abs() < 1e-9);
        let untouched = bank.channel(1).unwrap();
        assert_eq!(untouched.last_sample(), Sample::new(0.0, 0.0));
        assert_eq!(untouched.last_derivative(), 0.0);
    }

    /// A frame produces one estimate per channel, in channel order.
    #[test]
    fn test_update_frame() {
        let mut bank = FilterBank::new(3, &permissive()).unwrap();

        let out = bank.update_frame(1.0, &[10.0, 20.0, -4.0]).unwrap();

        let values: Vec<f64> = out.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5.0, 10.0, -2.0]);
        assert!(out.iter().all(|s| s.time == 1.0));
    }

    #[test]
    fn test_frame_width_must_match() {
        let mut bank = FilterBank::new(3, &permissive()).unwrap();

        assert_eq!(
            bank.update_frame(1.0, &[1.0, 2.0]),
            Err(FilterError::ChannelCountMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_unknown_channel() {
        let mut bank = FilterBank::new(2, &permissive()).unwrap();

        assert_eq!(
            bank.update(5, Sample::new(1.0, 1.0)),
            Err(FilterError::UnknownChannel {
                channel: 5,
                channels: 2
            })
        );
    }

    /// A strict bank refuses bad gains at construction and bad samples at
    /// update time; a permissive one accepts both.
    #[test]
    fn test_strict_bank() {
        let bad_gains = FilterConfig {
            alpha: 1.5,
            strict: true,
            ..FilterConfig::default()
        };
        assert!(FilterBank::new(3, &bad_gains).is_err());

        let strict = FilterConfig {
            strict: true,
            ..permissive()
        };
        let mut bank = FilterBank::new(1, &strict).unwrap();
        assert!(matches!(
            bank.update(0, Sample::new(1.0, f64::NAN)),
            Err(FilterError::NonFiniteSample(_))
        ));
        assert!(bank.update_frame(1.0, &[f64::INFINITY]).is_err());

        let mut loose = FilterBank::new(1, &permissive()).unwrap();
        assert!(loose.update(0, Sample::new(1.0, f64::NAN)).unwrap().value.is_nan());
    }

    /// A strict frame with one bad value is refused as a whole; retrying
    /// with a corrected frame filters every channel normally.
    #[test]
    fn test_strict_frame_is_all_or_nothing() {
        let strict = FilterConfig {
            strict: true,
            ..permissive()
        };
        let mut bank = FilterBank::new(3, &strict).unwrap();

        assert!(matches!(
            bank.update_frame(1.0, &[10.0, 20.0, f64::NAN]),
            Err(FilterError::NonFiniteSample(_))
        ));
        for i in 0..bank.len() {
            assert_eq!(
                bank.channel(i).unwrap().last_sample(),
                Sample::new(0.0, 0.0),
                "Channel {i} should be untouched by a rejected frame"
            );
        }

        let out = bank.update_frame(1.0, &[10.0, 20.0, 30.0]).unwrap();
        let values: Vec<f64> = out.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5.0, 10.0, 15.0]);
    }

    /// A strict bank refuses samples older than a channel's last accepted
    /// one, through both single-channel and frame updates.
    #[test]
    fn test_strict_bank_rejects_stale_time() {
        let strict = FilterConfig {
            strict: true,
            ..permissive()
        };
        let mut bank = FilterBank::new(2, &strict).unwrap();
        bank.update(1, Sample::new(2.0, 4.0)).unwrap();

        assert_eq!(
            bank.update(1, Sample::new(1.0, 4.0)),
            Err(FilterError::NonMonotonicTime { last: 2.0, got: 1.0 })
        );
        assert_eq!(
            bank.update_frame(1.5, &[1.0, 1.0]),
            Err(FilterError::NonMonotonicTime { last: 2.0, got: 1.5 })
        );
        assert_eq!(
            bank.channel(0).unwrap().last_sample(),
            Sample::new(0.0, 0.0),
            "Channel 0 should not take part of a rejected frame"
        );
    }

    /// Gain setters and reset reach every channel.
    #[test]
    fn test_broadcast_gains_and_reset() {
        let mut bank = FilterBank::new(2, &permissive()).unwrap();
        bank.update_frame(1.0, &[10.0, 20.0]).unwrap();

        bank.set_alpha(0.25);
        bank.set_beta(0.05);
        bank.reset();

        for i in 0..bank.len() {
            let f = bank.channel(i).unwrap();
            assert_eq!(f.alpha(), 0.25);
            assert_eq!(f.beta(), 0.05);
            assert_eq!(f.last_sample(), Sample::new(0.0, 0.0));
            assert_eq!(f.last_derivative(), 0.0);
        }
    }

    /// A bank built from hand-made filters uses each filter's own gains.
    #[test]
    fn test_from_filters() {
        let mut bank = FilterBank::from_filters(vec![
            AlphaBetaFilter::new(1.0, 0.0),
            AlphaBetaFilter::new(0.0, 0.0),
        ]);
        assert!(!bank.is_empty());

        let out = bank.update_all(1.0, &[8.0, 8.0]).unwrap();

        assert_eq!(out[0].value, 8.0);
        assert_eq!(out[1].value, 0.0);
    }
}
