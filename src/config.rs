//! # Filter Configuration
//!
//! The settings a pipeline chooses for each filter it builds. Each one has:
//!
//! - A **name** matching the key used in serialized config documents.
//! - A **recommended range**. It is only enforced when `strict` is set.
//! - A **default value**, used for any key the document leaves out.
//!
//! ## Tuning Alpha and Beta
//!
//! The two gains trade noise rejection against lag. Lower gains average
//! over more samples, which gives smoother output but a slower response to
//! real changes. A common starting point is to pick `alpha` for the noise
//! level you can tolerate and then set `beta` well below it; `beta` close
//! to `alpha` makes the rate estimate jumpy and the value overshoot.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::filter::alpha_beta::{check_gains, AlphaBetaFilter};

/// Everything needed to build an [`AlphaBetaFilter`].
///
/// Missing keys fall back to [`FilterConfig::default`], so a document
/// containing only `{"alpha": 0.3}` is a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// **Alpha**: how far each estimate moves toward the measurement.
    ///
    /// Recommended range: (0, 1), exclusive.
    /// Default: 0.5, an even split between prediction and measurement.
    pub alpha: f64,

    /// **Beta**: how quickly the rate estimate follows the residuals.
    ///
    /// Recommended range: (0, 1), exclusive, and well below `alpha`.
    /// Default: 0.1.
    pub beta: f64,

    /// **Initial time**: the time origin the first `dt` is measured from,
    /// and the time `reset()` returns to.
    ///
    /// Default: 0.0. Set this to the sensor's first timestamp when its
    /// clock does not start at zero, otherwise the first update sees a huge
    /// `dt` and a correspondingly tiny rate correction.
    pub initial_time: f64,

    /// **Strict**: check the gains when building, and reject non-finite or
    /// out-of-order samples in a [`FilterBank`](crate::filter::bank::FilterBank).
    ///
    /// Default: false, which accepts every input.
    pub strict: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.1,
            initial_time: 0.0,
            strict: false,
        }
    }
}

impl FilterConfig {
    /// Build a filter from this config.
    ///
    /// Only fails when `strict` is set and a gain is outside (0, 1).
    pub fn build(&self) -> Result<AlphaBetaFilter, FilterError> {
        if self.strict {
            check_gains(self.alpha, self.beta)?;
        }

        Ok(AlphaBetaFilter::with_initial_time(
            self.alpha,
            self.beta,
            self.initial_time,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
