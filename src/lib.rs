//! # Alpha-Beta Filter: Smoothing Raw Sensor Channels
//!
//! A discrete-time alpha-beta tracking filter for noisy scalar
//! measurements taken at irregular timestamps. For every raw sample it
//! returns a smoothed estimate of the value, and it keeps a running
//! estimate of the value's rate of change. Inertial-navigation pipelines
//! use one per sensor channel to denoise readings before integrating them.
//!
//! ## Signal Flow
//!
//! ```text
//!              ┌──────────────────────────────────────────────┐
//!              │                 FILTER STATE                 │
//!              │   last estimate (t, x)     rate estimate v   │
//!              └───────┬──────────────────────────┬───────────┘
//!                      │                          │
//!                      ▼                          ▼
//! raw (t', z) ──► dt = t' - t ──► x_pred = x + v * dt
//!                                        │
//!                                        ▼
//!                              r = z - x_pred
//!                                        │
//!                    ┌───────────────────┴──────────────────┐
//!                    ▼                                      ▼
//!       x = x_pred + alpha * r                  v = v + beta * r / dt
//!                    │                                      │
//!                    └──────────► commit (t', x), v ◄───────┘
//!                                        │
//!                                        ▼
//!                              estimate (t', x) ──► Output
//! ```
//!
//! ## Example
//!
//! ```
//! use alpha_beta_filter::{AlphaBetaFilter, Sample};
//!
//! let mut filter = AlphaBetaFilter::new(0.5, 0.1);
//! let estimate = filter.update(Sample::new(1.0, 10.0));
//! assert_eq!(estimate, Sample::new(1.0, 5.0));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod sample;

pub use config::FilterConfig;
pub use error::{FilterError, Gain};
pub use filter::alpha_beta::{check_gains, AlphaBetaFilter};
pub use filter::bank::FilterBank;
pub use filter::Filter;
pub use sample::Sample;
