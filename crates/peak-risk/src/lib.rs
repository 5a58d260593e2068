//! # peak-risk
//!
//! Value-at-Risk estimation for the Peak risk validation suite.
//!
//! This crate computes a single loss-at-confidence estimate from a
//! realized-returns sample:
//!
//! - **Historical**: empirical quantile of the return distribution
//! - **Parametric-Normal**: mean/variance fit with a normal quantile
//!
//! VaR is always reported as a non-negative loss magnitude and scaled to
//! the requested horizon via square-root-of-time.
//!
//! ## Example
//!
//! ```
//! use peak_risk::var::{compute_var, VaRMethod};
//!
//! let returns: Vec<f64> = (0..100).map(|i| (i as f64 - 50.0) / 1000.0).collect();
//! let result = compute_var(&returns, 0.99, 1, VaRMethod::Historical).unwrap();
//! assert!(result.var >= 0.0);
//! assert_eq!(result.sample_size, 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod var;
mod error;

pub use error::RiskError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::var::{compute_var, VaRMethod, VaRResult, MIN_OBSERVATIONS};
    pub use crate::RiskError;
}
