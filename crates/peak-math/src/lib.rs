//! # Peak Math
//!
//! Statistical primitives for the Peak risk validation suite.
//!
//! This crate provides:
//!
//! - **Moments**: Sample mean, unbiased variance and standard deviation
//! - **Quantiles**: Linear-interpolation empirical quantile estimation
//! - **Distributions**: Normal inverse CDF, chi-squared survival function,
//!   binomial tail probabilities (backed by `statrs`)
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Careful handling of degenerate samples
//! - **Determinism**: Pure functions, identical inputs give identical outputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod distributions;
pub mod error;
pub mod moments;
pub mod quantile;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::{binomial_cdf, chi_squared_survival, normal_inverse_cdf};
    pub use crate::error::{MathError, MathResult};
    pub use crate::moments::{sample_mean, sample_std, sample_variance};
    pub use crate::quantile::empirical_quantile;
}

pub use error::{MathError, MathResult};
