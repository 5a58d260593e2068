//! Error types for the backtest suite.
//!
//! Only configuration problems surface as errors; statistical edge cases
//! inside individual sub-tests degrade to an insufficient-data status in
//! the structured verdict instead.

use thiserror::Error;

/// Errors that can occur while configuring or running the backtest suite.
#[derive(Debug, Error)]
pub enum BacktestError {
    /// Invalid suite configuration
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Calculation failed
    #[error("calculation failed: {0}")]
    CalculationFailed(String),
}

impl From<peak_math::MathError> for BacktestError {
    fn from(err: peak_math::MathError) -> Self {
        BacktestError::CalculationFailed(err.to_string())
    }
}
