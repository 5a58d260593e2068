//! Error types for VaR estimation.

use thiserror::Error;

/// Errors that can occur during VaR estimation.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Invalid input parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for calculation
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Calculation failed
    #[error("calculation failed: {0}")]
    CalculationFailed(String),
}

impl From<peak_math::MathError> for RiskError {
    fn from(err: peak_math::MathError) -> Self {
        match err {
            peak_math::MathError::InsufficientData { .. } => {
                RiskError::InsufficientData(err.to_string())
            }
            _ => RiskError::CalculationFailed(err.to_string()),
        }
    }
}
