//! Error types for statistical operations.

use thiserror::Error;

/// A specialized Result type for statistical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during statistical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Probability argument outside its valid range.
    #[error("Probability {value} is outside ({min}, {max})")]
    ProbabilityOutOfRange {
        /// The probability that was provided.
        value: f64,
        /// Lower bound (exclusive).
        min: f64,
        /// Upper bound (exclusive).
        max: f64,
    },

    /// Underlying distribution could not be constructed.
    #[error("Distribution error: {reason}")]
    Distribution {
        /// Description from the distribution backend.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
