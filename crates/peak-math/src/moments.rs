//! Sample moments: mean, unbiased variance, standard deviation.

use crate::error::{MathError, MathResult};

/// Arithmetic mean of a sample.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample.
pub fn sample_mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased (N-1) sample variance.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than two observations.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let mean = sample_mean(values)?;
    let sum_sq = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Unbiased sample standard deviation.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than two observations.
pub fn sample_std(values: &[f64]) -> MathResult<f64> {
    Ok(sample_variance(values)?.sqrt())
}
