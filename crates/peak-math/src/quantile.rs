//! Empirical quantile estimation.

use crate::error::{MathError, MathResult};

/// Empirical quantile with linear interpolation between order statistics.
///
/// Uses the standard linear-interpolation definition: for a sorted sample
/// `x_0 <= ... <= x_{n-1}` and probability `p`, the quantile sits at the
/// fractional rank `h = p * (n - 1)` and is interpolated between the two
/// surrounding order statistics.
///
/// # Arguments
///
/// * `values` - Sample values (need not be sorted)
/// * `p` - Probability in `[0, 1]`
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample and
/// [`MathError::ProbabilityOutOfRange`] for `p` outside `[0, 1]`.
pub fn empirical_quantile(values: &[f64], p: f64) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&p) || !p.is_finite() {
        return Err(MathError::ProbabilityOutOfRange {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let h = p * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }

    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}
