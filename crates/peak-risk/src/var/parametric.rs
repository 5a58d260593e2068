//! Parametric (normal) VaR calculation.

use crate::RiskError;
use peak_math::distributions::normal_inverse_cdf;
use peak_math::moments::{sample_mean, sample_std};

/// Single-period parametric-normal VaR.
///
/// Fits mean and unbiased standard deviation, then evaluates the normal
/// `(1 - alpha)`-quantile of the fitted distribution. A degenerate sample
/// (`sigma <= 0`, e.g. constant returns) reports zero risk rather than
/// propagating a division error.
pub fn parametric_normal_var(returns: &[f64], alpha: f64) -> Result<f64, RiskError> {
    let mu = sample_mean(returns)?;
    let sigma = sample_std(returns)?;

    if sigma <= 0.0 {
        return Ok(0.0);
    }

    let z = normal_inverse_cdf(1.0 - alpha)?;
    Ok((-(mu + z * sigma)).max(0.0))
}
