//! Distribution helpers backed by `statrs`.
//!
//! These wrappers are the only place the suite touches a distribution
//! backend; callers get plain functions with validated arguments.

use statrs::distribution::{Binomial, ChiSquared, ContinuousCDF, DiscreteCDF, Normal};

use crate::error::{MathError, MathResult};

/// Standard-normal inverse CDF (quantile function).
///
/// # Errors
///
/// Returns [`MathError::ProbabilityOutOfRange`] for `p` outside `(0, 1)`.
pub fn normal_inverse_cdf(p: f64) -> MathResult<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return Err(MathError::ProbabilityOutOfRange {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }

    let standard_normal = Normal::new(0.0, 1.0).map_err(|e| MathError::Distribution {
        reason: e.to_string(),
    })?;
    Ok(standard_normal.inverse_cdf(p))
}

/// Survival function `P(X > x)` of the chi-squared distribution.
///
/// Used to turn likelihood-ratio statistics into p-values.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] for non-positive degrees of freedom
/// or a non-finite statistic.
pub fn chi_squared_survival(x: f64, df: f64) -> MathResult<f64> {
    if df <= 0.0 || !df.is_finite() {
        return Err(MathError::invalid_input(format!(
            "degrees of freedom must be positive, got {df}"
        )));
    }
    if !x.is_finite() {
        return Err(MathError::invalid_input("statistic must be finite"));
    }
    if x <= 0.0 {
        return Ok(1.0);
    }

    let chi2 = ChiSquared::new(df).map_err(|e| MathError::Distribution {
        reason: e.to_string(),
    })?;
    Ok(1.0 - chi2.cdf(x))
}

/// Cumulative binomial probability `P(X <= k)` for `X ~ Binomial(n, p)`.
///
/// # Errors
///
/// Returns [`MathError::ProbabilityOutOfRange`] for `p` outside `[0, 1]`
/// and [`MathError::InvalidInput`] when `k > n`.
pub fn binomial_cdf(k: u64, n: u64, p: f64) -> MathResult<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(MathError::ProbabilityOutOfRange {
            value: p,
            min: 0.0,
            max: 1.0,
        });
    }
    if k > n {
        return Err(MathError::invalid_input(format!(
            "k ({k}) exceeds number of trials ({n})"
        )));
    }

    let binomial = Binomial::new(p, n).map_err(|e| MathError::Distribution {
        reason: e.to_string(),
    })?;
    Ok(binomial.cdf(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_inverse_cdf_known_values() {
        assert_relative_eq!(
            normal_inverse_cdf(0.01).unwrap(),
            -2.3263478740,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            normal_inverse_cdf(0.975).unwrap(),
            1.9599639845,
            epsilon = 1e-6
        );
        assert_relative_eq!(normal_inverse_cdf(0.5).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normal_inverse_cdf_rejects_bounds() {
        assert!(normal_inverse_cdf(0.0).is_err());
        assert!(normal_inverse_cdf(1.0).is_err());
        assert!(normal_inverse_cdf(f64::NAN).is_err());
    }

    #[test]
    fn test_chi_squared_survival_critical_value() {
        // The 5% critical value for 1 d.o.f. is 3.8415
        let p = chi_squared_survival(3.841459, 1.0).unwrap();
        assert_relative_eq!(p, 0.05, epsilon = 1e-4);

        // And 5.9915 for 2 d.o.f.
        let p = chi_squared_survival(5.991465, 2.0).unwrap();
        assert_relative_eq!(p, 0.05, epsilon = 1e-4);
    }

    #[test]
    fn test_chi_squared_survival_at_zero() {
        assert_relative_eq!(chi_squared_survival(0.0, 1.0).unwrap(), 1.0);
        assert_relative_eq!(chi_squared_survival(-5.0, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_binomial_cdf_basel_window() {
        // Basel window: 250 trials at 1% exceedance rate
        let p4 = binomial_cdf(4, 250, 0.01).unwrap();
        let p9 = binomial_cdf(9, 250, 0.01).unwrap();
        assert!(p4 > 0.85 && p4 < 0.93);
        assert!(p9 > 0.999);
        assert!(p9 > p4);
    }

    #[test]
    fn test_binomial_cdf_rejects_bad_args() {
        assert!(binomial_cdf(5, 3, 0.5).is_err());
        assert!(binomial_cdf(1, 10, 1.5).is_err());
    }
}
