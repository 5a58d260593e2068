//! Value at Risk (VaR) calculations.
//!
//! VaR estimates the potential loss over a specified time horizon
//! at a given confidence level. The estimate is reported as a
//! non-negative loss magnitude on the return scale (e.g. `0.02` means
//! a 2% loss is expected to be exceeded with probability `1 - alpha`).

mod historical;
mod parametric;

pub use historical::historical_var;
pub use parametric::parametric_normal_var;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RiskError;

/// Minimum number of finite observations required for estimation.
pub const MIN_OBSERVATIONS: usize = 30;

/// Value at Risk result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaRResult {
    /// Method used for calculation
    pub method: VaRMethod,
    /// Confidence level (e.g., 0.99 for 99%)
    pub alpha: f64,
    /// Time horizon in periods
    pub horizon: u32,
    /// The VaR value (non-negative loss magnitude on the return scale)
    pub var: f64,
    /// Number of finite observations used
    pub sample_size: usize,
}

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaRMethod {
    /// Historical simulation (empirical quantile)
    Historical,
    /// Parametric with a normal distribution assumption
    ParametricNormal,
}

impl std::fmt::Display for VaRMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaRMethod::Historical => write!(f, "historical"),
            VaRMethod::ParametricNormal => write!(f, "parametric_normal"),
        }
    }
}

impl FromStr for VaRMethod {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "historical" => Ok(VaRMethod::Historical),
            "parametric_normal" => Ok(VaRMethod::ParametricNormal),
            other => Err(RiskError::InvalidInput(format!(
                "unknown VaR method: {other} (expected \"historical\" or \"parametric_normal\")"
            ))),
        }
    }
}

impl std::fmt::Display for VaRResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.1}%, {}p, {}): {:.4}%",
            self.alpha * 100.0,
            self.horizon,
            self.method,
            self.var * 100.0
        )
    }
}

/// Compute a single VaR estimate from a realized-returns sample.
///
/// Non-finite values (NaN, ±Inf) are dropped before any statistic is
/// computed; the filtered sample must still contain at least
/// [`MIN_OBSERVATIONS`] values. The single-period estimate is scaled to
/// `horizon` periods via square-root-of-time, and the result is floored
/// at zero (a quantile implying an expected gain reports zero risk).
///
/// # Arguments
///
/// * `returns` - Arithmetic returns, one per period
/// * `alpha` - Confidence level, must satisfy `0.5 < alpha < 1.0`
/// * `horizon` - Number of periods (>= 1)
/// * `method` - Estimation method
///
/// # Errors
///
/// * [`RiskError::InvalidInput`] for `alpha` outside `(0.5, 1.0)` or
///   `horizon < 1`
/// * [`RiskError::InsufficientData`] when fewer than [`MIN_OBSERVATIONS`]
///   finite observations remain after filtering
pub fn compute_var(
    returns: &[f64],
    alpha: f64,
    horizon: u32,
    method: VaRMethod,
) -> Result<VaRResult, RiskError> {
    if !alpha.is_finite() || alpha <= 0.5 || alpha >= 1.0 {
        return Err(RiskError::InvalidInput(format!(
            "alpha must be in (0.5, 1.0), got {alpha}"
        )));
    }
    if horizon < 1 {
        return Err(RiskError::InvalidInput(
            "horizon must be at least 1".to_string(),
        ));
    }

    // Drop NaN/Inf before the length check; short-after-filtering is an error.
    let clean: Vec<f64> = returns.iter().copied().filter(|r| r.is_finite()).collect();
    if clean.len() < MIN_OBSERVATIONS {
        return Err(RiskError::InsufficientData(format!(
            "returns too short: need at least {MIN_OBSERVATIONS} finite observations, got {}",
            clean.len()
        )));
    }

    let single_period = match method {
        VaRMethod::Historical => historical_var(&clean, alpha)?,
        VaRMethod::ParametricNormal => parametric_normal_var(&clean, alpha)?,
    };

    Ok(VaRResult {
        method,
        alpha,
        horizon,
        var: single_period * f64::from(horizon).sqrt(),
        sample_size: clean.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn spread_returns(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 - n as f64 / 2.0) / 1000.0).collect()
    }

    #[test]
    fn test_degenerate_variance_reports_zero() {
        let zeros = vec![0.0; 1000];
        let result = compute_var(&zeros, 0.99, 1, VaRMethod::ParametricNormal).unwrap();
        assert_eq!(result.var, 0.0);
        assert_eq!(result.sample_size, 1000);
    }

    #[test]
    fn test_minimum_sample_enforced() {
        assert!(matches!(
            compute_var(&[0.0; 10], 0.99, 1, VaRMethod::Historical),
            Err(RiskError::InsufficientData(_))
        ));
        assert!(compute_var(&[0.0; 30], 0.99, 1, VaRMethod::Historical).is_ok());
    }

    #[test]
    fn test_nan_filtered_before_length_check() {
        // 34 values of which 5 are non-finite: only 29 usable
        let mut returns = vec![0.001; 29];
        returns.extend([f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::NAN]);
        assert!(compute_var(&returns, 0.99, 1, VaRMethod::Historical).is_err());

        // One more finite value crosses the threshold
        returns.push(-0.002);
        let result = compute_var(&returns, 0.99, 1, VaRMethod::Historical).unwrap();
        assert_eq!(result.sample_size, 30);
    }

    #[test]
    fn test_alpha_bounds() {
        let returns = spread_returns(100);
        assert!(compute_var(&returns, 0.4, 1, VaRMethod::Historical).is_err());
        assert!(compute_var(&returns, 0.5, 1, VaRMethod::Historical).is_err());
        assert!(compute_var(&returns, 1.0, 1, VaRMethod::Historical).is_err());
        assert!(compute_var(&returns, f64::NAN, 1, VaRMethod::Historical).is_err());
    }

    #[test]
    fn test_horizon_validation() {
        let returns = spread_returns(100);
        assert!(compute_var(&returns, 0.99, 0, VaRMethod::Historical).is_err());
    }

    #[test]
    fn test_horizon_scaling() {
        let returns = spread_returns(100);
        for method in [VaRMethod::Historical, VaRMethod::ParametricNormal] {
            let var_1 = compute_var(&returns, 0.99, 1, method).unwrap().var;
            let var_4 = compute_var(&returns, 0.99, 4, method).unwrap().var;
            assert_relative_eq!(var_4, var_1 * 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_historical_quantile_sanity() {
        let mut rng = StdRng::seed_from_u64(42);
        let normal = Normal::new(0.0, 0.01).unwrap();
        let returns: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();

        let result = compute_var(&returns, 0.99, 1, VaRMethod::Historical).unwrap();
        assert!(result.var > 0.0 && result.var < 0.1);
        assert_eq!(result.sample_size, 10_000);
        // The 1% quantile of N(0, 0.01) is about -2.33%
        assert_relative_eq!(result.var, 0.0233, epsilon = 0.005);
    }

    #[test]
    fn test_parametric_close_to_historical_for_normal_data() {
        let mut rng = StdRng::seed_from_u64(7);
        let normal = Normal::new(0.0, 0.01).unwrap();
        let returns: Vec<f64> = (0..10_000).map(|_| normal.sample(&mut rng)).collect();

        let hist = compute_var(&returns, 0.99, 1, VaRMethod::Historical).unwrap();
        let para = compute_var(&returns, 0.99, 1, VaRMethod::ParametricNormal).unwrap();
        assert_relative_eq!(hist.var, para.var, epsilon = 0.005);
    }

    #[test]
    fn test_all_gains_floor_at_zero() {
        // Uniformly positive returns: the loss quantile implies a gain
        let returns: Vec<f64> = (1..=100).map(|i| i as f64 / 1000.0).collect();
        let result = compute_var(&returns, 0.99, 1, VaRMethod::Historical).unwrap();
        assert_eq!(result.var, 0.0);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            "historical".parse::<VaRMethod>().unwrap(),
            VaRMethod::Historical
        );
        assert_eq!(
            "parametric_normal".parse::<VaRMethod>().unwrap(),
            VaRMethod::ParametricNormal
        );
        assert!("monte_carlo".parse::<VaRMethod>().is_err());
    }

    proptest! {
        // VaR is a loss magnitude: never negative for any valid input.
        #[test]
        fn var_never_negative(
            returns in proptest::collection::vec(-0.2f64..0.2, 30..300),
            alpha in 0.51f64..0.999,
            horizon in 1u32..20,
        ) {
            for method in [VaRMethod::Historical, VaRMethod::ParametricNormal] {
                let result = compute_var(&returns, alpha, horizon, method).unwrap();
                prop_assert!(result.var >= 0.0);
            }
        }
    }
}
