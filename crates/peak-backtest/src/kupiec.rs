//! Kupiec proportion-of-failures (POF) test.
//!
//! Tests the null hypothesis that the observed exceedance rate equals
//! the theoretical rate `1 - alpha` using a likelihood ratio that is
//! asymptotically chi-squared with one degree of freedom.

use peak_math::distributions::chi_squared_survival;

use crate::exceedance::ExceedanceSequence;
use crate::types::TestResult;
use crate::BacktestError;

/// Chi-squared critical value for 1 d.o.f. at the 5% significance level.
pub const CHI2_CRITICAL_1DF: f64 = 3.841459;

/// Kupiec POF likelihood-ratio statistic for `x` exceedances out of `n`
/// observations at expected rate `p`.
///
/// Uses the `0^0 = 1` convention: zero-count terms drop out of the
/// log-likelihoods, so `x = 0` and `x = n` are well-defined. Returns
/// `None` for an empty sample.
#[must_use]
pub fn kupiec_lr_statistic(x: usize, n: usize, p: f64) -> Option<f64> {
    if n == 0 || x > n {
        return None;
    }

    let n_f = n as f64;
    let x_f = x as f64;
    let misses = n_f - x_f;

    // Null log-likelihood at rate p
    let ll_null = misses * (1.0 - p).ln() + x_f * p.ln();

    // Alternative log-likelihood at the observed rate x/n
    let p_hat = x_f / n_f;
    let mut ll_alt = 0.0;
    if x < n {
        ll_alt += misses * (1.0 - p_hat).ln();
    }
    if x > 0 {
        ll_alt += x_f * p_hat.ln();
    }

    // Floating-point noise can push the LR marginally negative at x/n == p
    Some((2.0 * (ll_alt - ll_null)).max(0.0))
}

/// Runs the Kupiec POF test on an exceedance sequence.
///
/// # Errors
///
/// Only propagates backend failures from the chi-squared p-value; an
/// empty sequence degrades to an insufficient-data result.
pub fn kupiec_pof_test(
    exceedances: &ExceedanceSequence,
    alpha: f64,
) -> Result<TestResult, BacktestError> {
    let p = 1.0 - alpha;
    match kupiec_lr_statistic(exceedances.count(), exceedances.len(), p) {
        Some(statistic) => {
            let p_value = chi_squared_survival(statistic, 1.0)?;
            Ok(TestResult::from_statistic(
                statistic,
                p_value,
                1,
                CHI2_CRITICAL_1DF,
            ))
        }
        None => Ok(TestResult::insufficient(1, CHI2_CRITICAL_1DF)),
    }
}
