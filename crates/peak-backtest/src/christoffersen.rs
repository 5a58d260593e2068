//! Christoffersen independence and conditional coverage tests.
//!
//! The independence test fits a first-order Markov chain to the
//! exceedance indicators and compares it against the unconditional
//! exceedance rate; clustering shows up as a transition probability
//! `P(exceed | exceeded yesterday)` above the unconditional rate. The
//! conditional coverage test adds the Kupiec statistic to test correct
//! coverage and independence jointly.

use peak_math::distributions::chi_squared_survival;

use crate::exceedance::ExceedanceSequence;
use crate::kupiec::{kupiec_lr_statistic, CHI2_CRITICAL_1DF};
use crate::types::TestResult;
use crate::BacktestError;

/// Chi-squared critical value for 2 d.o.f. at the 5% significance level.
pub const CHI2_CRITICAL_2DF: f64 = 5.991465;

/// Counts of consecutive indicator transitions (prev state -> current).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransitionCounts {
    n00: usize,
    n01: usize,
    n10: usize,
    n11: usize,
}

impl TransitionCounts {
    fn from_sequence(exceedances: &ExceedanceSequence) -> Self {
        let mut counts = Self {
            n00: 0,
            n01: 0,
            n10: 0,
            n11: 0,
        };
        for pair in exceedances.as_slice().windows(2) {
            match (pair[0], pair[1]) {
                (false, false) => counts.n00 += 1,
                (false, true) => counts.n01 += 1,
                (true, false) => counts.n10 += 1,
                (true, true) => counts.n11 += 1,
            }
        }
        counts
    }

    fn total(&self) -> usize {
        self.n00 + self.n01 + self.n10 + self.n11
    }
}

/// Christoffersen independence likelihood-ratio statistic.
///
/// Returns `None` when the sequence carries fewer than two exceedances:
/// with at most one visit to the exceedance state the transition matrix
/// is unidentified and the test has no power.
fn independence_lr_statistic(exceedances: &ExceedanceSequence) -> Option<f64> {
    if exceedances.count() < 2 {
        return None;
    }

    let counts = TransitionCounts::from_sequence(exceedances);
    let total = counts.total();
    if total == 0 {
        return None;
    }

    let from_quiet = counts.n00 + counts.n01;
    let from_exceed = counts.n10 + counts.n11;
    let exceed_transitions = counts.n01 + counts.n11;

    // Unconditional exceedance probability over all transitions
    let pi = exceed_transitions as f64 / total as f64;
    if pi <= 0.0 || pi >= 1.0 {
        return None;
    }

    // Null: both rows of the transition matrix share probability pi
    let ll_null = (total - exceed_transitions) as f64 * (1.0 - pi).ln()
        + exceed_transitions as f64 * pi.ln();

    // Alternative: row-specific probabilities, zero-count terms drop out
    let mut ll_alt = 0.0;
    if from_quiet > 0 {
        let pi01 = counts.n01 as f64 / from_quiet as f64;
        if counts.n00 > 0 {
            ll_alt += counts.n00 as f64 * (1.0 - pi01).ln();
        }
        if counts.n01 > 0 {
            ll_alt += counts.n01 as f64 * pi01.ln();
        }
    }
    if from_exceed > 0 {
        let pi11 = counts.n11 as f64 / from_exceed as f64;
        if counts.n10 > 0 {
            ll_alt += counts.n10 as f64 * (1.0 - pi11).ln();
        }
        if counts.n11 > 0 {
            ll_alt += counts.n11 as f64 * pi11.ln();
        }
    }

    Some((2.0 * (ll_alt - ll_null)).max(0.0))
}

/// Runs the Christoffersen independence test.
///
/// # Errors
///
/// Only propagates backend failures from the chi-squared p-value;
/// degenerate sequences degrade to an insufficient-data result.
pub fn independence_test(
    exceedances: &ExceedanceSequence,
) -> Result<TestResult, BacktestError> {
    match independence_lr_statistic(exceedances) {
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

/// Runs the Christoffersen conditional coverage test.
///
/// The joint statistic `LR_cc = LR_pof + LR_ind` is chi-squared with two
/// degrees of freedom; it rejects when either the coverage is wrong or
/// the exceedances cluster. Degrades to insufficient data when either
/// component does.
///
/// # Errors
///
/// Only propagates backend failures from the chi-squared p-value.
pub fn conditional_coverage_test(
    exceedances: &ExceedanceSequence,
    alpha: f64,
) -> Result<TestResult, BacktestError> {
    let pof = kupiec_lr_statistic(exceedances.count(), exceedances.len(), 1.0 - alpha);
    let ind = independence_lr_statistic(exceedances);

    match (pof, ind) {
        (Some(lr_pof), Some(lr_ind)) => {
            let statistic = lr_pof + lr_ind;
            let p_value = chi_squared_survival(statistic, 2.0)?;
            Ok(TestResult::from_statistic(
                statistic,
                p_value,
                2,
                CHI2_CRITICAL_2DF,
            ))
        }
        _ => Ok(TestResult::insufficient(2, CHI2_CRITICAL_2DF)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestStatus;
    use approx::assert_relative_eq;

    fn sequence_with_exceedances(n: usize, positions: &[usize]) -> ExceedanceSequence {
        let mut indicators = vec![false; n];
        for &p in positions {
            indicators[p] = true;
        }
        ExceedanceSequence::from_indicators(indicators)
    }

    #[test]
    fn test_transition_counts() {
        let seq = ExceedanceSequence::from_indicators(vec![false, true, true, false, false]);
        let counts = TransitionCounts::from_sequence(&seq);
        assert_eq!(
            counts,
            TransitionCounts {
                n00: 1,
                n01: 1,
                n10: 1,
                n11: 1,
            }
        );
    }

    #[test]
    fn test_spread_exceedances_pass() {
        let positions: Vec<usize> = (0..10).map(|i| i * 100).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let result = independence_test(&seq).unwrap();
        assert_eq!(result.status, TestStatus::Pass);
    }

    #[test]
    fn test_clustered_exceedances_fail() {
        // 10 exceedances in one tight run: heavy clustering
        let positions: Vec<usize> = (100..110).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let result = independence_test(&seq).unwrap();
        assert_eq!(result.status, TestStatus::Fail);
        assert!(result.statistic.unwrap() > CHI2_CRITICAL_1DF);
    }

    #[test]
    fn test_zero_exceedances_insufficient() {
        let seq = sequence_with_exceedances(250, &[]);
        let result = independence_test(&seq).unwrap();
        assert_eq!(result.status, TestStatus::InsufficientData);
    }

    #[test]
    fn test_single_exceedance_insufficient() {
        let seq = sequence_with_exceedances(250, &[100]);
        let result = independence_test(&seq).unwrap();
        assert_eq!(result.status, TestStatus::InsufficientData);
    }

    #[test]
    fn test_conditional_coverage_combines_components() {
        let positions: Vec<usize> = (0..10).map(|i| i * 100).collect();
        let seq = sequence_with_exceedances(1000, &positions);

        let lr_pof = kupiec_lr_statistic(seq.count(), seq.len(), 0.01).unwrap();
        let lr_ind = independence_lr_statistic(&seq).unwrap();
        let cc = conditional_coverage_test(&seq, 0.99).unwrap();

        assert_relative_eq!(cc.statistic.unwrap(), lr_pof + lr_ind, epsilon = 1e-12);
        assert_eq!(cc.df, 2);
        assert_eq!(cc.status, TestStatus::Pass);
    }

    #[test]
    fn test_conditional_coverage_insufficient_with_one_exceedance() {
        let seq = sequence_with_exceedances(250, &[100]);
        let result = conditional_coverage_test(&seq, 0.99).unwrap();
        assert_eq!(result.status, TestStatus::InsufficientData);
    }

    #[test]
    fn test_conditional_coverage_rejects_clustering() {
        let positions: Vec<usize> = (100..110).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let result = conditional_coverage_test(&seq, 0.99).unwrap();
        assert_eq!(result.status, TestStatus::Fail);
    }
}
