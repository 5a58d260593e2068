//! Rolling re-evaluation of the core tests.
//!
//! Re-runs Kupiec, independence, and conditional coverage over sliding
//! windows to assess temporal stability of model calibration. The
//! aggregate metrics are the fraction of windows where all three core
//! tests pass and how often the verdict flips between adjacent windows.

use serde::{Deserialize, Serialize};

use crate::christoffersen::{conditional_coverage_test, independence_test};
use crate::exceedance::ExceedanceSequence;
use crate::kupiec::kupiec_pof_test;
use crate::types::TestStatus;
use crate::BacktestError;

/// Core-test outcome for a single window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingWindow {
    /// Index of the first observation in the window.
    pub start: usize,
    /// Exceedances inside the window.
    pub exceedances: usize,
    /// Kupiec POF status.
    pub kupiec: TestStatus,
    /// Christoffersen independence status.
    pub independence: TestStatus,
    /// Conditional coverage status.
    pub conditional_coverage: TestStatus,
    /// True when none of the three core tests rejected.
    pub all_pass: bool,
}

/// Aggregated rolling-evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingEvaluation {
    /// Window length in observations.
    pub window_size: usize,
    /// Step between successive window starts.
    pub step_size: usize,
    /// Per-window outcomes, in start order.
    pub windows: Vec<RollingWindow>,
    /// Fraction of windows with `all_pass`; 0.0 when no window fits.
    pub all_pass_rate: f64,
    /// Fraction of adjacent window pairs with the same `all_pass`
    /// outcome; 1.0 with fewer than two windows.
    pub verdict_stability: f64,
}

/// Runs the three core tests over sliding windows.
///
/// Windows start at `0, step_size, 2 * step_size, ...` and must fit
/// entirely inside the sequence; when not even one full window fits the
/// result reports zero windows evaluated rather than erroring.
///
/// # Errors
///
/// Returns [`BacktestError::InvalidInput`] for a zero window or step
/// size; per-window statistical edge cases degrade to insufficient-data
/// statuses inside the window records.
pub fn rolling_evaluation(
    exceedances: &ExceedanceSequence,
    alpha: f64,
    window_size: usize,
    step_size: usize,
) -> Result<RollingEvaluation, BacktestError> {
    if window_size == 0 {
        return Err(BacktestError::InvalidInput(
            "rolling window size must be at least 1".to_string(),
        ));
    }
    if step_size == 0 {
        return Err(BacktestError::InvalidInput(
            "rolling step size must be at least 1".to_string(),
        ));
    }

    let n = exceedances.len();
    let mut windows = Vec::new();
    let mut start = 0;
    while start + window_size <= n {
        let window = exceedances.window(start, window_size);

        let kupiec = kupiec_pof_test(&window, alpha)?.status;
        let independence = independence_test(&window)?.status;
        let conditional_coverage = conditional_coverage_test(&window, alpha)?.status;
        let all_pass = kupiec.is_non_rejecting()
            && independence.is_non_rejecting()
            && conditional_coverage.is_non_rejecting();

        windows.push(RollingWindow {
            start,
            exceedances: window.count(),
            kupiec,
            independence,
            conditional_coverage,
            all_pass,
        });
        start += step_size;
    }

    let all_pass_rate = if windows.is_empty() {
        0.0
    } else {
        windows.iter().filter(|w| w.all_pass).count() as f64 / windows.len() as f64
    };

    let verdict_stability = if windows.len() < 2 {
        1.0
    } else {
        let stable = windows
            .windows(2)
            .filter(|pair| pair[0].all_pass == pair[1].all_pass)
            .count();
        stable as f64 / (windows.len() - 1) as f64
    };

    tracing::debug!(
        windows = windows.len(),
        all_pass_rate,
        verdict_stability,
        "rolling evaluation complete"
    );

    Ok(RollingEvaluation {
        window_size,
        step_size,
        windows,
        all_pass_rate,
        verdict_stability,
    })
}
