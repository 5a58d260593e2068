//! Backtest suite orchestration and verdict aggregation.

use serde::{Deserialize, Serialize};

use crate::basel::{basel_traffic_light, TrafficLight, TrafficLightResult};
use crate::christoffersen::{conditional_coverage_test, independence_test};
use crate::duration::{duration_diagnostic, DurationDiagnostic};
use crate::exceedance::ExceedanceSequence;
use crate::kupiec::kupiec_pof_test;
use crate::rolling::{rolling_evaluation, RollingEvaluation};
use crate::types::TestResult;
use crate::BacktestError;

/// Default rolling window length.
pub const DEFAULT_ROLLING_WINDOW: usize = 250;

/// Default rolling step.
pub const DEFAULT_ROLLING_STEP: usize = 50;

/// Configuration for a backtest suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Confidence level shared by all tests (e.g. 0.99).
    pub alpha: f64,
    /// Attach the duration diagnostic (informational).
    pub enable_duration_diagnostic: bool,
    /// Attach the rolling evaluation (informational).
    pub enable_rolling: bool,
    /// Rolling window length in observations.
    pub rolling_window_size: usize,
    /// Step between successive rolling windows.
    pub rolling_step_size: usize,
}

impl SuiteConfig {
    /// Creates a configuration with core tests only.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            enable_duration_diagnostic: false,
            enable_rolling: false,
            rolling_window_size: DEFAULT_ROLLING_WINDOW,
            rolling_step_size: DEFAULT_ROLLING_STEP,
        }
    }

    /// Enables the duration diagnostic.
    #[must_use]
    pub fn with_duration_diagnostic(mut self) -> Self {
        self.enable_duration_diagnostic = true;
        self
    }

    /// Enables the rolling evaluation with the given window and step.
    #[must_use]
    pub fn with_rolling(mut self, window_size: usize, step_size: usize) -> Self {
        self.enable_rolling = true;
        self.rolling_window_size = window_size;
        self.rolling_step_size = step_size;
        self
    }
}

/// Aggregated verdict for one suite invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestVerdict {
    /// Confidence level the tests were run at.
    pub alpha: f64,
    /// Number of evaluation dates.
    pub observations: usize,
    /// Number of exceedances.
    pub violations: usize,
    /// Kupiec proportion-of-failures test.
    pub kupiec: TestResult,
    /// Christoffersen independence test.
    pub independence: TestResult,
    /// Christoffersen conditional coverage test.
    pub conditional_coverage: TestResult,
    /// Basel traffic-light classification.
    pub basel: TrafficLightResult,
    /// Duration diagnostic, when enabled.
    pub duration: Option<DurationDiagnostic>,
    /// Rolling evaluation, when enabled.
    pub rolling: Option<RollingEvaluation>,
    /// True iff no core test rejected and the Basel band is not RED.
    pub overall_pass: bool,
}

/// Runs the configured battery of backtests on an exceedance sequence.
///
/// The three core tests (Kupiec, independence, conditional coverage) and
/// the Basel band decide `overall_pass`; duration and rolling results are
/// attached for reporting but never move the verdict. Statistical edge
/// cases degrade to insufficient-data statuses inside the verdict.
///
/// # Errors
///
/// Returns [`BacktestError::InvalidInput`] for `alpha` outside
/// `(0.5, 1.0)` or a zero rolling window/step; never errors on the
/// statistical content of the sequence itself.
pub fn run_backtest_suite(
    exceedances: &ExceedanceSequence,
    config: &SuiteConfig,
) -> Result<BacktestVerdict, BacktestError> {
    if !config.alpha.is_finite() || config.alpha <= 0.5 || config.alpha >= 1.0 {
        return Err(BacktestError::InvalidInput(format!(
            "confidence level must be in (0.5, 1.0), got {}",
            config.alpha
        )));
    }

    let kupiec = kupiec_pof_test(exceedances, config.alpha)?;
    let independence = independence_test(exceedances)?;
    let conditional_coverage = conditional_coverage_test(exceedances, config.alpha)?;
    let basel = basel_traffic_light(exceedances, config.alpha)?;

    let duration = config
        .enable_duration_diagnostic
        .then(|| duration_diagnostic(exceedances, config.alpha));

    let rolling = if config.enable_rolling {
        Some(rolling_evaluation(
            exceedances,
            config.alpha,
            config.rolling_window_size,
            config.rolling_step_size,
        )?)
    } else {
        None
    };

    let overall_pass = kupiec.status.is_non_rejecting()
        && independence.status.is_non_rejecting()
        && conditional_coverage.status.is_non_rejecting()
        && basel.band != TrafficLight::Red;

    tracing::info!(
        observations = exceedances.len(),
        violations = exceedances.count(),
        overall_pass,
        "backtest suite complete"
    );

    Ok(BacktestVerdict {
        alpha: config.alpha,
        observations: exceedances.len(),
        violations: exceedances.count(),
        kupiec,
        independence,
        conditional_coverage,
        basel,
        duration,
        rolling,
        overall_pass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TestStatus;
    use proptest::prelude::*;

    fn sequence_with_exceedances(n: usize, positions: &[usize]) -> ExceedanceSequence {
        let mut indicators = vec![false; n];
        for &p in positions {
            indicators[p] = true;
        }
        ExceedanceSequence::from_indicators(indicators)
    }

    #[test]
    fn test_well_calibrated_sequence_passes() {
        let seq = sequence_with_exceedances(250, &[40, 170]);
        let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();

        assert!(verdict.overall_pass);
        assert_eq!(verdict.observations, 250);
        assert_eq!(verdict.violations, 2);
        assert_eq!(verdict.kupiec.status, TestStatus::Pass);
        assert_eq!(verdict.basel.band, TrafficLight::Green);
        assert!(verdict.duration.is_none());
        assert!(verdict.rolling.is_none());
    }

    #[test]
    fn test_red_band_blocks_overall_pass() {
        // 12 exceedances over 250: RED zone even if spread out
        let positions: Vec<usize> = (0..12).map(|i| i * 20).collect();
        let seq = sequence_with_exceedances(250, &positions);
        let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();

        assert_eq!(verdict.basel.band, TrafficLight::Red);
        assert!(!verdict.overall_pass);
    }

    #[test]
    fn test_clustering_blocks_overall_pass() {
        // Correct count, but all exceedances adjacent
        let positions: Vec<usize> = (500..510).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();

        assert_eq!(verdict.kupiec.status, TestStatus::Pass);
        assert_eq!(verdict.independence.status, TestStatus::Fail);
        assert!(!verdict.overall_pass);
    }

    #[test]
    fn test_optional_sections_attached() {
        let positions: Vec<usize> = (0..10).map(|i| i * 100).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let config = SuiteConfig::new(0.99)
            .with_duration_diagnostic()
            .with_rolling(250, 250);
        let verdict = run_backtest_suite(&seq, &config).unwrap();

        assert!(verdict.duration.is_some());
        let rolling = verdict.rolling.unwrap();
        assert_eq!(rolling.windows.len(), 4);
    }

    #[test]
    fn test_insufficient_core_test_does_not_block() {
        // One exceedance over 100: independence is not computable, but
        // the model is not rejected by what can be computed
        let seq = sequence_with_exceedances(100, &[42]);
        let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();

        assert_eq!(verdict.independence.status, TestStatus::InsufficientData);
        assert_eq!(verdict.kupiec.status, TestStatus::Pass);
        assert!(verdict.overall_pass);
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let seq = sequence_with_exceedances(250, &[]);
        assert!(run_backtest_suite(&seq, &SuiteConfig::new(0.4)).is_err());
        assert!(run_backtest_suite(&seq, &SuiteConfig::new(1.0)).is_err());
    }

    proptest! {
        // Any indicator sequence yields a structured verdict, and the
        // overall flag agrees with the core-test statuses and the band.
        #[test]
        fn suite_never_errors_on_any_sequence(
            indicators in proptest::collection::vec(any::<bool>(), 0..600),
        ) {
            let seq = ExceedanceSequence::from_indicators(indicators);
            let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();

            let expected = verdict.kupiec.status.is_non_rejecting()
                && verdict.independence.status.is_non_rejecting()
                && verdict.conditional_coverage.status.is_non_rejecting()
                && verdict.basel.band != TrafficLight::Red;
            prop_assert_eq!(verdict.overall_pass, expected);
        }
    }

    #[test]
    fn test_determinism() {
        let positions: Vec<usize> = (0..10).map(|i| i * 97).collect();
        let seq = sequence_with_exceedances(1000, &positions);
        let config = SuiteConfig::new(0.99)
            .with_duration_diagnostic()
            .with_rolling(250, 50);

        let v1 = run_backtest_suite(&seq, &config).unwrap();
        let v2 = run_backtest_suite(&seq, &config).unwrap();
        assert_eq!(
            serde_json::to_string(&v1).unwrap(),
            serde_json::to_string(&v2).unwrap()
        );
    }
}
