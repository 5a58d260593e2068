//! Shared result types for individual backtest sub-tests.

use serde::{Deserialize, Serialize};

/// Outcome of a single hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    /// Null hypothesis not rejected at the configured significance level.
    Pass,
    /// Null hypothesis rejected.
    Fail,
    /// The test statistic could not be computed for this sample.
    InsufficientData,
}

impl TestStatus {
    /// True when the test did not reject the null hypothesis.
    ///
    /// Insufficient data is treated as non-rejecting: a test that cannot
    /// be computed carries no evidence against the model.
    #[must_use]
    pub fn is_non_rejecting(self) -> bool {
        !matches!(self, TestStatus::Fail)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::InsufficientData => write!(f, "INSUFFICIENT DATA"),
        }
    }
}

/// A likelihood-ratio test result with its reference distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// LR statistic; `None` when the sample is degenerate.
    pub statistic: Option<f64>,
    /// P-value from the chi-squared reference distribution.
    pub p_value: Option<f64>,
    /// Degrees of freedom of the reference distribution.
    pub df: u32,
    /// Critical value at the configured significance level.
    pub critical_value: f64,
    /// Pass/fail verdict.
    pub status: TestStatus,
}

impl TestResult {
    /// Builds a result from a computed statistic, comparing it against
    /// the critical value.
    pub(crate) fn from_statistic(
        statistic: f64,
        p_value: f64,
        df: u32,
        critical_value: f64,
    ) -> Self {
        let status = if statistic > critical_value {
            TestStatus::Fail
        } else {
            TestStatus::Pass
        };
        Self {
            statistic: Some(statistic),
            p_value: Some(p_value),
            df,
            critical_value,
            status,
        }
    }

    /// Builds an insufficient-data result.
    pub(crate) fn insufficient(df: u32, critical_value: f64) -> Self {
        Self {
            statistic: None,
            p_value: None,
            df,
            critical_value,
            status: TestStatus::InsufficientData,
        }
    }
}
