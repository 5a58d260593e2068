//! Duration-based clustering diagnostic.
//!
//! Under a well-specified VaR model exceedances arrive independently at
//! rate `p = 1 - alpha`, so the gaps between consecutive exceedances are
//! geometrically distributed with mean `1/p`. Gaps that are
//! significantly shorter than that point at volatility clustering the
//! model fails to capture. Informational only: the flag never moves the
//! overall verdict.

use serde::{Deserialize, Serialize};

use crate::exceedance::ExceedanceSequence;
use crate::types::TestStatus;

/// One-sided 5% z critical value for the clustering test.
const Z_CRITICAL_ONE_SIDED: f64 = 1.644854;

/// Minimum number of inter-exceedance gaps for the diagnostic.
pub const MIN_GAPS: usize = 2;

/// Result of the inter-exceedance duration diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationDiagnostic {
    /// Number of inter-exceedance gaps observed.
    pub gaps: usize,
    /// Observed mean gap, in observations.
    pub observed_mean: f64,
    /// Expected mean gap `1 / (1 - alpha)` under i.i.d. exceedances.
    pub expected_mean: f64,
    /// `observed_mean / expected_mean`; below 1 means gaps run short.
    pub duration_ratio: f64,
    /// True when gaps are statistically shorter than the geometric
    /// expectation (one-sided test at 5%).
    pub clustering: bool,
    /// Pass when no clustering is detected; insufficient data with
    /// fewer than [`MIN_GAPS`] gaps.
    pub status: TestStatus,
}

impl DurationDiagnostic {
    fn insufficient(gaps: usize, expected_mean: f64) -> Self {
        Self {
            gaps,
            observed_mean: 0.0,
            expected_mean,
            duration_ratio: 0.0,
            clustering: false,
            status: TestStatus::InsufficientData,
        }
    }
}

/// Computes the duration diagnostic for an exceedance sequence.
///
/// Gaps are the distances between consecutive exceedance positions;
/// at least [`MIN_GAPS`] gaps (three exceedances) are required.
#[must_use]
pub fn duration_diagnostic(exceedances: &ExceedanceSequence, alpha: f64) -> DurationDiagnostic {
    let p = 1.0 - alpha;
    let expected_mean = 1.0 / p;

    let positions = exceedances.positions();
    let gaps: Vec<f64> = positions
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64)
        .collect();

    if gaps.len() < MIN_GAPS {
        return DurationDiagnostic::insufficient(gaps.len(), expected_mean);
    }

    let observed_mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let duration_ratio = observed_mean / expected_mean;

    // Geometric variance (1-p)/p^2; z-test on the mean gap
    let geometric_std = ((1.0 - p).sqrt()) / p;
    let standard_error = geometric_std / (gaps.len() as f64).sqrt();
    let z = (observed_mean - expected_mean) / standard_error;
    let clustering = z < -Z_CRITICAL_ONE_SIDED;

    DurationDiagnostic {
        gaps: gaps.len(),
        observed_mean,
        expected_mean,
        duration_ratio,
        clustering,
        status: if clustering {
            TestStatus::Fail
        } else {
            TestStatus::Pass
        },
    }
}
