//! Exceedance indicator sequences.

use serde::{Deserialize, Serialize};

/// A sequence of exceedance indicators aligned 1:1 with evaluation dates.
///
/// `true` at position `t` means the realized loss on date `t` exceeded
/// the VaR forecast for that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceedanceSequence(Vec<bool>);

impl ExceedanceSequence {
    /// Wraps a pre-built indicator sequence.
    #[must_use]
    pub fn from_indicators(indicators: Vec<bool>) -> Self {
        Self(indicators)
    }

    /// Builds the sequence from paired realized returns and VaR forecasts.
    ///
    /// An exceedance occurs when the realized loss is strictly greater
    /// than the forecast: `-r_t > var_t`. The pairs are truncated to the
    /// shorter of the two series.
    #[must_use]
    pub fn from_forecasts(returns: &[f64], var_forecasts: &[f64]) -> Self {
        let indicators = returns
            .iter()
            .zip(var_forecasts.iter())
            .map(|(r, var)| -r > *var)
            .collect();
        Self(indicators)
    }

    /// Number of evaluation dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no evaluation dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of exceedances.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&e| e).count()
    }

    /// Observed exceedance rate; 0.0 for an empty sequence.
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.count() as f64 / self.0.len() as f64
        }
    }

    /// Indicator slice, one entry per evaluation date.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Zero-based positions of the exceedances.
    #[must_use]
    pub fn positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| e.then_some(i))
            .collect()
    }

    /// A sub-sequence covering `[start, start + len)`.
    ///
    /// # Panics
    ///
    /// Panics when `start + len` exceeds the sequence length.
    #[must_use]
    pub fn window(&self, start: usize, len: usize) -> Self {
        Self(self.0[start..start + len].to_vec())
    }
}
