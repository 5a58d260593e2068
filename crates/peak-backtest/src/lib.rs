//! # peak-backtest
//!
//! Statistical backtest battery for VaR model validation.
//!
//! Given a sequence of exceedance indicators (dates where the realized
//! loss exceeded the forecasted VaR), this crate decides whether the VaR
//! model is statistically well-calibrated:
//!
//! - **Kupiec POF**: unconditional coverage likelihood-ratio test
//! - **Christoffersen Independence**: first-order Markov clustering test
//! - **Conditional Coverage**: joint coverage + independence test
//! - **Basel Traffic Light**: GREEN/YELLOW/RED regulatory banding
//! - **Duration Diagnostic** (opt-in): inter-exceedance gap analysis
//! - **Rolling Evaluation** (opt-in): core tests over sliding windows
//!
//! All computation is pure and deterministic; statistical edge cases
//! degrade to an explicit insufficient-data status instead of erroring.
//!
//! ## Example
//!
//! ```
//! use peak_backtest::exceedance::ExceedanceSequence;
//! use peak_backtest::suite::{run_backtest_suite, SuiteConfig};
//!
//! // 250 observations, two exceedances
//! let mut indicators = vec![false; 250];
//! indicators[40] = true;
//! indicators[170] = true;
//!
//! let seq = ExceedanceSequence::from_indicators(indicators);
//! let verdict = run_backtest_suite(&seq, &SuiteConfig::new(0.99)).unwrap();
//! assert!(verdict.overall_pass);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod basel;
pub mod christoffersen;
pub mod duration;
pub mod exceedance;
pub mod kupiec;
pub mod report;
pub mod rolling;
pub mod suite;
pub mod types;
mod error;

pub use error::BacktestError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::basel::{basel_traffic_light, TrafficLight, TrafficLightResult};
    pub use crate::christoffersen::{conditional_coverage_test, independence_test};
    pub use crate::duration::{duration_diagnostic, DurationDiagnostic};
    pub use crate::exceedance::ExceedanceSequence;
    pub use crate::kupiec::kupiec_pof_test;
    pub use crate::report::{render_markdown, ReportMeta};
    pub use crate::rolling::{rolling_evaluation, RollingEvaluation, RollingWindow};
    pub use crate::suite::{run_backtest_suite, BacktestVerdict, SuiteConfig};
    pub use crate::types::{TestResult, TestStatus};
    pub use crate::BacktestError;
}
