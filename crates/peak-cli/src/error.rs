//! CLI error types.

use std::process::ExitCode;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or inconsistent command-line arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file could not be read.
    #[error("Cannot read {path}: {source}")]
    InputIo {
        /// Path that failed.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Input file could not be parsed.
    #[error("Cannot parse {path}: {reason}")]
    InputParse {
        /// Path that failed.
        path: String,
        /// Description of the malformed content.
        reason: String,
    },

    /// Calculation error from the statistics layer.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// Report file could not be written.
    #[error("Cannot write report: {0}")]
    ReportIo(#[from] std::io::Error),
}

impl CliError {
    /// Exit code reserved for this error class: 2 for argument errors,
    /// 3 for input problems (0/1 communicate the suite verdict).
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::InvalidArgument(_) => ExitCode::from(2),
            CliError::InputIo { .. } | CliError::InputParse { .. } => ExitCode::from(3),
            CliError::Calculation(_) | CliError::ReportIo(_) => ExitCode::from(3),
        }
    }
}

impl From<peak_risk::RiskError> for CliError {
    fn from(err: peak_risk::RiskError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

impl From<peak_backtest::BacktestError> for CliError {
    fn from(err: peak_backtest::BacktestError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

impl From<peak_math::MathError> for CliError {
    fn from(err: peak_math::MathError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
