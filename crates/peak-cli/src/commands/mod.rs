//! CLI command implementations.

pub mod backtest;
pub mod var;

// Re-export argument structs for convenience
pub use backtest::BacktestArgs;
pub use var::VarArgs;

use std::path::Path;

use crate::error::{CliError, CliResult};

/// Validates a confidence level shared by all tests.
pub fn validate_confidence(confidence: f64) -> CliResult<f64> {
    if !confidence.is_finite() || confidence <= 0.5 || confidence >= 1.0 {
        return Err(CliError::InvalidArgument(format!(
            "--confidence must be in (0.5, 1.0), got {confidence}"
        )));
    }
    Ok(confidence)
}

/// Loads a single-column CSV file of floats (no header).
pub fn load_series(path: &Path) -> CliResult<Vec<f64>> {
    let display = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| match e.kind() {
            csv::ErrorKind::Io(_) => CliError::InputIo {
                path: display.clone(),
                source: std::io::Error::other(e.to_string()),
            },
            _ => CliError::InputParse {
                path: display.clone(),
                reason: e.to_string(),
            },
        })?;

    let mut values = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CliError::InputParse {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let field = record.get(0).ok_or_else(|| CliError::InputParse {
            path: display.clone(),
            reason: format!("empty record at line {}", line + 1),
        })?;
        let value: f64 = field.trim().parse().map_err(|_| CliError::InputParse {
            path: display.clone(),
            reason: format!("invalid number {:?} at line {}", field, line + 1),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(CliError::InputParse {
            path: display,
            reason: "file contains no values".to_string(),
        });
    }

    Ok(values)
}
