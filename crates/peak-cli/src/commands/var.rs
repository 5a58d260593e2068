//! Var command implementation.
//!
//! Computes a single point-in-time VaR estimate from a returns file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use peak_risk::var::{compute_var, VaRMethod};

use crate::cli::OutputFormat;
use crate::commands::{load_series, validate_confidence};
use crate::error::{CliError, CliResult};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// CSV file of realized returns, one per line
    #[arg(long)]
    pub returns_file: PathBuf,

    /// Confidence level (e.g. 0.99)
    #[arg(long, default_value = "0.99")]
    pub confidence: f64,

    /// Horizon in periods for square-root-of-time scaling
    #[arg(long, default_value = "1")]
    pub horizon: u32,

    /// Estimation method: historical or parametric_normal
    #[arg(long, default_value = "historical")]
    pub method: String,
}

/// Execute the var command.
pub fn execute(args: VarArgs, format: OutputFormat) -> CliResult<ExitCode> {
    let confidence = validate_confidence(args.confidence)?;
    if args.horizon < 1 {
        return Err(CliError::InvalidArgument(
            "--horizon must be at least 1".to_string(),
        ));
    }
    let method: VaRMethod = args
        .method
        .parse()
        .map_err(|e: peak_risk::RiskError| CliError::InvalidArgument(e.to_string()))?;

    let returns = load_series(&args.returns_file)?;
    let result = compute_var(&returns, confidence, args.horizon, method)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result).map_err(|e| {
                CliError::Calculation(format!("serializing result: {e}"))
            })?);
        }
        OutputFormat::Table => {
            println!("Method:      {}", result.method);
            println!("Confidence:  {:.2}%", result.alpha * 100.0);
            println!("Horizon:     {}", result.horizon);
            println!("Sample Size: {}", result.sample_size);
            println!("VaR:         {:.6} ({:.4}%)", result.var, result.var * 100.0);
        }
    }

    Ok(ExitCode::SUCCESS)
}
