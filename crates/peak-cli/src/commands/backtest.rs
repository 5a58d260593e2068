//! Backtest command implementation.
//!
//! Runs the statistical suite on paired realized returns and VaR
//! forecasts, prints the operator summary, and optionally writes the
//! markdown snapshot report.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Args;

use peak_backtest::exceedance::ExceedanceSequence;
use peak_backtest::report::{render_markdown, ReportMeta};
use peak_backtest::suite::{run_backtest_suite, SuiteConfig};

use crate::cli::OutputFormat;
use crate::commands::{load_series, validate_confidence};
use crate::error::{CliError, CliResult};
use crate::output::print_summary;
use crate::synthetic::{generate_synthetic, DEFAULT_SEED};

/// Minimum observation count for the synthetic fixture.
const MIN_SYNTHETIC_OBSERVATIONS: usize = 250;

/// Arguments for the backtest command.
#[derive(Args, Debug)]
pub struct BacktestArgs {
    /// Generate a deterministic synthetic returns/VaR pair instead of
    /// reading input files
    #[arg(long, conflicts_with_all = ["returns_file", "var_file"])]
    pub use_synthetic: bool,

    /// Number of synthetic observations (>= 250)
    #[arg(long, default_value = "250")]
    pub n_observations: usize,

    /// Seed for the synthetic generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Confidence level for all tests (e.g. 0.99)
    #[arg(long, default_value = "0.99")]
    pub confidence: f64,

    /// CSV file of realized returns, one per line
    #[arg(long, requires = "var_file")]
    pub returns_file: Option<PathBuf>,

    /// CSV file of VaR forecasts aligned with the returns
    #[arg(long, requires = "returns_file")]
    pub var_file: Option<PathBuf>,

    /// Attach the inter-exceedance duration diagnostic (Phase 9A)
    #[arg(long)]
    pub enable_duration_diagnostic: bool,

    /// Attach the rolling evaluation (Phase 9B)
    #[arg(long)]
    pub enable_rolling: bool,

    /// Rolling window length in observations
    #[arg(long, default_value = "250")]
    pub rolling_window_size: usize,

    /// Step between successive rolling windows
    #[arg(long, default_value = "50")]
    pub rolling_step_size: usize,

    /// Skip writing the markdown snapshot report
    #[arg(long)]
    pub no_report: bool,

    /// Directory for the snapshot report
    #[arg(long, default_value = "reports")]
    pub output_dir: PathBuf,
}

/// Execute the backtest command.
pub fn execute(args: BacktestArgs, format: OutputFormat) -> CliResult<ExitCode> {
    let confidence = validate_confidence(args.confidence)?;

    if args.enable_rolling && (args.rolling_window_size == 0 || args.rolling_step_size == 0) {
        return Err(CliError::InvalidArgument(
            "--rolling-window-size and --rolling-step-size must be at least 1".to_string(),
        ));
    }

    let (returns, var_forecasts, source) = if args.use_synthetic {
        if args.n_observations < MIN_SYNTHETIC_OBSERVATIONS {
            return Err(CliError::InvalidArgument(format!(
                "--n-observations must be at least {MIN_SYNTHETIC_OBSERVATIONS}, got {}",
                args.n_observations
            )));
        }
        let series = generate_synthetic(args.n_observations, confidence, args.seed)?;
        let source = format!(
            "synthetic (n={}, seed={})",
            args.n_observations, args.seed
        );
        (series.returns, series.var_forecasts, source)
    } else {
        let returns_file = args.returns_file.as_ref().ok_or_else(|| {
            CliError::InvalidArgument(
                "either --use-synthetic or --returns-file/--var-file is required".to_string(),
            )
        })?;
        let var_file = args.var_file.as_ref().ok_or_else(|| {
            CliError::InvalidArgument("--returns-file requires --var-file".to_string())
        })?;

        let returns = load_series(returns_file)?;
        let var_forecasts = load_series(var_file)?;
        if returns.len() != var_forecasts.len() {
            return Err(CliError::InvalidArgument(format!(
                "returns ({}) and VaR forecasts ({}) must have equal length",
                returns.len(),
                var_forecasts.len()
            )));
        }
        let source = format!(
            "{} vs {}",
            returns_file.display(),
            var_file.display()
        );
        (returns, var_forecasts, source)
    };

    let exceedances = ExceedanceSequence::from_forecasts(&returns, &var_forecasts);

    let mut config = SuiteConfig::new(confidence);
    if args.enable_duration_diagnostic {
        config = config.with_duration_diagnostic();
    }
    if args.enable_rolling {
        config = config.with_rolling(args.rolling_window_size, args.rolling_step_size);
    }

    let verdict = run_backtest_suite(&exceedances, &config)?;
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&verdict)
                    .map_err(|e| CliError::Calculation(format!("serializing verdict: {e}")))?
            );
        }
        OutputFormat::Table => print_summary(&verdict),
    }

    if !args.no_report {
        let meta = ReportMeta {
            generated_at: Utc::now(),
            source,
        };
        let report = render_markdown(&verdict, &meta);

        std::fs::create_dir_all(&args.output_dir)?;
        let filename = format!(
            "var_backtest_suite_snapshot_{}.md",
            meta.generated_at.format("%Y%m%d_%H%M%S")
        );
        let path = args.output_dir.join(filename);
        std::fs::write(&path, report)?;
        println!();
        println!("Report written: {}", path.display());
    }

    Ok(if verdict.overall_pass {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
