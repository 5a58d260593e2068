//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BacktestArgs, VarArgs};

/// Peak - VaR backtesting and statistical validation CLI
#[derive(Parser)]
#[command(name = "peak")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the statistical backtest suite on paired returns/VaR forecasts
    Backtest(BacktestArgs),

    /// Compute a single VaR estimate from a returns file
    Var(VarArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value format
    #[default]
    Table,
    /// JSON format
    Json,
}
