//! Peak CLI - VaR backtesting and estimation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Run the backtest suite on a deterministic synthetic fixture
//! peak backtest --use-synthetic --n-observations 250 --confidence 0.99
//!
//! # Backtest recorded forecasts against realized returns
//! peak backtest --returns-file returns.csv --var-file var.csv \
//!     --enable-duration-diagnostic --enable-rolling
//!
//! # Point-estimate VaR from a returns file
//! peak var --returns-file returns.csv --confidence 0.99 --method historical
//! ```
//!
//! Exit codes: 0 when the suite verdict is PASS, 1 when FAIL, 2 for
//! argument-validation errors, 3 for unreadable input files.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod synthetic;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Backtest(args) => commands::backtest::execute(args, cli.format),
        Commands::Var(args) => commands::var::execute(args, cli.format),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
