//! Operator console output.

use colored::Colorize;

use peak_backtest::basel::TrafficLight;
use peak_backtest::suite::BacktestVerdict;
use peak_backtest::types::{TestResult, TestStatus};

fn status_marker(status: TestStatus) -> String {
    match status {
        TestStatus::Pass => format!("✅ {}", "PASS".green()),
        TestStatus::Fail => format!("❌ {}", "FAIL".red()),
        TestStatus::InsufficientData => format!("{}", "INSUFFICIENT DATA".yellow()),
    }
}

fn test_line(result: &TestResult) -> String {
    match (result.statistic, result.p_value) {
        (Some(stat), Some(p)) => {
            format!("{} (LR={stat:.4}, p={p:.4})", status_marker(result.status))
        }
        _ => status_marker(result.status),
    }
}

fn band_marker(band: TrafficLight) -> String {
    match band {
        TrafficLight::Green => format!("🟢 {}", "GREEN".green()),
        TrafficLight::Yellow => format!("🟡 {}", "YELLOW".yellow()),
        TrafficLight::Red => format!("🔴 {}", "RED".red()),
    }
}

/// Prints the operator summary block for a suite verdict.
pub fn print_summary(verdict: &BacktestVerdict) {
    println!("VAR BACKTEST SUITE SUMMARY");
    println!("==========================");
    println!("Observations:        {}", verdict.observations);
    println!(
        "Violations:          {} ({:.2}%)",
        verdict.violations,
        if verdict.observations == 0 {
            0.0
        } else {
            100.0 * verdict.violations as f64 / verdict.observations as f64
        }
    );
    println!("Kupiec POF:          {}", test_line(&verdict.kupiec));
    println!("Independence:        {}", test_line(&verdict.independence));
    println!(
        "Cond. Coverage:      {}",
        test_line(&verdict.conditional_coverage)
    );
    println!(
        "Basel Traffic Light: {} ({} exceedances / {} obs)",
        band_marker(verdict.basel.band),
        verdict.basel.exceedances,
        verdict.basel.window
    );
    println!(
        "Overall Verdict:     {}",
        if verdict.overall_pass {
            format!("✅ {}", "PASS".green())
        } else {
            format!("❌ {}", "FAIL".red())
        }
    );

    if let Some(duration) = &verdict.duration {
        println!();
        println!("Phase 9A: Duration Diagnostic");
        println!("  Duration Ratio:    {:.4}", duration.duration_ratio);
        println!(
            "  Clustering:        {}",
            if duration.status == TestStatus::InsufficientData {
                "insufficient data".to_string()
            } else if duration.clustering {
                format!("{}", "DETECTED".red())
            } else {
                "not detected".to_string()
            }
        );
    }

    if let Some(rolling) = &verdict.rolling {
        println!();
        println!("Phase 9B: Rolling Evaluation");
        println!("  Windows Evaluated: {}", rolling.windows.len());
        println!("  All-Pass Rate:     {:.2}%", rolling.all_pass_rate * 100.0);
        println!(
            "  Verdict Stability: {:.2}%",
            rolling.verdict_stability * 100.0
        );
    }
}
