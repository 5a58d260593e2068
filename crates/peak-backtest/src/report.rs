//! Markdown report rendering.
//!
//! The section skeleton is a stable external artifact: downstream
//! tooling greps for the exact headings, so structure must not vary
//! between runs with identical flags.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::suite::BacktestVerdict;
use crate::types::TestResult;

/// Metadata attached to a rendered report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Generation timestamp (the only run-varying line in the report).
    pub generated_at: DateTime<Utc>,
    /// Human-readable description of the input data source.
    pub source: String,
}

fn write_test_section(out: &mut String, heading: &str, result: &TestResult) {
    let _ = writeln!(out, "### {heading}");
    let _ = writeln!(out);
    match result.statistic {
        Some(statistic) => {
            let _ = writeln!(out, "- Statistic: {statistic:.4}");
            let _ = writeln!(
                out,
                "- P-Value: {:.4}",
                result.p_value.unwrap_or(f64::NAN)
            );
        }
        None => {
            let _ = writeln!(out, "- Statistic: not computable");
        }
    }
    let _ = writeln!(
        out,
        "- Critical Value (chi-squared, {} d.o.f.): {:.4}",
        result.df, result.critical_value
    );
    let _ = writeln!(out, "- Status: {}", result.status);
    let _ = writeln!(out);
}

/// Renders the full markdown report for a verdict.
///
/// Identical verdict and flags produce an identical report apart from
/// the `Generated:` timestamp line.
#[must_use]
pub fn render_markdown(verdict: &BacktestVerdict, meta: &ReportMeta) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# VaR Backtest Suite Snapshot");
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "- Generated: {}",
        meta.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
    );
    let _ = writeln!(out, "- Source: {}", meta.source);
    let _ = writeln!(out, "- Observations: {}", verdict.observations);
    let _ = writeln!(
        out,
        "- Violations: {} (rate {:.4}%)",
        verdict.violations,
        if verdict.observations == 0 {
            0.0
        } else {
            100.0 * verdict.violations as f64 / verdict.observations as f64
        }
    );
    let _ = writeln!(
        out,
        "- Confidence Level: {:.1}%",
        verdict.alpha * 100.0
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## Core Tests");
    let _ = writeln!(out);
    write_test_section(&mut out, "Kupiec Proportion of Failures", &verdict.kupiec);
    write_test_section(
        &mut out,
        "Christoffersen Independence Test",
        &verdict.independence,
    );
    write_test_section(
        &mut out,
        "Christoffersen Conditional Coverage Test",
        &verdict.conditional_coverage,
    );

    let _ = writeln!(out, "### Basel Traffic Light");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "- Exceedances ({}-observation window): {}",
        verdict.basel.window, verdict.basel.exceedances
    );
    let _ = writeln!(
        out,
        "- Cumulative Probability: {:.4}",
        verdict.basel.cumulative_probability
    );
    let _ = writeln!(out, "- Band: {}", verdict.basel.band);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Overall Verdict");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**{}**",
        if verdict.overall_pass { "PASS" } else { "FAIL" }
    );
    let _ = writeln!(out);

    if let Some(duration) = &verdict.duration {
        let _ = writeln!(out, "## Phase 9A: Duration Diagnostic");
        let _ = writeln!(out);
        let _ = writeln!(out, "- Gaps Observed: {}", duration.gaps);
        let _ = writeln!(out, "- Observed Mean Duration: {:.2}", duration.observed_mean);
        let _ = writeln!(out, "- Expected Mean Duration: {:.2}", duration.expected_mean);
        let _ = writeln!(out, "- Duration Ratio: {:.4}", duration.duration_ratio);
        let _ = writeln!(
            out,
            "- Clustering: {}",
            if duration.clustering { "DETECTED" } else { "not detected" }
        );
        let _ = writeln!(out, "- Status: {}", duration.status);
        let _ = writeln!(out);
    }

    if let Some(rolling) = &verdict.rolling {
        let _ = writeln!(out, "## Phase 9B: Rolling Evaluation");
        let _ = writeln!(out);
        let _ = writeln!(out, "- Window Size: {}", rolling.window_size);
        let _ = writeln!(out, "- Step Size: {}", rolling.step_size);
        let _ = writeln!(out);

        let _ = writeln!(out, "### Pass Rates");
        let _ = writeln!(out);
        let _ = writeln!(out, "- Windows Evaluated: {}", rolling.windows.len());
        let _ = writeln!(out, "- All-Pass Rate: {:.2}%", rolling.all_pass_rate * 100.0);
        let _ = writeln!(
            out,
            "- Verdict Stability: {:.2}%",
            rolling.verdict_stability * 100.0
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "### Window Details");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "| Start | Exceedances | Kupiec | Independence | Cond. Coverage | All Pass |"
        );
        let _ = writeln!(
            out,
            "|-------|-------------|--------|--------------|----------------|----------|"
        );
        for window in &rolling.windows {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                window.start,
                window.exceedances,
                window.kupiec,
                window.independence,
                window.conditional_coverage,
                if window.all_pass { "yes" } else { "no" }
            );
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceedance::ExceedanceSequence;
    use crate::suite::{run_backtest_suite, SuiteConfig};

    fn verdict(config: &SuiteConfig) -> BacktestVerdict {
        let mut indicators = vec![false; 1000];
        for i in 0..10 {
            indicators[i * 100 + 13] = true;
        }
        let seq = ExceedanceSequence::from_indicators(indicators);
        run_backtest_suite(&seq, config).unwrap()
    }

    fn meta() -> ReportMeta {
        ReportMeta {
            generated_at: Utc::now(),
            source: "synthetic".to_string(),
        }
    }

    fn section_headings(report: &str) -> Vec<&str> {
        report
            .lines()
            .filter(|l| l.starts_with('#'))
            .collect()
    }

    #[test]
    fn test_core_sections_always_present() {
        let report = render_markdown(&verdict(&SuiteConfig::new(0.99)), &meta());
        let headings = section_headings(&report);
        assert_eq!(
            headings,
            vec![
                "# VaR Backtest Suite Snapshot",
                "## Summary",
                "## Core Tests",
                "### Kupiec Proportion of Failures",
                "### Christoffersen Independence Test",
                "### Christoffersen Conditional Coverage Test",
                "### Basel Traffic Light",
                "## Overall Verdict",
            ]
        );
    }

    #[test]
    fn test_phase_sections_conditional() {
        let config = SuiteConfig::new(0.99)
            .with_duration_diagnostic()
            .with_rolling(250, 50);
        let report = render_markdown(&verdict(&config), &meta());
        assert!(report.contains("## Phase 9A: Duration Diagnostic"));
        assert!(report.contains("## Phase 9B: Rolling Evaluation"));
        assert!(report.contains("### Pass Rates"));
        assert!(report.contains("### Window Details"));

        let bare = render_markdown(&verdict(&SuiteConfig::new(0.99)), &meta());
        assert!(!bare.contains("Phase 9A"));
        assert!(!bare.contains("Phase 9B"));
    }

    #[test]
    fn test_structure_identical_across_runs() {
        let config = SuiteConfig::new(0.99).with_rolling(250, 50);
        let report1 = render_markdown(&verdict(&config), &meta());
        let report2 = render_markdown(&verdict(&config), &meta());

        let strip = |r: &str| -> Vec<String> {
            r.lines()
                .filter(|l| !l.starts_with("- Generated:"))
                .map(String::from)
                .collect()
        };
        assert_eq!(strip(&report1), strip(&report2));
    }

    #[test]
    fn test_verdict_rendered_bold() {
        let report = render_markdown(&verdict(&SuiteConfig::new(0.99)), &meta());
        assert!(report.contains("**PASS**"));
    }
}
