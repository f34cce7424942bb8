// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for benchmark reports.
//!
//! Aligned tables per scenario with a winner line at the bottom. Colors
//! are plain ANSI, switched off for pipelines (non-TTY) and for `NO_COLOR`
//! purists.

use freqdex::{RunReport, ScenarioOutcome, ScenarioReport};
use std::sync::OnceLock;
use std::time::Duration;

const RULE_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Cached color decision
static COLOR: OnceLock<bool> = OnceLock::new();

fn use_color() -> bool {
    *COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn paint(text: &str, code: &str) -> String {
    if use_color() {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Scale a duration to the unit a human wants to read.
pub fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", d.as_secs_f64() * 1e3)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Print every scenario outcome of a run.
pub fn print_run_report(report: &RunReport) {
    for outcome in &report.scenarios {
        match outcome {
            ScenarioOutcome::Completed(scenario) => print_scenario_report(scenario),
            ScenarioOutcome::Failed { scenario, error } => print_failure(scenario, error),
        }
    }
}

/// One table per scenario: a row per variant, the scan baseline, and the
/// comparison verdict.
pub fn print_scenario_report(report: &ScenarioReport) {
    println!("{}", paint(&"═".repeat(RULE_WIDTH), DIM));
    println!(
        " {} {}",
        paint(&report.scenario, BOLD),
        paint(&format!("· {}", report.detail), DIM)
    );
    println!(
        " {}",
        paint(
            &format!("corpus: {} · {} tokens", report.corpus, report.total_tokens),
            DIM
        )
    );
    println!("{}", paint(&"─".repeat(RULE_WIDTH), DIM));
    println!(
        " {:<10} {:>12} {:>12} {:>12} {:>10}",
        "variant", "build", "query", "total", "unique"
    );
    for timing in &report.variants {
        println!(
            " {:<10} {:>12} {:>12} {:>12} {:>10}",
            timing.variant.name(),
            format_duration(timing.build),
            format_duration(timing.query),
            format_duration(timing.total),
            timing.unique_count
        );
    }
    println!(
        " {:<10} {:>12} {:>12} {:>12} {:>10}",
        "scan",
        "-",
        format_duration(report.baseline.query),
        format_duration(report.baseline.query),
        "-"
    );
    println!("{}", paint(&"─".repeat(RULE_WIDTH), DIM));
    if let Some(comparison) = &report.comparison {
        let verdict = if comparison.speedup_vs_baseline >= 1.0 {
            format!(
                "{} wins: {:.2}x faster than scanning",
                comparison.fastest.name(),
                comparison.speedup_vs_baseline
            )
        } else {
            // A single cold query can genuinely favor the scan
            format!(
                "scanning wins here: {:.2}x faster than {} (build cost dominates)",
                1.0 / comparison.speedup_vs_baseline,
                comparison.fastest.name()
            )
        };
        println!(" {}", paint(&verdict, GREEN));
    }
    println!();
}

fn print_failure(scenario: &str, error: &str) {
    println!("{}", paint(&"═".repeat(RULE_WIDTH), DIM));
    println!(
        " {} {}",
        paint(scenario, BOLD),
        paint("· failed", RED)
    );
    println!(" {}", paint(error, RED));
    println!();
}

/// Result line for the one-off `count` subcommand.
pub fn print_count(word: &str, count: u64, variant: &str, build: Duration, query: Duration) {
    println!(
        "{} appears {} times",
        paint(&format!("\"{word}\""), BOLD),
        paint(&count.to_string(), CYAN)
    );
    println!(
        "{}",
        paint(
            &format!(
                "{variant} index · build {} · lookup {}",
                format_duration(build),
                format_duration(query)
            ),
            DIM
        )
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_scales() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_micros(2_500)), "2.50ms");
        assert_eq!(format_duration(Duration::from_millis(2_500)), "2.50s");
    }
}
