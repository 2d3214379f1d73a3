//! `docscore analyze` - score a single document

use anyhow::{Context, Result};
use console::style;
use docscore::config::AnalyzerConfig;
use docscore::models::{format_percent, AnalysisReport};
use docscore::reporters;
use docscore::AnalysisPipeline;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Spinner that is cleared however the analysis ends
struct SpinnerGuard(ProgressBar);

impl SpinnerGuard {
    fn start(message: String, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(create_spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        bar.set_message(message);
        Self(bar)
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub fn run(
    config: AnalyzerConfig,
    file: &Path,
    format: &str,
    output: Option<&Path>,
    fail_under: Option<f64>,
    quiet: bool,
) -> Result<()> {
    let pipeline = AnalysisPipeline::new(config);

    let report = {
        let _spinner = SpinnerGuard::start(format!("Analyzing {}...", file.display()), quiet);
        pipeline.analyze_path(file)?
    };

    let rendered = reporters::report(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            if !quiet {
                eprintln!(
                    "{} Report written to {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
        }
        None => println!("{}", rendered),
    }

    check_fail_threshold(fail_under, &report)
}

/// Scores (by name) that fall below a percentage threshold
fn scores_below(threshold: f64, report: &AnalysisReport) -> Vec<(&'static str, f64)> {
    report
        .sections()
        .into_iter()
        .map(|(title, section)| (title, section.score()))
        .filter(|(_, score)| score * 100.0 < threshold)
        .collect()
}

fn check_fail_threshold(fail_under: Option<f64>, report: &AnalysisReport) -> Result<()> {
    if let Some(threshold) = fail_under {
        let failing = scores_below(threshold, report);
        if !failing.is_empty() {
            for (title, score) in &failing {
                eprintln!("{} scored {}", title, format_percent(*score));
            }
            eprintln!("Failing due to --fail-under={} threshold", threshold);
            std::process::exit(1);
        }
    }
    Ok(())
}
