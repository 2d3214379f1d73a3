//! `docscore watch` - live analysis on document changes
//!
//! Re-analyzes one document every time it is saved. All runs share one
//! pipeline, so the learning history shows how scores move between edits.

use anyhow::{Context, Result};
use console::style;
use docscore::config::AnalyzerConfig;
use docscore::history::{LearningHistory, ScoreTrend};
use docscore::reporters::{self, OutputFormat};
use docscore::AnalysisPipeline;
use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use std::path::Path;
use std::str::FromStr;
use std::sync::mpsc;
use std::time::Duration;
use tracing::debug;

pub fn run(config: AnalyzerConfig, file: &Path, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let file_path = std::fs::canonicalize(file)
        .with_context(|| format!("Cannot watch {}", file.display()))?;
    let watch_dir = file_path
        .parent()
        .context("Watched file has no parent directory")?
        .to_path_buf();
    let file_name = file_path.file_name().map(|n| n.to_os_string());

    eprintln!(
        "\n{}Watching {} for changes...\n",
        style("👁️  ").bold(),
        style(file_path.display()).cyan()
    );
    eprintln!("  {} Save the document to trigger analysis", style("→").dim());
    eprintln!("  {} Press Ctrl+C to stop\n", style("→").dim());

    let pipeline = AnalysisPipeline::new(config);
    analyze_and_print(&pipeline, &file_path, format);

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        None,
        move |result: DebounceEventResult| {
            if let Ok(events) = result {
                let _ = tx.send(events);
            }
        },
    )?;

    // Editors often replace the file on save, so watch its directory
    debouncer.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    while let Ok(events) = rx.recv() {
        let touched = events
            .iter()
            .flat_map(|event| event.paths.iter())
            .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);

        if !touched {
            continue;
        }
        debug!("Change detected in {}", file_path.display());
        analyze_and_print(&pipeline, &file_path, format);
    }

    eprint!("{}", render_summary(&pipeline.history()));
    Ok(())
}

/// Session summary: run count and mean score per scorer
fn render_summary(history: &LearningHistory) -> String {
    let mut out = format!(
        "\n📊 Analyzed {} time(s) during watch session.\n",
        history.len()
    );
    if let Some(avg) = history.averages() {
        out.push_str(&format!(
            "  Average structure {:.2}%, features {:.2}%, spelling {:.2}%, format {:.2}%\n",
            avg.structure * 100.0,
            avg.features * 100.0,
            avg.spelling * 100.0,
            avg.format * 100.0
        ));
    }
    out
}

/// One watch iteration; failures are reported and the session continues
fn analyze_and_print(pipeline: &AnalysisPipeline, file: &Path, format: OutputFormat) {
    let report = match pipeline.analyze_path(file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            return;
        }
    };

    let rendered = match format {
        OutputFormat::Json => reporters::report_json_line(&report),
        other => reporters::report_with_format(&report, other),
    };
    match rendered {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{} {:#}", style("✗").red(), e);
            return;
        }
    }

    // Trends go to stderr so JSON lines on stdout stay parseable
    eprint!("{}", render_trends(&pipeline.history()));
}

fn render_trends(history: &LearningHistory) -> String {
    let mut out = format!(
        "{} {}\n",
        style("Trend").bold(),
        style(format!("(run {})", history.len())).dim()
    );
    for trend in history.trends() {
        out.push_str(&format!(
            "  {:<10} {:>7.2}%  {}  avg {:.2}%\n",
            trend.name,
            trend.latest * 100.0,
            render_delta(&trend),
            trend.average * 100.0
        ));
    }
    out
}

fn render_delta(trend: &ScoreTrend) -> String {
    match trend.delta {
        None => style("   new".to_string()).dim().to_string(),
        Some(d) if d > 0.0 => style(format!("▲{:>5.2}", d * 100.0)).green().to_string(),
        Some(d) if d < 0.0 => style(format!("▼{:>5.2}", -d * 100.0)).red().to_string(),
        Some(_) => style("     =".to_string()).dim().to_string(),
    }
}
