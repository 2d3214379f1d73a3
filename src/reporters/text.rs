//! Text (terminal) reporter with colors and formatting

use crate::models::{format_percent, AnalysisReport, CheckResult, ScoreStatus};
use anyhow::Result;

/// Status colors (ANSI escape codes)
fn status_color(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Success => "\x1b[32m", // Green
        ScoreStatus::Warning => "\x1b[33m", // Yellow
        ScoreStatus::Error => "\x1b[31m",   // Red
    }
}

/// Status marks
fn status_mark(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Success => "✓",
        ScoreStatus::Warning => "!",
        ScoreStatus::Error => "✗",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Document Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    for (title, section) in report.sections() {
        out.push_str(&render_section(title, section));
        out.push('\n');
    }

    out.push_str(&format!("{BOLD}Model Match{RESET}\n"));
    out.push_str(&format!(
        "  {}{}{RESET} Matched model: {}\n",
        status_color(ScoreStatus::Success),
        status_mark(ScoreStatus::Success),
        report.model_match
    ));

    Ok(out)
}

fn render_section(title: &str, section: &dyn CheckResult) -> String {
    let mut out = format!("{BOLD}{}{RESET}\n", title);

    for check in section.checks() {
        let status = ScoreStatus::from_check(check.value);
        out.push_str(&format!(
            "  {}{}{RESET} {}: {}\n",
            status_color(status),
            status_mark(status),
            check.name,
            check.value
        ));
    }

    let status = ScoreStatus::from_score(section.score());
    out.push_str(&format!(
        "  {}{}Score: {}{RESET}\n",
        status_color(status),
        BOLD,
        format_percent(section.score())
    ));
    out
}
