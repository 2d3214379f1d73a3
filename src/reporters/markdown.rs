//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pull request comments and document review notes.

use crate::models::{format_percent, AnalysisReport, CheckResult, ScoreStatus};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    for (title, section) in report.sections() {
        md.push_str(&render_section(title, section));
        md.push('\n');
    }

    md.push_str(&render_model_match(report));
    md.push('\n');

    md.push_str("---\n\n*Generated by docscore*\n");

    Ok(md)
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} Document Analysis Report

**Lowest Score: {}**

Generated: {}
"#,
        status_emoji(ScoreStatus::from_score(report.min_score())),
        format_percent(report.min_score()),
        timestamp
    )
}

fn render_summary(report: &AnalysisReport) -> String {
    let mut md = String::from("## Summary\n\n| Analysis | Score | Status |\n|----------|-------|--------|\n");
    for (title, section) in report.sections() {
        let status = ScoreStatus::from_score(section.score());
        md.push_str(&format!(
            "| {} | {} | {} {} |\n",
            title,
            format_percent(section.score()),
            status_emoji(status),
            status
        ));
    }
    md
}

fn render_section(title: &str, section: &dyn CheckResult) -> String {
    let mut md = format!("## {}\n\n| Check | Value | Status |\n|-------|-------|--------|\n", title);
    for check in section.checks() {
        md.push_str(&format!(
            "| `{}` | {} | {} |\n",
            check.name,
            check.value,
            status_emoji(ScoreStatus::from_check(check.value))
        ));
    }
    md.push_str(&format!(
        "\n**Score:** {}\n",
        format_percent(section.score())
    ));
    md
}

fn render_model_match(report: &AnalysisReport) -> String {
    format!("## Model Match\n\n**Matched model:** {}\n", report.model_match)
}

fn status_emoji(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Success => "✅",
        ScoreStatus::Warning => "⚠️",
        ScoreStatus::Error => "❌",
    }
}
