//! JSON reporter
//!
//! Outputs the AnalysisReport as pretty-printed JSON with the five
//! top-level keys `structure`, `features`, `spelling`, `format`, `modelMatch`.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["modelMatch"], "Model B");
        assert_eq!(parsed["features"]["hasTables"], true);
        assert_eq!(parsed["spelling"]["mistakes"], 1);
        assert_eq!(parsed.as_object().expect("object").len(), 5);
    }

    #[test]
    fn test_json_render_compact() {
        let report = test_report();
        let json_str = render_compact(&report).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let back: AnalysisReport = serde_json::from_str(&json_str).expect("parse compact JSON");
        assert_eq!(back, report);
    }
}
