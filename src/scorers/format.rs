//! Formatting: spacing, line breaks, punctuation

use super::base::Scorer;
use crate::models::{mean_of, FormatCheck};
use regex::Regex;
use std::sync::OnceLock;

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r"[.!?]").expect("valid regex"))
}

pub struct FormatScorer;

impl Scorer for FormatScorer {
    type Output = FormatCheck;

    fn name(&self) -> &'static str {
        "format"
    }

    fn description(&self) -> &'static str {
        "Checks for double spacing, paragraph breaks, and sentence punctuation"
    }

    fn score(&self, text: &str) -> FormatCheck {
        let has_proper_spacing = text.contains("  ");
        let has_proper_line_breaks = text.contains("\n\n");
        let has_proper_punctuation = punctuation().is_match(text);

        FormatCheck {
            has_proper_spacing,
            has_proper_line_breaks,
            has_proper_punctuation,
            score: mean_of(&[
                has_proper_spacing,
                has_proper_line_breaks,
                has_proper_punctuation,
            ]),
        }
    }
}
