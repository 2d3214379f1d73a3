//! Structural completeness: title, content length, section breaks

use super::base::Scorer;
use crate::models::{mean_of, StructureCheck};

/// Content needs strictly more tokens than this
const MIN_CONTENT_TOKENS: usize = 10;

pub struct StructureScorer;

impl Scorer for StructureScorer {
    type Output = StructureCheck;

    fn name(&self) -> &'static str {
        "structure"
    }

    fn description(&self) -> &'static str {
        "Checks for a title, enough content, and section breaks"
    }

    fn score(&self, text: &str) -> StructureCheck {
        let has_title = !text.is_empty();
        let has_content = text.split(' ').count() > MIN_CONTENT_TOKENS;
        let has_sections = text.contains("\n\n");

        StructureCheck {
            has_title,
            has_content,
            has_sections,
            score: mean_of(&[has_title, has_content, has_sections]),
        }
    }
}
