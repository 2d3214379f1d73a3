//! Spelling: presence of known misspellings
//!
//! Each dictionary entry counts at most once, however often it appears.
//! Matching ignores word boundaries, so "tehran" counts as "teh".

use super::base::Scorer;
use crate::config::MistakeEntry;
use crate::models::SpellingCheck;

pub struct SpellingScorer {
    mistakes: Vec<MistakeEntry>,
}

impl SpellingScorer {
    pub fn new(mistakes: Vec<MistakeEntry>) -> Self {
        Self { mistakes }
    }

    /// Dictionary entries whose misspelling appears in the text
    pub fn found<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a MistakeEntry> + 'a {
        self.mistakes
            .iter()
            .filter(move |entry| text.contains(entry.wrong.as_str()))
    }
}

impl Scorer for SpellingScorer {
    type Output = SpellingCheck;

    fn name(&self) -> &'static str {
        "spelling"
    }

    fn description(&self) -> &'static str {
        "Counts known misspellings present in the text"
    }

    fn score(&self, text: &str) -> SpellingCheck {
        let mistakes = self.found(text).count();
        let score = if self.mistakes.is_empty() {
            1.0
        } else {
            1.0 - mistakes as f64 / self.mistakes.len() as f64
        };

        SpellingCheck { mistakes, score }
    }
}
