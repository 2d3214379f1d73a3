//! Document scorers
//!
//! Four independent scorers plus the model matcher:
//! - `structure` - title, content length, section breaks
//! - `features` - image, table, and reference markers
//! - `spelling` - known misspellings
//! - `format` - spacing, line breaks, punctuation
//! - `model_match` - first Model Registry key found in the text

mod base;
mod features;
mod format;
mod model_match;
mod spelling;
mod structure;

pub use base::Scorer;
pub use features::FeatureScorer;
pub use format::FormatScorer;
pub use model_match::ModelMatcher;
pub use spelling::SpellingScorer;
pub use structure::StructureScorer;

use crate::config::AnalyzerConfig;

/// The full set of scorers one pipeline runs
pub struct ScorerSet {
    pub structure: StructureScorer,
    pub features: FeatureScorer,
    pub spelling: SpellingScorer,
    pub format: FormatScorer,
    pub model: ModelMatcher,
}

impl ScorerSet {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            structure: StructureScorer,
            features: FeatureScorer,
            spelling: SpellingScorer::new(config.spelling.mistakes.clone()),
            format: FormatScorer,
            model: ModelMatcher::from_config(config),
        }
    }

    /// (name, description) of every scorer, in report order
    pub fn describe(&self) -> [(&'static str, &'static str); 4] {
        [
            (self.structure.name(), self.structure.description()),
            (self.features.name(), self.features.description()),
            (self.spelling.name(), self.spelling.description()),
            (self.format.name(), self.format.description()),
        ]
    }
}
