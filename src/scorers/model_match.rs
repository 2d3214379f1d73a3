//! Naive model matching against the Model Registry
//!
//! Registry order decides ties: the first entry whose key appears anywhere in
//! the text wins, regardless of where in the text each key occurs.

use crate::config::{AnalyzerConfig, ModelEntry};

pub struct ModelMatcher {
    models: Vec<ModelEntry>,
    unknown: String,
}

impl ModelMatcher {
    pub fn new(models: Vec<ModelEntry>, unknown: impl Into<String>) -> Self {
        Self {
            models,
            unknown: unknown.into(),
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.models.clone(), config.unknown_model.clone())
    }

    /// Registry entry matching the text, if any
    pub fn find(&self, text: &str) -> Option<&ModelEntry> {
        let haystack = text.to_lowercase();
        self.models
            .iter()
            .find(|entry| haystack.contains(&entry.key.to_lowercase()))
    }

    /// Display name of the matching model, or the unknown-model sentinel
    pub fn match_model(&self, text: &str) -> String {
        self.find(text)
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| self.unknown.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNKNOWN_MODEL;

    fn default_matcher() -> ModelMatcher {
        ModelMatcher::from_config(&AnalyzerConfig::default())
    }

    #[test]
    fn test_no_match_returns_sentinel() {
        assert_eq!(default_matcher().match_model(""), UNKNOWN_MODEL);
        assert_eq!(default_matcher().match_model("model4 only"), UNKNOWN_MODEL);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(default_matcher().match_model("Built on MODEL2"), "Model B");
    }

    #[test]
    fn test_registry_order_wins_over_text_position() {
        // model2 appears first in the text, but model1 is listed first
        let text = "model2 then model1";
        assert_eq!(default_matcher().match_model(text), "Model A");

        let reversed = ModelMatcher::new(
            vec![
                ModelEntry::new("model2", "Model B"),
                ModelEntry::new("model1", "Model A"),
            ],
            UNKNOWN_MODEL,
        );
        assert_eq!(reversed.match_model("model1 then model2"), "Model B");
    }

    #[test]
    fn test_uppercase_keys_are_lowercased() {
        let matcher = ModelMatcher::new(vec![ModelEntry::new("GPX-9", "Gpx Nine")], "none");
        assert_eq!(matcher.match_model("the gpx-9 unit"), "Gpx Nine");
        assert_eq!(matcher.match_model("other"), "none");
    }
}
