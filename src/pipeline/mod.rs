//! Document analysis pipeline
//!
//! Orchestrates a single analysis:
//! 1. Extract per-page text from the document bytes
//! 2. Join pages into Document Text
//! 3. Run the four scorers and the model matcher
//! 4. Record the scores in the learning history
//!
//! Extraction is the only fallible step. Its error is returned as-is and
//! leaves the history untouched.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::{ExtractionError, ExtractionResult};
use crate::extract::{extractor_for_path, PdfExtractor, TextExtractor};
use crate::history::LearningHistory;
use crate::models::AnalysisReport;
use crate::scorers::{Scorer, ScorerSet};

/// Analysis pipeline owning its scorers and learning history.
///
/// `perform_analysis` takes `&self`; the history sits behind a mutex so the
/// pipeline can be shared across threads without breaking the
/// equal-length invariant of the history sequences.
pub struct AnalysisPipeline {
    scorers: ScorerSet,
    /// Overrides extension-based extractor selection when set
    extractor: Option<Box<dyn TextExtractor>>,
    history: Mutex<LearningHistory>,
}

impl AnalysisPipeline {
    /// Create a pipeline from a configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        let scorers = ScorerSet::from_config(&config);
        let history = LearningHistory::with_limit(config.history.max_entries);
        Self {
            scorers,
            extractor: None,
            history: Mutex::new(history),
        }
    }

    /// Use a specific extractor for every document.
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Analyze raw document bytes.
    ///
    /// Uses the configured extractor, or PDF when none was set.
    pub fn analyze(&self, bytes: &[u8]) -> ExtractionResult<AnalysisReport> {
        match &self.extractor {
            Some(extractor) => self.analyze_with(extractor.as_ref(), bytes),
            None => self.analyze_with(&PdfExtractor, bytes),
        }
    }

    /// Read and analyze a file, picking the extractor from its extension.
    pub fn analyze_path(&self, path: &Path) -> ExtractionResult<AnalysisReport> {
        let bytes = std::fs::read(path).map_err(|source| ExtractionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match &self.extractor {
            Some(extractor) => self.analyze_with(extractor.as_ref(), &bytes),
            None => self.analyze_with(extractor_for_path(path).as_ref(), &bytes),
        }
    }

    fn analyze_with(
        &self,
        extractor: &dyn TextExtractor,
        bytes: &[u8],
    ) -> ExtractionResult<AnalysisReport> {
        let start = Instant::now();
        let document = extractor.extract_pages(bytes)?;
        info!(
            "Extracted {} page(s) with {} extractor in {:?}",
            document.page_count(),
            extractor.name(),
            start.elapsed()
        );

        let text = document.text();
        Ok(self.perform_analysis(&text))
    }

    /// Score Document Text and record the scores.
    ///
    /// Deterministic in its result; each call appends one score per scorer
    /// to the history.
    pub fn perform_analysis(&self, text: &str) -> AnalysisReport {
        let report = AnalysisReport {
            structure: self.scorers.structure.score(text),
            features: self.scorers.features.score(text),
            spelling: self.scorers.spelling.score(text),
            format: self.scorers.format.score(text),
            model_match: self.scorers.model.match_model(text),
        };

        debug!(
            structure = report.structure.score,
            features = report.features.score,
            spelling = report.spelling.score,
            format = report.format.score,
            model = %report.model_match,
            "Scored {} chars",
            text.len()
        );

        self.lock_history().record(&report);
        report
    }

    /// Snapshot of the learning history.
    pub fn history(&self) -> LearningHistory {
        self.lock_history().clone()
    }

    fn lock_history(&self) -> MutexGuard<'_, LearningHistory> {
        // Recording cannot panic midway, so a poisoned lock still holds
        // equal-length sequences.
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelEntry, UNKNOWN_MODEL};
    use crate::extract::{ExtractedDocument, PlainTextExtractor};
    use std::sync::Arc;

    /// Extractor returning fixed pages, for pipeline tests
    struct FixedPages(Vec<&'static str>);

    impl TextExtractor for FixedPages {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract_pages(&self, _bytes: &[u8]) -> ExtractionResult<ExtractedDocument> {
            Ok(ExtractedDocument::new(
                self.0.iter().map(|s| s.to_string()).collect(),
            ))
        }
    }

    struct AlwaysFails;

    impl TextExtractor for AlwaysFails {
        fn name(&self) -> &'static str {
            "fails"
        }

        fn extract_pages(&self, _bytes: &[u8]) -> ExtractionResult<ExtractedDocument> {
            Err(ExtractionError::Load("corrupt xref table".into()))
        }
    }

    const SAMPLE: &str = "model2 is great and has Table data with References.\n\nMore text here making more than ten words total";

    #[test]
    fn test_empty_text() {
        let pipeline = AnalysisPipeline::default();
        let report = pipeline.perform_analysis("");

        assert!(!report.structure.has_title);
        assert!(!report.structure.has_content);
        assert!(!report.structure.has_sections);
        assert_eq!(report.structure.score, 0.0);
        assert_eq!(report.features.score, 0.0);
        assert_eq!(report.spelling.mistakes, 0);
        assert_eq!(report.spelling.score, 1.0);
        assert!(!report.format.has_proper_spacing);
        assert!(!report.format.has_proper_line_breaks);
        assert!(!report.format.has_proper_punctuation);
        assert_eq!(report.format.score, 0.0);
        assert_eq!(report.model_match, UNKNOWN_MODEL);
    }

    #[test]
    fn test_sample_document() {
        let pipeline = AnalysisPipeline::default();
        let report = pipeline.perform_analysis(SAMPLE);

        assert!(!report.features.has_images);
        assert!(report.features.has_tables);
        assert!(report.features.has_references);
        assert!((report.features.score - 2.0 / 3.0).abs() < 1e-9);

        assert!(report.structure.has_title);
        assert!(report.structure.has_content);
        assert!(report.structure.has_sections);
        assert_eq!(report.structure.score, 1.0);

        assert_eq!(report.spelling.mistakes, 0);
        assert!(report.format.has_proper_line_breaks);
        assert!(report.format.has_proper_punctuation);
        assert!(!report.format.has_proper_spacing);
        assert_eq!(report.model_match, "Model B");
    }

    #[test]
    fn test_repeat_analysis_is_deterministic_but_grows_history() {
        let pipeline = AnalysisPipeline::default();
        let first = pipeline.perform_analysis(SAMPLE);
        let second = pipeline.perform_analysis(SAMPLE);
        assert_eq!(first, second);
        assert_eq!(pipeline.history().len(), 2);
    }

    #[test]
    fn test_history_length_matches_analysis_count() {
        let pipeline = AnalysisPipeline::default();
        for text in ["", "teh", SAMPLE, "Image?"] {
            pipeline.perform_analysis(text);
        }
        let history = pipeline.history();
        assert_eq!(history.structure().len(), 4);
        assert_eq!(history.features().len(), 4);
        assert_eq!(history.spelling().len(), 4);
        assert_eq!(history.format().len(), 4);
    }

    #[test]
    fn test_injected_registry() {
        let config = AnalyzerConfig::default()
            .with_models(vec![ModelEntry::new("widget", "Widget Pro")]);
        let pipeline = AnalysisPipeline::new(config);
        assert_eq!(pipeline.perform_analysis("A WIDGET manual").model_match, "Widget Pro");
        assert_eq!(pipeline.perform_analysis("model1").model_match, UNKNOWN_MODEL);
    }

    #[test]
    fn test_history_limit_from_config() {
        let pipeline = AnalysisPipeline::new(AnalyzerConfig::default().with_history_limit(3));
        for _ in 0..5 {
            pipeline.perform_analysis("x");
        }
        assert_eq!(pipeline.history().len(), 3);
    }

    #[test]
    fn test_analyze_joins_pages_with_space() {
        // Eleven tokens only if "six" and "seven" stay apart
        let pipeline = AnalysisPipeline::default().with_extractor(Box::new(FixedPages(vec![
            "one two three four five six",
            "seven eight nine ten eleven",
        ])));
        let report = pipeline.analyze(b"ignored").unwrap();
        assert!(report.structure.has_content);
        assert!(!report.format.has_proper_spacing);
    }

    #[test]
    fn test_extraction_failure_propagates_and_skips_history() {
        let pipeline = AnalysisPipeline::default().with_extractor(Box::new(AlwaysFails));
        let err = pipeline.analyze(b"%PDF-1.7").unwrap_err();
        assert!(err.to_string().contains("corrupt xref table"));
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_analyze_pdf_bytes() {
        let bytes = crate::extract::pdf_test_support::build_text_pdf(&["Table of model3 results."]);
        let pipeline = AnalysisPipeline::default();
        let report = pipeline.analyze(&bytes).unwrap();
        assert!(report.features.has_tables);
        assert_eq!(report.model_match, "Model C");
    }

    #[test]
    fn test_analyze_blank_pdf_scores_like_empty_text() {
        let bytes = crate::extract::pdf_test_support::build_text_pdf(&["", ""]);
        let pipeline = AnalysisPipeline::default();
        let report = pipeline.analyze(&bytes).unwrap();
        assert_eq!(report, pipeline.perform_analysis(""));
        assert!(!report.structure.has_title);
        assert_eq!(report.structure.score, 0.0);
        assert!(!report.format.has_proper_spacing);
    }

    #[test]
    fn test_analyze_trailing_blank_pages() {
        let bytes = crate::extract::pdf_test_support::build_text_pdf(&["Hello", "", ""]);
        let report = AnalysisPipeline::default().analyze(&bytes).unwrap();
        assert!(report.structure.has_title);
        assert!(!report.format.has_proper_spacing);
    }

    #[test]
    fn test_analyze_invalid_pdf() {
        let pipeline = AnalysisPipeline::default();
        assert!(matches!(
            pipeline.analyze(b"not a pdf"),
            Err(ExtractionError::Load(_))
        ));
        assert!(pipeline.history().is_empty());
    }

    #[test]
    fn test_analyze_path_picks_plain_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "teh Image  here.\n\nmodel1").unwrap();

        let report = AnalysisPipeline::default().analyze_path(&path).unwrap();
        assert_eq!(report.spelling.mistakes, 1);
        assert!(report.features.has_images);
        assert_eq!(report.format.score, 1.0);
        assert_eq!(report.model_match, "Model A");
    }

    #[test]
    fn test_analyze_path_missing_file() {
        let err = AnalysisPipeline::default()
            .analyze_path(Path::new("/nonexistent/doc.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Read { .. }));
    }

    #[test]
    fn test_explicit_extractor_overrides_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("looks-like.pdf");
        std::fs::write(&path, "plain Table text").unwrap();

        let pipeline = AnalysisPipeline::default().with_extractor(Box::new(PlainTextExtractor));
        let report = pipeline.analyze_path(&path).unwrap();
        assert!(report.features.has_tables);
    }

    #[test]
    fn test_concurrent_analyses_keep_history_aligned() {
        let pipeline = Arc::new(AnalysisPipeline::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pipeline = Arc::clone(&pipeline);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        let text = if i % 2 == 0 { SAMPLE } else { "teh" };
                        pipeline.perform_analysis(text);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("analysis thread panicked");
        }

        let history = pipeline.history();
        assert_eq!(history.len(), 200);
        assert_eq!(history.features().len(), 200);
        assert_eq!(history.spelling().len(), 200);
        assert_eq!(history.format().len(), 200);
    }
}
