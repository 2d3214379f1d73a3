//! Core data models for docscore
//!
//! These models carry scorer results from the pipeline to the reporters.
//! Serialized field names are camelCase so the JSON report keeps the
//! `structure` / `features` / `spelling` / `format` / `modelMatch` shape.

use serde::{Deserialize, Serialize};

/// Value of a single sub-check inside a scorer result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckValue {
    Flag(bool),
    Count(usize),
}

impl CheckValue {
    /// `true` flags and non-zero counts are truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            CheckValue::Flag(b) => *b,
            CheckValue::Count(n) => *n > 0,
        }
    }
}

impl std::fmt::Display for CheckValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckValue::Flag(b) => write!(f, "{}", b),
            CheckValue::Count(n) => write!(f, "{}", n),
        }
    }
}

/// A named sub-check, in the order the scorer defines it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub value: CheckValue,
}

impl Check {
    pub fn flag(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: CheckValue::Flag(value),
        }
    }

    pub fn count(name: &'static str, value: usize) -> Self {
        Self {
            name,
            value: CheckValue::Count(value),
        }
    }
}

/// Common view over the four scorer results, used by reporters
pub trait CheckResult {
    /// Every non-score field, in declaration order
    fn checks(&self) -> Vec<Check>;

    /// Normalized score in [0, 1]
    fn score(&self) -> f64;
}

/// Arithmetic mean of boolean checks (true = 1, false = 0)
pub fn mean_of(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    let hits = flags.iter().filter(|&&b| b).count();
    hits as f64 / flags.len() as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureCheck {
    pub has_title: bool,
    pub has_content: bool,
    pub has_sections: bool,
    pub score: f64,
}

impl CheckResult for StructureCheck {
    fn checks(&self) -> Vec<Check> {
        vec![
            Check::flag("hasTitle", self.has_title),
            Check::flag("hasContent", self.has_content),
            Check::flag("hasSections", self.has_sections),
        ]
    }

    fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCheck {
    pub has_images: bool,
    pub has_tables: bool,
    pub has_references: bool,
    pub score: f64,
}

impl CheckResult for FeatureCheck {
    fn checks(&self) -> Vec<Check> {
        vec![
            Check::flag("hasImages", self.has_images),
            Check::flag("hasTables", self.has_tables),
            Check::flag("hasReferences", self.has_references),
        ]
    }

    fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingCheck {
    pub mistakes: usize,
    pub score: f64,
}

impl CheckResult for SpellingCheck {
    fn checks(&self) -> Vec<Check> {
        vec![Check::count("mistakes", self.mistakes)]
    }

    fn score(&self) -> f64 {
        self.score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatCheck {
    pub has_proper_spacing: bool,
    pub has_proper_line_breaks: bool,
    pub has_proper_punctuation: bool,
    pub score: f64,
}

impl CheckResult for FormatCheck {
    fn checks(&self) -> Vec<Check> {
        vec![
            Check::flag("hasProperSpacing", self.has_proper_spacing),
            Check::flag("hasProperLineBreaks", self.has_proper_line_breaks),
            Check::flag("hasProperPunctuation", self.has_proper_punctuation),
        ]
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// Aggregated result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub structure: StructureCheck,
    pub features: FeatureCheck,
    pub spelling: SpellingCheck,
    pub format: FormatCheck,
    pub model_match: String,
}

impl AnalysisReport {
    /// The four scored sections with their display titles, in report order
    pub fn sections(&self) -> [(&'static str, &dyn CheckResult); 4] {
        [
            ("Structure Analysis", &self.structure),
            ("Feature Analysis", &self.features),
            ("Spelling Analysis", &self.spelling),
            ("Format Analysis", &self.format),
        ]
    }

    /// Lowest of the four scores
    pub fn min_score(&self) -> f64 {
        self.sections()
            .iter()
            .map(|(_, section)| section.score())
            .fold(1.0, f64::min)
    }
}

/// Traffic-light classification of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Success,
    Warning,
    Error,
}

impl ScoreStatus {
    /// >= 80% success, >= 50% warning, otherwise error
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => ScoreStatus::Success,
            s if s >= 0.5 => ScoreStatus::Warning,
            _ => ScoreStatus::Error,
        }
    }

    /// Status for a sub-check indicator
    pub fn from_check(value: CheckValue) -> Self {
        if value.is_truthy() {
            ScoreStatus::Success
        } else {
            ScoreStatus::Error
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreStatus::Success => write!(f, "success"),
            ScoreStatus::Warning => write!(f, "warning"),
            ScoreStatus::Error => write!(f, "error"),
        }
    }
}

/// Format a [0, 1] score as a percentage with two decimals
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}
