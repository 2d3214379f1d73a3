//! Learning history
//!
//! Four parallel score sequences, one per scorer, owned by a single
//! pipeline. Every recorded report appends to all four at once, so the
//! sequences always have the same length. Nothing is persisted.
//!
//! Growth is unbounded unless a cap is set. With a cap, recording past it
//! evicts the oldest score from every sequence.

use crate::models::AnalysisReport;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct LearningHistory {
    structure: VecDeque<f64>,
    features: VecDeque<f64>,
    spelling: VecDeque<f64>,
    format: VecDeque<f64>,
    max_entries: Option<usize>,
}

/// Mean score per scorer over the recorded history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAverages {
    pub structure: f64,
    pub features: f64,
    pub spelling: f64,
    pub format: f64,
}

/// Latest score and its change from the previous analysis, per scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTrend {
    pub name: &'static str,
    pub latest: f64,
    pub delta: Option<f64>,
    pub average: f64,
}

impl LearningHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_entries: Option<usize>) -> Self {
        Self {
            max_entries,
            ..Self::default()
        }
    }

    /// Append the four scores of a report
    pub fn record(&mut self, report: &AnalysisReport) {
        if let Some(max) = self.max_entries {
            while self.len() >= max.max(1) {
                self.structure.pop_front();
                self.features.pop_front();
                self.spelling.pop_front();
                self.format.pop_front();
            }
        }
        self.structure.push_back(report.structure.score);
        self.features.push_back(report.features.score);
        self.spelling.push_back(report.spelling.score);
        self.format.push_back(report.format.score);
    }

    /// Number of recorded analyses (equal for all four sequences)
    pub fn len(&self) -> usize {
        self.structure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    pub fn structure(&self) -> &VecDeque<f64> {
        &self.structure
    }

    pub fn features(&self) -> &VecDeque<f64> {
        &self.features
    }

    pub fn spelling(&self) -> &VecDeque<f64> {
        &self.spelling
    }

    pub fn format(&self) -> &VecDeque<f64> {
        &self.format
    }

    fn sequences(&self) -> [(&'static str, &VecDeque<f64>); 4] {
        [
            ("structure", &self.structure),
            ("features", &self.features),
            ("spelling", &self.spelling),
            ("format", &self.format),
        ]
    }

    pub fn averages(&self) -> Option<ScoreAverages> {
        if self.is_empty() {
            return None;
        }
        Some(ScoreAverages {
            structure: mean(&self.structure),
            features: mean(&self.features),
            spelling: mean(&self.spelling),
            format: mean(&self.format),
        })
    }

    /// Per-scorer trend for the most recent analysis
    pub fn trends(&self) -> Vec<ScoreTrend> {
        self.sequences()
            .into_iter()
            .filter_map(|(name, seq)| {
                let latest = *seq.back()?;
                let delta = seq
                    .len()
                    .checked_sub(2)
                    .and_then(|i| seq.get(i))
                    .map(|prev| latest - prev);
                Some(ScoreTrend {
                    name,
                    latest,
                    delta,
                    average: mean(seq),
                })
            })
            .collect()
    }
}

fn mean(values: &VecDeque<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
