//! Feature presence: images, tables, references
//!
//! Markers are matched as exact, case-sensitive substrings: "Tables" counts,
//! "table" does not.

use super::base::Scorer;
use crate::models::{mean_of, FeatureCheck};

const IMAGE_MARKER: &str = "Image";
const TABLE_MARKER: &str = "Table";
const REFERENCES_MARKER: &str = "References";

pub struct FeatureScorer;

impl Scorer for FeatureScorer {
    type Output = FeatureCheck;

    fn name(&self) -> &'static str {
        "features"
    }

    fn description(&self) -> &'static str {
        "Checks for image, table, and reference markers"
    }

    fn score(&self, text: &str) -> FeatureCheck {
        let has_images = text.contains(IMAGE_MARKER);
        let has_tables = text.contains(TABLE_MARKER);
        let has_references = text.contains(REFERENCES_MARKER);

        FeatureCheck {
            has_images,
            has_tables,
            has_references,
            score: mean_of(&[has_images, has_tables, has_references]),
        }
    }
}
