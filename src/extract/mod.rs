//! Text extraction
//!
//! Turns raw document bytes into ordered per-page text:
//! - `pdf` - PDF documents via lopdf
//! - `plain` - UTF-8 text files as a single page
//!
//! Extractors are selected by file extension with [`extractor_for_path`].

mod pdf;
mod plain;

pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

#[cfg(test)]
pub(crate) use pdf::tests as pdf_test_support;

use crate::error::ExtractionResult;
use std::path::Path;

/// Text of a document, one entry per page in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Document Text: pages joined by a single space, in page order
    ///
    /// Pages without text (blank or image-only) contribute nothing.
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .filter(|page| !page.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Source of document text
///
/// Implementations must preserve page order and in-page text order.
pub trait TextExtractor: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Decode raw bytes into per-page text
    fn extract_pages(&self, bytes: &[u8]) -> ExtractionResult<ExtractedDocument>;
}

/// Extensions handled by [`PlainTextExtractor`]
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Pick an extractor from a file extension; anything unrecognised is PDF
pub fn extractor_for_path(path: &Path) -> Box<dyn TextExtractor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Box::new(PlainTextExtractor)
    } else {
        Box::new(PdfExtractor)
    }
}
