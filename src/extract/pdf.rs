//! PDF text extraction via lopdf
//!
//! Pages are visited in page-number order. A page whose content cannot be
//! decoded fails the whole document rather than being silently skipped.

use super::{ExtractedDocument, TextExtractor};
use crate::error::{ExtractionError, ExtractionResult};
use lopdf::Document;
use tracing::debug;

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract_pages(&self, bytes: &[u8]) -> ExtractionResult<ExtractedDocument> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Load(e.to_string()))?;

        // get_pages() is a BTreeMap keyed by page number
        let pages = doc.get_pages();
        debug!("PDF has {} page(s)", pages.len());

        let mut texts = Vec::with_capacity(pages.len());
        for page_num in pages.keys().copied() {
            let text = doc
                .extract_text(&[page_num])
                .map_err(|e| ExtractionError::Page {
                    page: page_num,
                    message: e.to_string(),
                })?;
            // lopdf terminates each text object with a newline
            texts.push(text.trim_end().to_string());
        }

        Ok(ExtractedDocument::new(texts))
    }
}
