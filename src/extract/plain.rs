//! Plain-text extractor: the whole file is one page

use super::{ExtractedDocument, TextExtractor};
use crate::error::ExtractionResult;

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn extract_pages(&self, bytes: &[u8]) -> ExtractionResult<ExtractedDocument> {
        let text = String::from_utf8(bytes.to_vec())?;
        Ok(ExtractedDocument::new(vec![text]))
    }
}
