//! Error types for document analysis
//!
//! Only text extraction can fail. Scoring is total over any string, so
//! `ExtractionError` is the single error kind the pipeline surfaces.

use std::path::PathBuf;
use thiserror::Error;

/// The document could not be read, decoded, or parsed into text
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Failed to extract text from page {page}: {message}")]
    Page { page: u32, message: String },

    #[error("Document is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
