//! docscore - heuristic document scoring
//!
//! Extracts text from a document (PDF via lopdf, or plain text) and scores it
//! with four independent heuristics: structure, features, spelling and
//! format. A naive model matcher names the product the document is about.
//!
//! ```no_run
//! use docscore::AnalysisPipeline;
//!
//! let pipeline = AnalysisPipeline::default();
//! let report = pipeline.analyze_path("manual.pdf".as_ref())?;
//! println!("{}", docscore::reporters::report(&report, "text")?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scorers;

pub use error::{ExtractionError, ExtractionResult};
pub use models::AnalysisReport;
pub use pipeline::AnalysisPipeline;
