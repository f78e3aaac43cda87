//! Gist Summarizer - Triple-based document compression
//!
//! Takes annotator output for one document and produces its gist:
//! - Ingestion into the ordered sentence network
//! - Purge of low-confidence and degenerate triples, then of empty sentences
//! - Selection of one representative triple per sentence
//! - Rendering with date phrases fused back in

pub mod fuser;
pub mod ingest;
pub mod pipeline;
pub mod stats;
pub mod time;

pub use fuser::{fuse, FusedSummary, Fuser};
pub use ingest::{ingest, Ingested};
pub use pipeline::{Pipeline, PipelineReport};
pub use stats::CompressionStats;
pub use time::{date_and_preposition, DateShape};

use gist_core::{PipelineConfig, Result};
use gist_parser::AnnotatedDocument;

/// Ingest `document` and run the full pipeline over it
pub fn summarize(document: &AnnotatedDocument, config: &PipelineConfig) -> Result<PipelineReport> {
    let mut ingested = ingest(document, config);
    Pipeline::new(config.clone()).run(&mut ingested.network)
}
