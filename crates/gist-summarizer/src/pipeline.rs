//! Staged summarization pipeline
//!
//! Runs the fixed stage order over a whole network:
//! purge triples, purge sentences, choose representatives, render.
//! Each stage completes for every sentence before the next one starts.

use serde::Serialize;

use gist_core::{Network, PipelineConfig, Result, Triple};

use crate::fuser::Fuser;
use crate::stats::CompressionStats;

/// Everything one pipeline run produced
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// The fused summary
    pub summary: String,
    /// Triples removed by the purge, in document order
    pub removed_triples: Vec<Triple>,
    /// Original text of pruned sentences, in document order
    pub removed_sentences: Vec<String>,
    pub stats: CompressionStats,
}

/// Summarization pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run every stage over `network`, leaving it purged and selected
    pub fn run(&self, network: &mut Network) -> Result<PipelineReport> {
        let mut stats = CompressionStats {
            sentences_in: network.len(),
            triples_in: network.candidate_count(),
            source_chars: network.sentences().map(|s| s.text().chars().count()).sum(),
            ..Default::default()
        };

        let removed_triples = network.purge_triples_below(self.config.min_confidence);
        let removed_sentences = network.purge_sentences();
        network.choose_longest_triples();

        let fused = Fuser::new(self.config.fuse_time).fuse(network)?;

        stats.sentences_kept = network.len();
        stats.triples_purged = removed_triples.len();
        stats.sentences_fused = fused.fused_sentences;
        stats.summary_chars = fused.text.chars().count();

        tracing::info!(
            sentences_in = stats.sentences_in,
            sentences_kept = stats.sentences_kept,
            triples_purged = stats.triples_purged,
            sentences_fused = stats.sentences_fused,
            "Summarized document"
        );

        Ok(PipelineReport {
            summary: fused.text,
            removed_triples,
            removed_sentences,
            stats,
        })
    }
}
