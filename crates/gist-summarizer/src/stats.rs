//! Compression statistics
//!
//! Counts of what each pipeline stage removed, kept and fused, plus
//! size ratios between the source document and its summary.

use serde::{Deserialize, Serialize};

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Sentences in the network before pruning
    pub sentences_in: usize,
    /// Sentences surviving the prune
    pub sentences_kept: usize,
    /// Triple candidates before the purge
    pub triples_in: usize,
    /// Triple candidates removed by the purge
    pub triples_purged: usize,
    /// Mini-sentences that received a date phrase
    pub sentences_fused: usize,
    /// Characters of original sentence text
    pub source_chars: usize,
    /// Characters of the summary
    pub summary_chars: usize,
}

impl CompressionStats {
    pub fn sentences_pruned(&self) -> usize {
        self.sentences_in.saturating_sub(self.sentences_kept)
    }

    pub fn triples_kept(&self) -> usize {
        self.triples_in.saturating_sub(self.triples_purged)
    }

    /// Summary size relative to the source (summary / source chars)
    pub fn compression_ratio(&self) -> f32 {
        if self.source_chars == 0 {
            0.0
        } else {
            self.summary_chars as f32 / self.source_chars as f32
        }
    }

    /// Share of triple candidates surviving the purge
    pub fn retention_rate(&self) -> f32 {
        if self.triples_in == 0 {
            0.0
        } else {
            self.triples_kept() as f32 / self.triples_in as f32
        }
    }
}

impl std::fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sentences {}/{} kept, triples {}/{} kept, {} fused, ratio {:.2}",
            self.sentences_kept,
            self.sentences_in,
            self.triples_kept(),
            self.triples_in,
            self.sentences_fused,
            self.compression_ratio()
        )
    }
}
