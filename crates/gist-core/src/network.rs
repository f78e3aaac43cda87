//! Sentence network
//!
//! Ordered collection of every sentence of one document, keyed by the
//! sentence's position in the source. Iteration always follows document
//! order, including after sentences have been pruned.

use std::collections::BTreeMap;

use crate::sentence::FULL_CONFIDENCE;
use crate::{Result, Sentence, Triple};

/// All sentences of a document and their extraction data
#[derive(Debug, Clone, Default)]
pub struct Network {
    sentences: BTreeMap<u32, Sentence>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sentence at `ordinal`, replacing any sentence already there
    pub fn add(&mut self, ordinal: u32, sentence: Sentence) {
        if self.sentences.insert(ordinal, sentence).is_some() {
            tracing::warn!(ordinal, "Replaced existing sentence in network");
        }
    }

    pub fn get(&self, ordinal: u32) -> Option<&Sentence> {
        self.sentences.get(&ordinal)
    }

    /// Surviving sentences in document order
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.values()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of triple candidates across all sentences
    pub fn candidate_count(&self) -> usize {
        self.sentences.values().map(|s| s.candidates().len()).sum()
    }

    /// Purge every sentence with the full-confidence policy
    pub fn purge_triples(&mut self) -> Vec<Triple> {
        self.purge_triples_below(FULL_CONFIDENCE)
    }

    /// Purge every sentence in document order, returning all removed triples
    pub fn purge_triples_below(&mut self, min_confidence: f64) -> Vec<Triple> {
        let removed: Vec<Triple> = self
            .sentences
            .values_mut()
            .flat_map(|s| s.purge_below(min_confidence))
            .collect();

        tracing::debug!(
            removed = removed.len(),
            remaining = self.candidate_count(),
            min_confidence,
            "Purged triples"
        );
        removed
    }

    /// Drop every sentence left without candidates.
    ///
    /// Must follow [`Network::purge_triples`]; returns the original text of
    /// each dropped sentence in document order.
    pub fn purge_sentences(&mut self) -> Vec<String> {
        let mut removed = Vec::new();
        self.sentences.retain(|_, sentence| {
            if sentence.candidates().is_empty() {
                removed.push(sentence.text().to_string());
                false
            } else {
                true
            }
        });

        tracing::debug!(
            removed = removed.len(),
            remaining = self.sentences.len(),
            "Purged sentences"
        );
        removed
    }

    /// Let every surviving sentence pick its representative triple
    pub fn choose_longest_triples(&mut self) {
        for sentence in self.sentences.values_mut() {
            sentence.choose_longest_triple();
        }
    }

    /// Concatenated mini-sentences of every surviving sentence, without
    /// time fusion
    pub fn compressed_text(&self) -> Result<String> {
        let mut text = String::new();
        for sentence in self.sentences.values() {
            text.push_str(&sentence.compressed_sentence()?);
        }
        Ok(text)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sentence in self.sentences.values() {
            writeln!(f, "{}", sentence)?;
        }
        Ok(())
    }
}
