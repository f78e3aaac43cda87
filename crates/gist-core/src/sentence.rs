//! Sentence model
//!
//! A sentence owns its original text, the triple candidates the annotator
//! extracted from it, the representative chosen among them, and the date
//! phrase observed in it.

use serde::Serialize;

use crate::formatter::format_sentence;
use crate::{GistError, Result, Triple};

/// Confidence a triple needs to survive the default purge
pub const FULL_CONFIDENCE: f64 = 1.0;

/// One sentence of the source document and its extraction data
#[derive(Debug, Clone, Serialize)]
pub struct Sentence {
    ordinal: u32,
    text: String,
    candidates: Vec<Triple>,
    representative: Option<Triple>,
    time_entity: String,
}

impl Sentence {
    /// Create a sentence with no candidates
    pub fn new(ordinal: u32, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
            candidates: Vec::new(),
            representative: None,
            time_entity: String::new(),
        }
    }

    /// Set the triple candidates
    pub fn with_candidates(mut self, candidates: Vec<Triple>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Set the date/time phrase observed in this sentence
    pub fn with_time_entity(mut self, time_entity: impl Into<String>) -> Self {
        self.time_entity = time_entity.into();
        self
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Original sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn candidates(&self) -> &[Triple] {
        &self.candidates
    }

    pub fn representative(&self) -> Option<&Triple> {
        self.representative.as_ref()
    }

    pub fn time_entity(&self) -> &str {
        &self.time_entity
    }

    /// Purge with the full-confidence policy
    pub fn purge(&mut self) -> Vec<Triple> {
        self.purge_below(FULL_CONFIDENCE)
    }

    /// Remove every candidate whose confidence is under `min_confidence`
    /// (or unparsable) and every candidate made only of one-word fields.
    ///
    /// Returns the removed triples in their original order. Calling it
    /// again with the same threshold removes nothing.
    pub fn purge_below(&mut self, min_confidence: f64) -> Vec<Triple> {
        let (kept, removed): (Vec<Triple>, Vec<Triple>) = std::mem::take(&mut self.candidates)
            .into_iter()
            .partition(|t| t.meets_confidence(min_confidence) && !t.is_degenerate());

        self.candidates = kept;
        removed
    }

    /// Select the candidate with the longest bracketed rendering.
    ///
    /// The first candidate to reach the maximum wins ties. With no
    /// candidates the representative stays unset.
    pub fn choose_longest_triple(&mut self) {
        let mut best: Option<&Triple> = None;
        for candidate in &self.candidates {
            match best {
                Some(current) if candidate.rendered_len() <= current.rendered_len() => {}
                _ => best = Some(candidate),
            }
        }

        if let Some(best) = best {
            self.representative = Some(best.clone());
        }
    }

    /// Render the representative triple as a mini-sentence
    pub fn compressed_sentence(&self) -> Result<String> {
        let triple = self
            .representative
            .as_ref()
            .ok_or(GistError::MissingRepresentative {
                ordinal: self.ordinal,
            })?;

        Ok(format_sentence(
            triple.actor(),
            triple.action(),
            triple.receiver(),
        ))
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.text)?;
        for triple in &self.candidates {
            writeln!(f, "   {}", triple)?;
        }
        writeln!(f)
    }
}
