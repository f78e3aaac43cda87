//! Gist Core - Data model for triple-based document gisting
//!
//! This crate defines the core abstractions used throughout the system:
//! - Extraction models (triples, relatedness slots, named entities)
//! - Sentences and the ordered sentence network
//! - Rendering of a triple into a mini-sentence
//! - Common error types
//! - Configuration management

pub mod config;
pub mod formatter;
pub mod network;
pub mod sentence;

pub use config::{ConfigError, GistConfig, LoggingConfig, OutputConfig, PipelineConfig};
pub use formatter::format_sentence;
pub use network::Network;
pub use sentence::Sentence;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for gist operations
#[derive(Error, Debug)]
pub enum GistError {
    /// Rendering was requested before a representative triple was selected
    #[error("Sentence {ordinal} has no representative triple; run selection before rendering")]
    MissingRepresentative { ordinal: u32 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GistError>;

// ============================================================================
// Triples
// ============================================================================

/// Cross-sentence relatedness links reserved on every triple.
///
/// Each list holds the ordinals of sentences related through:
/// - `arguments`: argument semantic relatedness
/// - `actions`: action-verb semantic relatedness
/// - `coreference`: shared coreference chains
///
/// Nothing in the pipeline populates these yet; they travel with the
/// triple so that a linking pass can be added without a new type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relatedness {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coreference: Vec<u32>,
}

impl Relatedness {
    /// True when no links of any kind are recorded
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.actions.is_empty() && self.coreference.is_empty()
    }
}

/// An actor-action-receiver extraction with the annotator's confidence.
///
/// Immutable once built: fields are only reachable through accessors.
/// Confidence is kept as the text the annotator emitted and parsed on
/// demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    actor: String,
    action: String,
    receiver: String,
    confidence: String,
    #[serde(default, skip_serializing_if = "Relatedness::is_empty")]
    relatedness: Relatedness,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        receiver: impl Into<String>,
        confidence: impl Into<String>,
    ) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            receiver: receiver.into(),
            confidence: confidence.into(),
            relatedness: Relatedness::default(),
        }
    }

    /// Attach relatedness links
    pub fn with_relatedness(mut self, relatedness: Relatedness) -> Self {
        self.relatedness = relatedness;
        self
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Raw confidence text as emitted by the annotator
    pub fn confidence(&self) -> &str {
        &self.confidence
    }

    pub fn relatedness(&self) -> &Relatedness {
        &self.relatedness
    }

    /// Parsed confidence, or `None` when the text is not a finite number
    pub fn confidence_value(&self) -> Option<f64> {
        self.confidence
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
    }

    /// True when the confidence reaches `threshold`.
    ///
    /// Unparsable confidence never meets a threshold.
    pub fn meets_confidence(&self, threshold: f64) -> bool {
        self.confidence_value().is_some_and(|c| c >= threshold)
    }

    /// True when actor, action and receiver are each a single word
    pub fn is_degenerate(&self) -> bool {
        is_one_word(&self.actor) && is_one_word(&self.action) && is_one_word(&self.receiver)
    }

    /// Length in characters of the bracketed rendering
    pub fn rendered_len(&self) -> usize {
        // "[" + " | " + " | " + "]"
        8 + self.actor.chars().count()
            + self.action.chars().count()
            + self.receiver.chars().count()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} | {} | {}]", self.actor, self.action, self.receiver)
    }
}

/// A field is one word when it has no whitespace once trimmed.
/// The empty string counts as one word.
fn is_one_word(field: &str) -> bool {
    !field.trim().contains(char::is_whitespace)
}

// ============================================================================
// Named Entities
// ============================================================================

/// A named, typed span seen in one or more sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Surface word as it appeared in the text
    pub surface_form: String,

    /// Entity tag assigned by the annotator (e.g. "DATE", "PERSON")
    pub entity_type: String,

    /// Every sentence ordinal the entity was seen in, in document order
    pub sentence_ordinals: Vec<u32>,
}

impl NamedEntity {
    /// Create a new entity first seen in `ordinal`
    pub fn new(surface_form: impl Into<String>, entity_type: impl Into<String>, ordinal: u32) -> Self {
        Self {
            surface_form: surface_form.into(),
            entity_type: entity_type.into(),
            sentence_ordinals: vec![ordinal],
        }
    }

    /// True if the entity was seen in the given sentence
    pub fn appears_in(&self, ordinal: u32) -> bool {
        self.sentence_ordinals.contains(&ordinal)
    }
}

/// Document-wide entity table, keyed by surface form in first-seen order
#[derive(Debug, Clone, Default)]
pub struct NamedEntities {
    entities: Vec<NamedEntity>,
    /// Lookup index (surface form -> position in `entities`)
    lookup: HashMap<String, usize>,
}

impl NamedEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting of `surface` typed `entity_type` in sentence `ordinal`.
    ///
    /// A repeated surface form keeps its first-seen position, takes the
    /// latest type, and gains the ordinal unless it is already the last one
    /// recorded.
    pub fn add(&mut self, surface: &str, entity_type: &str, ordinal: u32) {
        if let Some(&idx) = self.lookup.get(surface) {
            let entity = &mut self.entities[idx];
            entity.entity_type = entity_type.to_string();
            if entity.sentence_ordinals.last() != Some(&ordinal) {
                entity.sentence_ordinals.push(ordinal);
            }
            return;
        }

        self.lookup.insert(surface.to_string(), self.entities.len());
        self.entities
            .push(NamedEntity::new(surface, entity_type, ordinal));
    }

    /// Get an entity by surface form
    pub fn get(&self, surface: &str) -> Option<&NamedEntity> {
        self.lookup.get(surface).map(|&idx| &self.entities[idx])
    }

    /// Entity type for a surface form
    pub fn entity_type(&self, surface: &str) -> Option<&str> {
        self.get(surface).map(|e| e.entity_type.as_str())
    }

    /// Entities seen in the given sentence, in first-seen order
    pub fn in_sentence(&self, ordinal: u32) -> impl Iterator<Item = &NamedEntity> {
        self.entities.iter().filter(move |e| e.appears_in(ordinal))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl std::fmt::Display for NamedEntities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entity in &self.entities {
            writeln!(f, "{} -> {}", entity.surface_form, entity.entity_type)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
