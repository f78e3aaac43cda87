//! Ingestion of annotator output
//!
//! Converts an annotated document into the sentence network and the
//! document-wide entity table.

use gist_core::{NamedEntities, Network, PipelineConfig, Sentence, Triple};
use gist_parser::{AnnotatedDocument, AnnotatedSentence};

/// Network and entity table built from one document
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub network: Network,
    pub entities: NamedEntities,
}

impl Ingested {
    /// Diagnostic dump: every sentence with its candidates, then the
    /// entity table
    pub fn dump(&self) -> String {
        format!("{}{}", self.network, self.entities)
    }
}

/// Build the network and entity table for `document`.
///
/// Sentences are numbered from 1 in document order.
pub fn ingest(document: &AnnotatedDocument, config: &PipelineConfig) -> Ingested {
    let mut ingested = Ingested::default();

    for (ordinal, annotated) in (1u32..).zip(&document.sentences) {
        let time_entity = record_entities(&mut ingested.entities, annotated, ordinal, config);

        let candidates = annotated
            .triples
            .iter()
            .map(|t| Triple::new(&t.subject, &t.relation, &t.object, &t.confidence))
            .collect();

        let sentence = Sentence::new(ordinal, &annotated.text)
            .with_candidates(candidates)
            .with_time_entity(time_entity);
        ingested.network.add(ordinal, sentence);
    }

    tracing::debug!(
        sentences = ingested.network.len(),
        triples = ingested.network.candidate_count(),
        entities = ingested.entities.len(),
        "Ingested document"
    );
    ingested
}

/// Record the sentence's entity tokens and return its date phrase: the
/// distinct time-typed surface forms joined by spaces, in first-seen order.
fn record_entities(
    entities: &mut NamedEntities,
    sentence: &AnnotatedSentence,
    ordinal: u32,
    config: &PipelineConfig,
) -> String {
    let mut time_tokens: Vec<&str> = Vec::new();

    for token in sentence.tokens.iter().filter(|t| t.is_entity()) {
        entities.add(&token.text, &token.ner, ordinal);
        if config.is_time_type(&token.ner) && !time_tokens.contains(&token.text.as_str()) {
            time_tokens.push(&token.text);
        }
    }

    time_tokens.join(" ")
}
