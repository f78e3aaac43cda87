//! Gist Parser - Annotator output loading
//!
//! The natural-language annotator (tokenizer, NER tagger, open information
//! extractor) runs outside this workspace. This crate defines the records it
//! hands over, one per sentence in document order, and the parsers that load
//! them. It also prepares raw text for the annotator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while loading annotations
#[derive(Error, Debug)]
pub enum ParserError {
    /// IO error while reading the file
    #[error("IO error reading file: {path}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Annotation document is not valid JSON for the expected shape
    #[error("Malformed annotations in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Text encoding error
    #[error("Text encoding error: {0}")]
    EncodingError(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

// ============================================================================
// Annotated Document Types
// ============================================================================

/// Everything the annotator produced for one document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Sentences in document order
    #[serde(default)]
    pub sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedDocument {
    /// Total number of extracted triples
    pub fn triple_count(&self) -> usize {
        self.sentences.iter().map(|s| s.triples.len()).sum()
    }
}

/// One annotated sentence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Raw sentence text
    pub text: String,

    /// Tokens with their entity tags
    #[serde(default)]
    pub tokens: Vec<AnnotatedToken>,

    /// Open-information triples extracted from the sentence
    #[serde(default)]
    pub triples: Vec<AnnotatedTriple>,
}

/// A token and its named-entity tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub ner: String,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, ner: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ner: ner.into(),
        }
    }

    /// True if the token takes part in entity aggregation.
    ///
    /// Single-character tags (the "outside" tag `O`) and bare commas are
    /// excluded; a comma inside a date span would otherwise split it.
    pub fn is_entity(&self) -> bool {
        self.ner.chars().count() != 1 && self.text != ","
    }
}

/// A subject/relation/object extraction with its confidence text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedTriple {
    pub subject: String,
    pub relation: String,
    pub object: String,
    #[serde(deserialize_with = "confidence_text")]
    pub confidence: String,
}

impl AnnotatedTriple {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
        confidence: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
            confidence: confidence.into(),
        }
    }
}

/// Accept confidence either as a decimal string or a JSON number
fn confidence_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Confidence {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Confidence::deserialize(deserializer)? {
        Confidence::Text(text) => text,
        Confidence::Number(number) => number.to_string(),
    })
}

// ============================================================================
// Parser Trait
// ============================================================================

/// Trait for annotation loaders
pub trait AnnotationParser: Send + Sync {
    /// Parse annotations from a string
    fn parse_str(&self, content: &str) -> Result<AnnotatedDocument>;

    /// Parse annotations from a file path
    fn parse(&self, path: &Path) -> Result<AnnotatedDocument> {
        let content = std::fs::read_to_string(path).map_err(|e| ParserError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        self.parse_str(&content)
    }
}

/// Loads annotator output serialized as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAnnotationParser;

impl AnnotationParser for JsonAnnotationParser {
    fn parse_str(&self, content: &str) -> Result<AnnotatedDocument> {
        serde_json::from_str(content).map_err(|e| ParserError::Malformed {
            path: "<string>".to_string(),
            source: e,
        })
    }

    fn parse(&self, path: &Path) -> Result<AnnotatedDocument> {
        let content = std::fs::read_to_string(path).map_err(|e| ParserError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ParserError::Malformed {
            path: path.display().to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Text Preparation
// ============================================================================

/// Join the lines of a raw document into one annotator-ready string.
///
/// Lines are trimmed and blank lines dropped. A line that already ends in
/// punctuation is followed by a space; any other line is closed with `". "`
/// so that headings and list items become sentences of their own.
pub fn normalize_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        text.push_str(line);
        if line.ends_with(|c: char| c.is_ascii_punctuation()) {
            text.push(' ');
        } else {
            text.push_str(". ");
        }
    }
    text
}

/// Read and normalize a plain-text document
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ParserError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let raw = String::from_utf8(bytes)
        .map_err(|e| ParserError::EncodingError(format!("{}: {}", path.display(), e)))?;
    Ok(normalize_text(&raw))
}

/// Path of the diagnostic dump written next to `input`.
///
/// A `.txt` or `.json` extension is replaced by `suffix`; any other name
/// simply gets `suffix` appended.
pub fn dump_path(input: &Path, suffix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = [".txt", ".json"]
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(&name);

    input.with_file_name(format!("{stem}{suffix}"))
}

// ============================================================================
// Tests
// ============================================================================
