//! Summary concatenation with date fusion
//!
//! Renders each surviving sentence's representative triple and, when the
//! mini-sentence lost part of the sentence's date phrase, splices the
//! phrase back in before the closing punctuation.

use gist_core::{Network, Result};

use crate::time::date_and_preposition;

/// Concatenated summary and fusion bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FusedSummary {
    /// The summary text, sentences in document order
    pub text: String,
    /// Number of mini-sentences that received a date phrase
    pub fused_sentences: usize,
}

/// Walks a selected network and emits the summary
#[derive(Debug, Clone, Copy)]
pub struct Fuser {
    fuse_time: bool,
}

impl Fuser {
    /// Create a fuser; with `fuse_time` off mini-sentences are emitted as is
    pub fn new(fuse_time: bool) -> Self {
        Self { fuse_time }
    }

    /// Render every sentence of `network` in order.
    ///
    /// Fails if any sentence has not had its representative selected.
    pub fn fuse(&self, network: &Network) -> Result<FusedSummary> {
        let mut summary = FusedSummary::default();

        for sentence in network.sentences() {
            let mini = sentence.compressed_sentence()?;

            if self.fuse_time && needs_to_be_appended(&mini, sentence.time_entity()) {
                let fused = append_time(&mini, sentence.time_entity());
                if fused != mini {
                    summary.fused_sentences += 1;
                    tracing::trace!(ordinal = sentence.ordinal(), "Fused date phrase");
                }
                summary.text.push_str(&fused);
            } else {
                summary.text.push_str(&mini);
            }
        }

        Ok(summary)
    }
}

impl Default for Fuser {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Render and fuse a network with time fusion enabled
pub fn fuse(network: &Network) -> Result<String> {
    Fuser::default().fuse(network).map(|s| s.text)
}

/// True when some token of the date phrase is missing from the sentence.
///
/// An empty phrase never needs fusion.
pub fn needs_to_be_appended(sentence: &str, time: &str) -> bool {
    time.split_whitespace().any(|token| !sentence.contains(token))
}

/// Splice the prepositional date fragment in front of the sentence's last
/// two characters (the closing period and space).
pub fn append_time(sentence: &str, time: &str) -> String {
    let fragment = date_and_preposition(time);
    if fragment.is_empty() {
        return sentence.to_string();
    }

    let split = sentence
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut fused = String::with_capacity(sentence.len() + fragment.len());
    fused.push_str(&sentence[..split]);
    fused.push_str(&fragment);
    fused.push_str(&sentence[split..]);
    fused
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_core::{GistError, Sentence, Triple};

    fn selected_network(sentences: Vec<Sentence>) -> Network {
        let mut network = Network::new();
        for sentence in sentences {
            network.add(sentence.ordinal(), sentence);
        }
        network.choose_longest_triples();
        network
    }

    #[test]
    fn test_year_fused() {
        assert_eq!(
            append_time("The company grew. ", "1990"),
            "The company grew in 1990. "
        );
    }

    #[test]
    fn test_partial_date_still_fused() {
        let mini = "Sales peaked in 1990. ";
        assert!(needs_to_be_appended(mini, "March 3 1990"));
        assert_eq!(
            append_time(mini, "March 3 1990"),
            "Sales peaked in 1990 on March 3 1990. "
        );
    }

    #[test]
    fn test_present_date_not_fused() {
        assert!(!needs_to_be_appended("He was born in 1990. ", "1990"));
        assert!(!needs_to_be_appended(
            "He was born on March 3 1990. ",
            "March 3 1990"
        ));
        assert!(!needs_to_be_appended("He left. ", ""));
        assert!(!needs_to_be_appended("He left. ", "   "));
    }

    #[test]
    fn test_unclassified_date_leaves_sentence() {
        assert_eq!(append_time("He left. ", "last week"), "He left. ");
    }

    #[test]
    fn test_only_final_period_touched() {
        assert_eq!(
            append_time("U.S. sales grew. ", "1990"),
            "U.S. sales grew in 1990. "
        );
    }

    #[test]
    fn test_fuser_over_network() {
        let network = selected_network(vec![
            Sentence::new(1, "In 1990 the company grew.")
                .with_candidates(vec![Triple::new("the company", "grew", "rapidly", "1.0")])
                .with_time_entity("1990"),
            Sentence::new(2, "Tom ate the apple.")
                .with_candidates(vec![Triple::new("tom", "ate", "the apple", "1.0")]),
        ]);

        let fused = Fuser::new(true).fuse(&network).unwrap();
        assert_eq!(
            fused.text,
            "The company grew rapidly in 1990. Tom ate the apple. "
        );
        assert_eq!(fused.fused_sentences, 1);

        let plain = Fuser::new(false).fuse(&network).unwrap();
        assert_eq!(plain.text, "The company grew rapidly. Tom ate the apple. ");
        assert_eq!(plain.fused_sentences, 0);
    }

    #[test]
    fn test_fuser_requires_selection() {
        let mut network = Network::new();
        network.add(
            1,
            Sentence::new(1, "unselected")
                .with_candidates(vec![Triple::new("a b", "c", "d", "1.0")]),
        );

        assert!(matches!(
            fuse(&network),
            Err(GistError::MissingRepresentative { ordinal: 1 })
        ));
    }
}
