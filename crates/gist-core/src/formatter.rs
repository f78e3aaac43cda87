//! Mini-sentence rendering
//!
//! Turns an actor/action/receiver triple into a short sentence and repairs
//! the token-boundary artifacts that glossed extractor output carries
//! (detached clitics, spaced punctuation, split currency and percent signs).

use once_cell::sync::Lazy;
use regex::Regex;

/// Cleanup substitutions, applied in this exact order.
/// Later patterns may see the output of earlier ones.
static CLEANUPS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\s's\s", "'s "),
        (r"\s'd\s", "'d "),
        (r"\s'ed\s", "'ed "),
        (r"\s're\s", "'re "),
        (r"\s,\s", ", "),
        (r"\s;\s", "; "),
        (r"(\w)s\s'\s", "${1}s' "),
        (r"\$\s", "$$"),
        (r"\s%\s", "% "),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Render a triple's fields as `"{Actor} {action} {receiver}. "`.
///
/// The actor's first character is upper-cased, the action is lower-cased
/// and the receiver is left alone.
pub fn format_sentence(actor: &str, action: &str, receiver: &str) -> String {
    let sentence = format!(
        "{} {} {}. ",
        format_actor(actor),
        format_action(action),
        receiver
    );
    remove_extra_spaces(sentence)
}

fn remove_extra_spaces(mut sentence: String) -> String {
    for (regex, replacement) in CLEANUPS.iter() {
        sentence = regex.replace_all(&sentence, *replacement).into_owned();
    }
    sentence
}

fn format_actor(actor: &str) -> String {
    let mut chars = actor.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => actor.to_string(),
    }
}

fn format_action(action: &str) -> String {
    action.to_lowercase()
}
