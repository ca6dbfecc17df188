//! Text normalization
//!
//! Every other component goes through here first. Normalization is NFKC plus
//! whitespace trimming and collapsing. Case folding is kept separate because
//! native-script lookups must see the uncased text; lower-casing is only
//! meaningful for Latin input.

use unicode_normalization::UnicodeNormalization;

/// A normalized utterance with its derived views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    /// NFKC, trimmed, internal whitespace collapsed to single spaces
    pub text: String,
    /// `text` lower-cased
    pub lower: String,
    /// `lower` split into word tokens, joined by single spaces and padded
    /// with one space on each side (see [`token_view`])
    pub tokens: String,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whole-token containment of an already tokenized phrase
    ///
    /// `phrase` must come from [`token_key`], so that `"tamil nadu"` matches
    /// "I live in Tamil Nadu." but `"goa"` does not match "my goal".
    pub fn contains_tokens(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        let mut needle = String::with_capacity(phrase.len() + 2);
        needle.push(' ');
        needle.push_str(phrase);
        needle.push(' ');
        self.tokens.contains(&needle)
    }

    /// Like [`contains_tokens`](Self::contains_tokens), but the last word may
    /// carry a plural or possessive ending ("farmers", "bihar's")
    pub fn contains_tokens_inflected(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        let needle = format!(" {phrase}");
        self.tokens.match_indices(&needle).any(|(at, _)| {
            let rest = &self.tokens[at + needle.len()..];
            LATIN_ENDINGS.iter().any(|ending| rest.starts_with(ending))
        })
    }
}

/// Endings accepted after a Latin form, each followed by the token boundary
const LATIN_ENDINGS: &[&str] = &[" ", "s ", "es ", "'s ", "s' "];

/// Normalize a text for lookups and parsing
pub fn normalize(text: &str) -> NormalizedText {
    let text = normalize_str(text);
    let lower = text.to_lowercase();
    let tokens = token_view(&lower);
    NormalizedText { text, lower, tokens }
}

/// NFKC + trim + collapse internal whitespace runs to one space
pub fn normalize_str(text: &str) -> String {
    let nfkc: String = text.nfkc().collect();
    nfkc.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized and lower-cased
pub fn normalize_lower(text: &str) -> String {
    normalize_str(text).to_lowercase()
}

/// Remove every space from an already normalized string
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// Tokenized form of a phrase, suitable for [`NormalizedText::contains_tokens`]
pub fn token_key(phrase: &str) -> String {
    let view = token_view(&normalize_lower(phrase));
    view.trim().to_string()
}

/// Space-padded token sequence
///
/// Word characters are alphanumerics and apostrophes ("i'm" stays one token).
/// Everything else separates tokens.
fn token_view(lower: &str) -> String {
    let mut out = String::with_capacity(lower.len() + 2);
    out.push(' ');
    let mut pending_space = false;
    for c in lower.chars() {
        if c.is_alphanumeric() || c == '\'' {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        } else if out.len() > 1 {
            pending_space = true;
        }
    }
    out.push(' ');
    out
}

/// Whether a surface form is written in Latin script (ASCII)
pub fn is_latin(form: &str) -> bool {
    form.is_ascii()
}
