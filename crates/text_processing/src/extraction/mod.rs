//! Profile extraction from free text
//!
//! Rule-based, best-effort parsing of one utterance into a [`Profile`].
//! Works on English, Hindi and romanized Hindi input without any model.
//!
//! Five independent field parsers run over the same normalized text. Each
//! returns `None` when it finds nothing; a miss never affects other fields and
//! never raises.
//!
//! ## Rule order
//!
//! - Age: number next to an age word, age keyword before a number, Hindi
//!   number word before "years", then the first bare 1-2 digit number that is
//!   not part of an amount of money. Values outside (0, 130) are discarded and
//!   the next rule is tried.
//! - Gender / occupation / state: lexicon scan in table order. Occupation
//!   falls back to the word after "I am (a|an)", returned verbatim.
//! - Income: lakh, thousand, `k` suffix, currency-marked digits, bare 5-9
//!   digit number, Hindi number word before lakh.

mod patterns;

use std::sync::Arc;

use sahaj_seva_core::{LexiconKind, Profile};

use crate::hindi;
use crate::lexicon::Lexicon;
use crate::normalize::{normalize, NormalizedText};
use patterns::{
    AgeCapture, AGE_PATTERNS, BARE_AGE, INCOME_HINDI_WORD, INCOME_PATTERNS, MONEY_PREFIX,
    MONEY_SUFFIX, OCCUPATION_SELF_DESCRIPTION, SELF_DESCRIPTION_STOP_WORDS,
};

/// Exclusive plausibility bounds for an age
const AGE_MIN_EXCLUSIVE: u32 = 0;
const AGE_MAX_EXCLUSIVE: u32 = 130;

/// A parsed field value and the rule that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch<T> {
    pub value: T,
    pub rule: &'static str,
}

impl<T> FieldMatch<T> {
    fn new(value: T, rule: &'static str) -> Self {
        Self { value, rule }
    }
}

/// Per-field extraction results with their rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedProfile {
    pub age: Option<FieldMatch<u32>>,
    pub gender: Option<FieldMatch<String>>,
    pub occupation: Option<FieldMatch<String>>,
    pub income: Option<FieldMatch<f64>>,
    pub state: Option<FieldMatch<String>>,
}

impl ExtractedProfile {
    pub fn into_profile(self) -> Profile {
        Profile {
            age: self.age.map(|m| m.value),
            gender: self.gender.map(|m| m.value).unwrap_or_default(),
            occupation: self.occupation.map(|m| m.value).unwrap_or_default(),
            income: self.income.map(|m| m.value),
            state: self.state.map(|m| m.value).unwrap_or_default(),
        }
    }
}

/// Free-text profile extractor
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    lexicon: Arc<Lexicon>,
}

impl ProfileExtractor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Extract a profile; fields that could not be found stay empty
    pub fn extract(&self, text: &str) -> Profile {
        self.extract_detailed(text).into_profile()
    }

    /// Extract a profile, keeping the rule behind every field
    pub fn extract_detailed(&self, text: &str) -> ExtractedProfile {
        let normalized = prepare(text);
        let extracted = ExtractedProfile {
            age: self.age_from(&normalized),
            gender: self.scan(LexiconKind::Gender, &normalized),
            occupation: self.occupation_from(&normalized),
            income: self.income_from(&normalized),
            state: self.scan(LexiconKind::State, &normalized),
        };
        tracing::debug!(
            age = ?extracted.age.as_ref().map(|m| m.rule),
            gender = ?extracted.gender.as_ref().map(|m| m.rule),
            occupation = ?extracted.occupation.as_ref().map(|m| m.rule),
            income = ?extracted.income.as_ref().map(|m| m.rule),
            state = ?extracted.state.as_ref().map(|m| m.rule),
            "Profile extracted"
        );
        extracted
    }

    pub fn extract_age(&self, text: &str) -> Option<FieldMatch<u32>> {
        self.age_from(&prepare(text))
    }

    pub fn extract_gender(&self, text: &str) -> Option<FieldMatch<String>> {
        self.scan(LexiconKind::Gender, &prepare(text))
    }

    pub fn extract_occupation(&self, text: &str) -> Option<FieldMatch<String>> {
        self.occupation_from(&prepare(text))
    }

    pub fn extract_income(&self, text: &str) -> Option<FieldMatch<f64>> {
        self.income_from(&prepare(text))
    }

    pub fn extract_state(&self, text: &str) -> Option<FieldMatch<String>> {
        self.scan(LexiconKind::State, &prepare(text))
    }

    fn age_from(&self, text: &NormalizedText) -> Option<FieldMatch<u32>> {
        for (pattern, capture, rule) in AGE_PATTERNS.iter() {
            // Only the first occurrence of each pattern is considered
            let Some(caps) = pattern.captures(&text.lower) else {
                continue;
            };
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = match capture {
                AgeCapture::Digits => raw.parse::<u32>().ok(),
                AgeCapture::HindiWord => hindi::word_to_number(raw)
                    .filter(|v| v.fract() == 0.0)
                    .map(|v| v as u32),
            };
            match value {
                Some(age) if is_plausible_age(age) => {
                    tracing::trace!(age, rule, "Age matched");
                    return Some(FieldMatch::new(age, *rule));
                }
                Some(age) => {
                    tracing::trace!(age, rule, "Implausible age discarded");
                }
                None => {}
            }
        }

        // First bare number that is not an amount of money
        BARE_AGE
            .find_iter(&text.lower)
            .filter(|m| is_standalone_number(&text.lower, m.start(), m.end()))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .find(|age| is_plausible_age(*age))
            .map(|age| FieldMatch::new(age, "bare_number"))
    }

    fn occupation_from(&self, text: &NormalizedText) -> Option<FieldMatch<String>> {
        if let Some(found) = self.scan(LexiconKind::Occupation, text) {
            return Some(found);
        }

        let caps = OCCUPATION_SELF_DESCRIPTION.captures(&text.lower)?;
        let word = caps.get(1)?.as_str();
        let gender = self.lexicon.table(LexiconKind::Gender);
        if SELF_DESCRIPTION_STOP_WORDS.contains(&word) || gender.lookup(word).is_some() {
            return None;
        }
        tracing::trace!(occupation = %word, "Occupation guessed from self-description");
        Some(FieldMatch::new(word.to_string(), "self_description"))
    }

    fn income_from(&self, text: &NormalizedText) -> Option<FieldMatch<f64>> {
        for (pattern, multiplier, rule) in INCOME_PATTERNS.iter() {
            let Some(caps) = pattern.captures(&text.lower) else {
                continue;
            };
            let digits: String = caps
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .chars()
                .filter(|c| *c != ',')
                .collect();
            if let Ok(amount) = digits.parse::<f64>() {
                let income = amount * multiplier.value();
                tracing::trace!(income, rule, "Income matched");
                return Some(FieldMatch::new(income, *rule));
            }
        }

        let caps = INCOME_HINDI_WORD.captures(&text.lower)?;
        let amount = hindi::word_to_number(caps.get(1)?.as_str())?;
        Some(FieldMatch::new(amount * 100_000.0, "lakh_native_word"))
    }

    fn scan(&self, kind: LexiconKind, text: &NormalizedText) -> Option<FieldMatch<String>> {
        let entry = self.lexicon.table(kind).scan(text)?;
        tracing::trace!(kind = %kind, value = %entry.canonical, "Lexicon scan matched");
        Some(FieldMatch::new(entry.canonical.clone(), "lexicon"))
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }
}

fn prepare(text: &str) -> NormalizedText {
    normalize(&hindi::to_ascii_digits(text))
}

fn is_plausible_age(age: u32) -> bool {
    age > AGE_MIN_EXCLUSIVE && age < AGE_MAX_EXCLUSIVE
}

/// Not a fragment of a decimal or grouped number and not next to a money word
fn is_standalone_number(text: &str, start: usize, end: usize) -> bool {
    let before = &text[..start];
    let after = &text[end..];
    let glued = |c: Option<char>| matches!(c, Some('.') | Some(','));
    let digit_after_glue = after.chars().nth(1).is_some_and(|c| c.is_ascii_digit());
    let digit_before_glue = before.chars().rev().nth(1).is_some_and(|c| c.is_ascii_digit());

    if glued(after.chars().next()) && digit_after_glue {
        return false;
    }
    if glued(before.chars().next_back()) && digit_before_glue {
        return false;
    }
    !MONEY_SUFFIX.is_match(after) && !MONEY_PREFIX.is_match(before)
}
