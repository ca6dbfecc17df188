//! Ordered pattern lists, compiled once at program start
//!
//! Every list is tried top to bottom; the first pattern that yields a usable
//! value wins. The `&'static str` attached to each pattern names the rule so
//! callers can see why a field resolved the way it did.
//!
//! All patterns run on lower-cased, NFKC-normalized text whose Devanagari
//! digits were already turned into ASCII, so they only match `[0-9]`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Income multiplier for a numeric capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AmountMultiplier {
    Unit,     // 1
    Thousand, // 1,000
    Lakh,     // 100,000
}

impl AmountMultiplier {
    pub(crate) fn value(&self) -> f64 {
        match self {
            AmountMultiplier::Unit => 1.0,
            AmountMultiplier::Thousand => 1_000.0,
            AmountMultiplier::Lakh => 100_000.0,
        }
    }
}

/// How a captured age group is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AgeCapture {
    Digits,
    HindiWord,
}

// Age: number next to an age word, age keyword before a number, Hindi number
// word before "years". The bare-number fallback is handled separately.
pub(crate) static AGE_PATTERNS: Lazy<Vec<(Regex, AgeCapture, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\b([0-9]{1,3})\s*-?\s*(?:years?|yrs?)\s*-?\s*(?:old|of\s+age)\b").unwrap(),
            AgeCapture::Digits,
            "years_old",
        ),
        (
            Regex::new(r"\b([0-9]{1,3})\s*(?:साल|वर्ष|बरस)\b").unwrap(),
            AgeCapture::Digits,
            "years_native",
        ),
        (
            Regex::new(r"\b(?:my\s+age\s+is|age\s*(?:is|:|-)?|aged)\s*([0-9]{1,3})\b").unwrap(),
            AgeCapture::Digits,
            "age_keyword",
        ),
        (
            Regex::new(r"(?:उम्र|उमर|आयु)\s*(?:है|:|-)?\s*([0-9]{1,3})\b").unwrap(),
            AgeCapture::Digits,
            "age_keyword_native",
        ),
        (
            Regex::new(r"(\S+)\s+(?:साल|वर्ष|बरस)\b").unwrap(),
            AgeCapture::HindiWord,
            "years_native_word",
        ),
    ]
});

pub(crate) static BARE_AGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([0-9]{1,2})\b").unwrap());

// A number directly followed by one of these is money, not an age
pub(crate) static MONEY_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:lakhs?|lacs?|thousand|k\b|crores?|लाख|हज\x{093C}?ार|करोड\x{093C}?|%|percent|rupees?|rs\b|रुपय?े|रुपए)")
        .unwrap()
});

// A number directly preceded by one of these is money, not an age
pub(crate) static MONEY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:₹|\brs\.?|\binr|\brupees?)\s*$").unwrap());

// Income cascade
pub(crate) static INCOME_PATTERNS: Lazy<Vec<(Regex, AmountMultiplier, &'static str)>> =
    Lazy::new(|| {
        vec![
            (
                Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:lakhs?|lacs?|लाख)").unwrap(),
                AmountMultiplier::Lakh,
                "lakh",
            ),
            (
                Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:thousand|हज\x{093C}?ार)").unwrap(),
                AmountMultiplier::Thousand,
                "thousand",
            ),
            (
                Regex::new(r"\b([0-9]+(?:\.[0-9]+)?)\s*k\b").unwrap(),
                AmountMultiplier::Thousand,
                "k_suffix",
            ),
            (
                Regex::new(r"(?:₹|\brs\.?|\binr\b|\brupees?\b)\s*([0-9][0-9,]{2,}(?:\.[0-9]+)?)").unwrap(),
                AmountMultiplier::Unit,
                "currency_prefix",
            ),
            (
                Regex::new(r"\b([0-9][0-9,]{2,}(?:\.[0-9]+)?)\s*(?:rupees?\b|rs\b|₹|रुपय?े|रुपए)").unwrap(),
                AmountMultiplier::Unit,
                "currency_suffix",
            ),
            (
                Regex::new(r"\b([0-9]{5,9})\b").unwrap(),
                AmountMultiplier::Unit,
                "bare_digits",
            ),
        ]
    });

// "ढाई लाख": a Hindi number word before lakh
pub(crate) static INCOME_HINDI_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S+)\s+लाख").unwrap());

// Weak English self-description, last resort for occupation
pub(crate) static OCCUPATION_SELF_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:i\s+am|i'm|im)\s+(?:a\s+|an\s+)?([a-z]{3,20})\b").unwrap()
});

/// Words that follow "I am" without naming an occupation
pub(crate) const SELF_DESCRIPTION_STOP_WORDS: &[&str] = &[
    "from", "not", "very", "also", "the", "living", "staying", "looking", "currently", "still",
    "here", "now", "interested", "eligible", "applying", "married", "unmarried", "single",
    "years", "year", "old", "aged", "and", "poor", "working", "resident", "native", "based",
];
