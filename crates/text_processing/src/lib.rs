//! Text processing for profile normalization
//!
//! This crate turns what a citizen typed or said into canonical profile data:
//! - **Normalization**: NFKC, whitespace collapsing, token views
//! - **Lexicons**: bilingual (English/Hindi) gender, occupation and region tables
//! - **Extraction**: rule-based profile parsing from one free-text utterance
//! - **Canonicalization**: raw attribute values onto canonical tokens
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sahaj_seva_text_processing::{Canonicalizer, Lexicon, ProfileExtractor};
//!
//! let lexicon = Arc::new(Lexicon::builtin());
//! let extractor = ProfileExtractor::new(lexicon.clone());
//! let canonicalizer = Canonicalizer::new(lexicon);
//!
//! let raw = extractor.extract("I am 62 years old, a farmer from Orissa");
//! let profile = canonicalizer.canonicalize_profile(&raw);
//! assert_eq!(profile.age(), Some(62));
//! assert_eq!(profile.state(), Some("odisha"));
//! ```

pub mod canonicalizer;
pub mod extraction;
pub mod hindi;
pub mod lexicon;
pub mod normalize;
pub mod profile;

pub use canonicalizer::Canonicalizer;
pub use extraction::{ExtractedProfile, FieldMatch, ProfileExtractor};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconEntry, LexiconTable, RegionType};
pub use normalize::{normalize, NormalizedText};
pub use profile::CanonicalProfile;
