//! Core types for the scheme discovery engine
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English and Hindi)
//! - Citizen profile (raw wire shape, all fields optional)
//! - Scheme catalog records and their eligibility predicates
//! - Lexicon attribute kinds
//! - Error types
//!
//! Nothing here performs I/O. Loading the catalog is the config crate's job,
//! normalization and matching live in the text_processing and matching crates.

pub mod attribute;
pub mod error;
pub mod language;
pub mod profile;
pub mod scheme;

pub use attribute::LexiconKind;
pub use error::{Error, Result};
pub use language::Language;
pub use profile::Profile;
pub use scheme::{Constraint, Eligibility, Scheme};
