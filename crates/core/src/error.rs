//! Error types shared across crates

use thiserror::Error;

/// Core errors
///
/// Absence of information is never represented here: a field that could not be
/// extracted, a value with no lexicon entry and a profile that lacks a field a
/// scheme needs are all ordinary values. Only programming errors and catalog
/// integrity faults surface as `Error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown lexicon kind: {0}")]
    UnknownKind(String),

    #[error("Alias `{alias}` targets `{canonical}`, which is not a canonical {kind}")]
    UnknownCanonical {
        kind: String,
        alias: String,
        canonical: String,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Malformed constraint `{field}`: {message}")]
    MalformedConstraint { field: String, message: String },

    #[error("Invalid scheme `{scheme}`: {message}")]
    InvalidScheme { scheme: String, message: String },
}

impl Error {
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedConstraint {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
