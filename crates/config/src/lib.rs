//! Configuration management for the scheme finder
//!
//! Supports loading configuration from:
//! - YAML/TOML/JSON files under `config/`
//! - Environment variables (`SAHAJ_SEVA__` prefix)
//!
//! The scheme catalog is a separate data file (JSON or YAML) whose path comes
//! from `catalog.path`. It is loaded once at startup and checked for integrity
//! before anything is served.

pub mod catalog;
pub mod lexicon;
pub mod settings;

pub use catalog::SchemeCatalog;
pub use lexicon::LexiconOverlayConfig;
pub use settings::{
    load_settings, load_settings_from, CatalogConfig, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<sahaj_seva_core::Error> for ConfigError {
    fn from(err: sahaj_seva_core::Error) -> Self {
        use sahaj_seva_core::Error;

        match err {
            Error::UnknownCanonical { ref kind, .. } => ConfigError::InvalidValue {
                field: format!("lexicon.{}", kind),
                message: err.to_string(),
            },
            Error::UnknownKind(_) => ConfigError::InvalidValue {
                field: "lexicon".to_string(),
                message: err.to_string(),
            },
            Error::InvalidScheme { .. } | Error::MalformedConstraint { .. } => {
                ConfigError::InvalidValue {
                    field: "catalog".to_string(),
                    message: err.to_string(),
                }
            }
            Error::UnknownLanguage(_) => ConfigError::ParseError(err.to_string()),
        }
    }
}
