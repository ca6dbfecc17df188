//! Scheme catalog loading
//!
//! The catalog is a list of scheme records in JSON or YAML, chosen by file
//! extension. Records are parsed into typed predicates and checked once at
//! load time; a malformed record aborts startup instead of silently
//! miscomparing later.

use std::path::Path;
use std::sync::Arc;

use sahaj_seva_core::{Constraint, LexiconKind, Scheme};
use sahaj_seva_text_processing::Lexicon;

use crate::ConfigError;

/// Immutable, validated scheme catalog
#[derive(Debug, Clone, Default)]
pub struct SchemeCatalog {
    schemes: Arc<Vec<Scheme>>,
}

impl SchemeCatalog {
    /// Load and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(shown));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", shown, e)))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(ConfigError::InvalidValue {
                field: "catalog.path".to_string(),
                message: format!(
                    "Unsupported catalog format '{}' (expected .json, .yaml or .yml)",
                    other
                ),
            }),
        }
        .map_err(|e| match e {
            ConfigError::ParseError(message) => {
                ConfigError::ParseError(format!("{}: {}", shown, message))
            }
            other => other,
        })?;

        tracing::info!(path = %shown, schemes = catalog.len(), "Loaded scheme catalog");
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let schemes: Vec<Scheme> =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_schemes(schemes)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let schemes: Vec<Scheme> =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_schemes(schemes)
    }

    /// Validate already-parsed records
    pub fn from_schemes(schemes: Vec<Scheme>) -> Result<Self, ConfigError> {
        for scheme in &schemes {
            scheme.validate()?;
            check_portal_url(scheme);
        }
        Ok(Self {
            schemes: Arc::new(schemes),
        })
    }

    /// Records in catalog order
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Shared handle for request handlers
    pub fn shared(&self) -> Arc<Vec<Scheme>> {
        Arc::clone(&self.schemes)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Warn about constraint tokens no lexicon entry resolves to
    ///
    /// Allowed values are compared with canonical profile tokens, so a
    /// catalog listing "Orissa" instead of "odisha" would never match. Unknown
    /// occupations are legitimate (profiles can carry free-form ones), so
    /// only gender and state are reported. Returns the number of findings.
    pub fn audit_tokens(&self, lexicon: &Lexicon) -> usize {
        let mut findings = 0;
        for scheme in self.schemes.iter() {
            let checks = [
                (LexiconKind::Gender, &scheme.eligibility.gender),
                (LexiconKind::State, &scheme.eligibility.state),
            ];
            for (kind, constraint) in checks {
                let Constraint::OneOf(tokens) = constraint else {
                    continue;
                };
                for token in tokens.iter().filter(|t| !lexicon.is_canonical(kind, t)) {
                    findings += 1;
                    tracing::warn!(
                        scheme = %scheme.name,
                        kind = %kind,
                        token = %token,
                        "Constraint token is not a canonical value and can never match"
                    );
                }
            }
        }
        findings
    }
}

fn check_portal_url(scheme: &Scheme) {
    let url = scheme.portal_url.trim();
    if url.is_empty() {
        return;
    }
    match url::Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some() => {}
        _ => tracing::warn!(scheme = %scheme.name, url = %url, "Scheme portal_url is not a valid URL"),
    }
}
