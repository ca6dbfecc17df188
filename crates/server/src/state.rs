//! Application State
//!
//! Shared, read-only state across all handlers. Built once at startup; the
//! catalog and lexicons are never mutated afterwards, so handlers share it
//! without locking.

use std::collections::BTreeMap;
use std::sync::Arc;

use sahaj_seva_config::{ConfigError, SchemeCatalog, Settings};
use sahaj_seva_core::LexiconKind;
use sahaj_seva_matching::{meta, SchemeFinder, SchemeItem, StateItem};
use sahaj_seva_text_processing::{Lexicon, ProfileExtractor};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub extractor: Arc<ProfileExtractor>,
    pub finder: SchemeFinder,
    /// Precomputed `/api/meta/states` listing
    pub states: Arc<Vec<StateItem>>,
    /// Precomputed `/api/meta/schemes` listing
    pub scheme_index: Arc<Vec<SchemeItem>>,
}

impl AppState {
    /// Assemble state from an already-loaded catalog and lexicon
    pub fn new(config: Settings, catalog: &SchemeCatalog, lexicon: Lexicon) -> Self {
        let lexicon = Arc::new(lexicon);
        let portals = canonical_state_portals(&lexicon, &config.catalog.state_portals);
        let finder =
            SchemeFinder::new(catalog.shared(), lexicon.clone()).with_state_portals(portals);

        Self {
            states: Arc::new(meta::states(&lexicon)),
            scheme_index: Arc::new(meta::schemes(catalog.schemes())),
            extractor: Arc::new(ProfileExtractor::new(lexicon)),
            finder,
            config: Arc::new(config),
        }
    }

    /// Build lexicon overlays and load the catalog named in `config`
    ///
    /// In strict environments a catalog token that no lexicon entry knows
    /// is an error; elsewhere it is only logged.
    pub fn from_settings(config: Settings) -> Result<Self, ConfigError> {
        let lexicon = config.lexicon.build_lexicon()?;
        let catalog = SchemeCatalog::load(&config.catalog.path)?;

        let findings = catalog.audit_tokens(&lexicon);
        if findings > 0 && config.environment.is_strict() {
            return Err(ConfigError::InvalidValue {
                field: "catalog".to_string(),
                message: format!("{} constraint tokens are not canonical values", findings),
            });
        }

        Ok(Self::new(config, &catalog, lexicon))
    }

    pub fn scheme_count(&self) -> usize {
        self.finder.schemes().len()
    }
}

/// Re-key configured portals by canonical state token
///
/// Keys may use any spelling the state lexicon knows ("Orissa", "UP").
/// Unknown keys are dropped; when two keys name the same state the first in
/// key order wins.
fn canonical_state_portals(
    lexicon: &Lexicon,
    configured: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let table = lexicon.table(LexiconKind::State);
    let mut portals = BTreeMap::new();
    for (key, url) in configured {
        let Some(entry) = table.lookup(key) else {
            tracing::warn!(state = %key, "State portal configured for an unknown state key");
            continue;
        };
        if portals.contains_key(&entry.canonical) {
            tracing::warn!(
                state = %key,
                canonical = %entry.canonical,
                "Duplicate state portal ignored"
            );
            continue;
        }
        portals.insert(entry.canonical.clone(), url.trim().to_string());
    }
    portals
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahaj_seva_config::RuntimeEnvironment;
    use sahaj_seva_core::{Language, Profile};
    use std::fs;

    fn settings_with_catalog(json: &str) -> (tempfile::TempDir, Settings) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemes.json");
        fs::write(&path, json).unwrap();
        let mut settings = Settings::default();
        settings.catalog.path = path.to_string_lossy().into_owned();
        (dir, settings)
    }

    #[test]
    fn test_from_settings() {
        let (_dir, settings) =
            settings_with_catalog(r#"[{"name": "A", "eligibility": {"state": "bihar"}}]"#);
        let state = AppState::from_settings(settings).unwrap();
        assert_eq!(state.scheme_count(), 1);
        assert_eq!(state.scheme_index[0].key, "a");
        assert_eq!(state.states.len(), 36);
    }

    #[test]
    fn test_strict_audit() {
        let (_dir, mut settings) =
            settings_with_catalog(r#"[{"name": "A", "eligibility": {"state": "Orissa"}}]"#);
        assert!(AppState::from_settings(settings.clone()).is_ok());

        settings.environment = RuntimeEnvironment::Production;
        assert!(matches!(
            AppState::from_settings(settings),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_catalog() {
        let mut settings = Settings::default();
        settings.catalog.path = "/nonexistent/schemes.json".to_string();
        assert!(matches!(
            AppState::from_settings(settings),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_state_portal_keys_canonicalized() {
        let (_dir, mut settings) =
            settings_with_catalog(r#"[{"name": "A", "eligibility": {"state": "bihar"}}]"#);
        let portals = &mut settings.catalog.state_portals;
        portals.insert("Orissa".to_string(), "https://odisha.gov.in".to_string());
        portals.insert("UP".to_string(), "https://up.gov.in".to_string());
        portals.insert("Atlantis".to_string(), "https://atlantis.example".to_string());
        let state = AppState::from_settings(settings).unwrap();

        let results = state
            .finder
            .find(&Profile::new().with_state("Odisha"), Language::English);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].portal_url, "https://odisha.gov.in");

        let results = state
            .finder
            .find(&Profile::new().with_state("uttar pradesh"), Language::English);
        assert_eq!(results[0].portal_url, "https://up.gov.in");
    }
}
