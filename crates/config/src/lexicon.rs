//! Lexicon alias overlays
//!
//! Deployments can teach the lexicons local spellings without a rebuild:
//!
//! ```yaml
//! lexicon:
//!   occupation:
//!     krishak: farmer
//!   state:
//!     kalinga: odisha
//! ```
//!
//! Every alias must point at an existing canonical token of its kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use sahaj_seva_core::LexiconKind;
use sahaj_seva_text_processing::Lexicon;

use crate::ConfigError;

/// Alias → canonical token maps, one per lexicon kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconOverlayConfig {
    #[serde(default)]
    pub gender: BTreeMap<String, String>,

    #[serde(default)]
    pub occupation: BTreeMap<String, String>,

    #[serde(default)]
    pub state: BTreeMap<String, String>,
}

impl LexiconOverlayConfig {
    pub fn is_empty(&self) -> bool {
        self.gender.is_empty() && self.occupation.is_empty() && self.state.is_empty()
    }

    fn entries(&self) -> impl Iterator<Item = (LexiconKind, &String, &String)> + '_ {
        tagged(LexiconKind::Gender, &self.gender)
            .chain(tagged(LexiconKind::Occupation, &self.occupation))
            .chain(tagged(LexiconKind::State, &self.state))
    }

    /// Built-in lexicon with these aliases composed on top
    pub fn build_lexicon(&self) -> Result<Lexicon, ConfigError> {
        let mut builder = Lexicon::builder();
        let mut added = 0usize;
        for (kind, alias, canonical) in self.entries() {
            builder = builder.alias(kind, alias, canonical)?;
            added += 1;
        }
        if added > 0 {
            tracing::info!(aliases = added, "Applied lexicon overlays");
        }
        Ok(builder.build())
    }
}

fn tagged(
    kind: LexiconKind,
    map: &BTreeMap<String, String>,
) -> impl Iterator<Item = (LexiconKind, &String, &String)> + '_ {
    map.iter().map(move |(alias, canonical)| (kind, alias, canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overlay_is_builtin() {
        let overlay = LexiconOverlayConfig::default();
        assert!(overlay.is_empty());
        let lexicon = overlay.build_lexicon().unwrap();
        assert_eq!(lexicon.regions().len(), 36);
    }

    #[test]
    fn test_overlay_applied() {
        let mut overlay = LexiconOverlayConfig::default();
        overlay.state.insert("Kalinga".to_string(), "odisha".to_string());
        overlay.occupation.insert("krishak".to_string(), "Farmer".to_string());
        let lexicon = overlay.build_lexicon().unwrap();

        let states = lexicon.table(LexiconKind::State);
        assert_eq!(states.lookup("kalinga").unwrap().canonical, "odisha");
        let occupations = lexicon.table(LexiconKind::Occupation);
        assert_eq!(occupations.lookup("KRISHAK").unwrap().canonical, "farmer");
    }

    #[test]
    fn test_unknown_canonical_rejected() {
        let mut overlay = LexiconOverlayConfig::default();
        overlay.gender.insert("x".to_string(), "unknown".to_string());
        let err = overlay.build_lexicon().unwrap_err();
        match err {
            ConfigError::InvalidValue { field, message } => {
                assert_eq!(field, "lexicon.gender");
                assert!(message.contains("`unknown`"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
