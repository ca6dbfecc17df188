//! Value canonicalization
//!
//! Maps a raw attribute value, typed into a form or pulled out of free text,
//! onto its canonical token. Values without a lexicon entry are not an error:
//! they come back normalized and lower-cased so a scheme listing an
//! unanticipated token can still match them.

use std::sync::Arc;

use sahaj_seva_core::{LexiconKind, Profile, Result};

use crate::lexicon::Lexicon;
use crate::normalize::normalize_lower;
use crate::profile::CanonicalProfile;

#[derive(Debug, Clone)]
pub struct Canonicalizer {
    lexicon: Arc<Lexicon>,
}

impl Canonicalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Canonical token for `raw`, or `raw` normalized and lower-cased
    ///
    /// Idempotent: canonical tokens and unrecognized tokens both map to
    /// themselves. Empty input gives an empty string.
    pub fn canonicalize(&self, raw: &str, kind: LexiconKind) -> String {
        let fallback = normalize_lower(raw);
        if fallback.is_empty() {
            return fallback;
        }
        match self.lexicon.table(kind).lookup(raw) {
            Some(entry) => entry.canonical.clone(),
            None => {
                tracing::debug!(kind = %kind, value = %fallback, "No lexicon entry, passing through");
                fallback
            }
        }
    }

    /// Same as [`canonicalize`](Self::canonicalize) with the kind given by name
    ///
    /// An unknown kind name is a programming error and is reported as
    /// [`Error::UnknownKind`](sahaj_seva_core::Error::UnknownKind).
    pub fn canonicalize_str(&self, raw: &str, kind: &str) -> Result<String> {
        let kind: LexiconKind = kind.parse()?;
        Ok(self.canonicalize(raw, kind))
    }

    /// Canonicalize every categorical field of a profile
    pub fn canonicalize_profile(&self, profile: &Profile) -> CanonicalProfile {
        CanonicalProfile::new(
            profile.age,
            self.canonicalize(&profile.gender, LexiconKind::Gender),
            self.canonicalize(&profile.occupation, LexiconKind::Occupation),
            profile.income,
            self.canonicalize(&profile.state, LexiconKind::State),
        )
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }
}
