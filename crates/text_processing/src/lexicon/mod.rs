//! Lexicon tables
//!
//! One table per [`LexiconKind`], each an ordered list of canonical entries
//! with their surface forms in both scripts. A [`Lexicon`] is built once at
//! startup (built-in tables plus optional alias overlays from configuration)
//! and shared read-only behind an `Arc`; nothing mutates it afterwards.
//!
//! ## Lookup
//!
//! Whole values go through [`LexiconTable::lookup`], which tries the exact
//! normalized value, then lower-cased, then with spaces removed, then both.
//! Canonical tokens are indexed before any alias so they always resolve to
//! themselves.
//!
//! ## Scanning
//!
//! Free text goes through [`LexiconTable::scan`]. Latin-script forms must
//! start a token of the lower-cased text and end it, optionally followed by a
//! plural or possessive ending ("farmers", "bihar's"). So "male" is not found
//! in "female" and "goa" is not found in "goal". Devanagari forms are
//! searched in the uncased text and must start a word, so inflected forms
//! such as "किसानों" still match.

mod tables;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use sahaj_seva_core::{Error, Language, LexiconKind, Result};

use crate::normalize::{
    compact, is_latin, normalize_lower, normalize_str, token_key, NormalizedText,
};
use tables::EntryDef;

/// Administrative level of a region entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionType {
    #[serde(rename = "state")]
    State,
    #[serde(rename = "ut")]
    UnionTerritory,
}

impl RegionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionType::State => "state",
            RegionType::UnionTerritory => "ut",
        }
    }
}

/// One canonical value and the forms that resolve to it
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub canonical: String,
    pub label_en: String,
    pub label_hi: String,
    /// Only set in the state table
    pub region: Option<RegionType>,
    /// Token keys searched in lower-cased text
    latin_forms: Vec<String>,
    /// Normalized Devanagari forms searched in uncased text
    native_forms: Vec<String>,
}

impl LexiconEntry {
    /// Display label in `language`, English when no localized label exists
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::Hindi if !self.label_hi.is_empty() => &self.label_hi,
            _ if !self.label_en.is_empty() => &self.label_en,
            _ => &self.canonical,
        }
    }

    fn add_scan_form(&mut self, form: &str) {
        if is_latin(form) {
            let key = token_key(form);
            if !key.is_empty() && !self.latin_forms.contains(&key) {
                self.latin_forms.push(key);
            }
        } else {
            let normalized = normalize_str(form);
            let compacted = compact(&normalized);
            for variant in [normalized, compacted] {
                if !variant.is_empty() && !self.native_forms.contains(&variant) {
                    self.native_forms.push(variant);
                }
            }
        }
    }

    fn matches(&self, text: &NormalizedText) -> bool {
        self.latin_forms.iter().any(|f| text.contains_tokens_inflected(f))
            || self
                .native_forms
                .iter()
                .any(|f| contains_at_word_start(&text.text, f))
    }
}

/// Ordered entries of one kind plus their lookup index
#[derive(Debug, Clone)]
pub struct LexiconTable {
    kind: LexiconKind,
    entries: Vec<LexiconEntry>,
    index: HashMap<String, usize>,
    /// Index keys owned by canonical tokens; overlays cannot redirect them
    pinned: HashSet<String>,
}

impl LexiconTable {
    fn from_defs(kind: LexiconKind, defs: &[EntryDef]) -> Self {
        let mut table = Self {
            kind,
            entries: Vec::with_capacity(defs.len()),
            index: HashMap::new(),
            pinned: HashSet::new(),
        };

        for def in defs {
            let mut entry = LexiconEntry {
                canonical: def.canonical.to_string(),
                label_en: def.label_en.to_string(),
                label_hi: def.label_hi.to_string(),
                region: def.region,
                latin_forms: Vec::new(),
                native_forms: Vec::new(),
            };
            // Exact-only forms are never searched for, even when they are
            // also the canonical token or a label ("other")
            let exact_only: HashSet<String> =
                def.exact.iter().map(|f| normalize_lower(f)).collect();
            let scan_forms = [def.canonical, def.label_en, def.label_hi]
                .into_iter()
                .chain(def.scan.iter().copied());
            for form in scan_forms {
                if !exact_only.contains(&normalize_lower(form)) {
                    entry.add_scan_form(form);
                }
            }
            table.entries.push(entry);
        }

        // Canonical tokens first, so they are fixed points of lookup
        for (idx, def) in defs.iter().enumerate() {
            for key in index_keys(def.canonical) {
                table.pinned.insert(key.clone());
                table.index.entry(key).or_insert(idx);
            }
        }

        for (idx, def) in defs.iter().enumerate() {
            let mut forms: Vec<String> = vec![def.label_en.to_string(), def.label_hi.to_string()];
            forms.extend(def.scan.iter().map(|s| s.to_string()));
            forms.extend(def.exact.iter().map(|s| s.to_string()));
            match def.region {
                Some(RegionType::UnionTerritory) => {
                    forms.push(format!("union territory of {}", def.canonical));
                    forms.push(format!("ut of {}", def.canonical));
                }
                Some(RegionType::State) => {
                    forms.push(format!("state of {}", def.canonical));
                }
                None => {}
            }
            for form in forms {
                for key in index_keys(&form) {
                    table.index.entry(key).or_insert(idx);
                }
            }
        }

        table
    }

    pub fn kind(&self) -> LexiconKind {
        self.kind
    }

    /// Entries in tie-break order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entry for a canonical token
    pub fn get(&self, canonical: &str) -> Option<&LexiconEntry> {
        self.entries.iter().find(|e| e.canonical == canonical)
    }

    pub fn is_canonical(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Resolve a whole value: exact, lower-cased, space-stripped, both
    pub fn lookup(&self, raw: &str) -> Option<&LexiconEntry> {
        let exact = normalize_str(raw);
        if exact.is_empty() {
            return None;
        }
        let lower = exact.to_lowercase();
        let compacted = [compact(&exact), compact(&lower)];
        let keys = [
            exact.as_str(),
            lower.as_str(),
            compacted[0].as_str(),
            compacted[1].as_str(),
        ];
        let found = keys.iter().find_map(|key| self.index.get(*key)).copied();
        found.map(|idx| &self.entries[idx])
    }

    /// First entry, in table order, with a form present in `text`
    pub fn scan(&self, text: &NormalizedText) -> Option<&LexiconEntry> {
        if text.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.matches(text))
    }

    /// Add a surface form for an existing canonical token
    fn add_alias(&mut self, alias: &str, canonical: &str) -> Result<()> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.canonical == canonical)
            .ok_or_else(|| Error::UnknownCanonical {
                kind: self.kind.to_string(),
                alias: alias.to_string(),
                canonical: canonical.to_string(),
            })?;

        let keys = index_keys(alias);
        if keys.iter().any(|k| self.pinned.contains(k)) {
            tracing::warn!(
                kind = %self.kind,
                alias = %alias,
                "Alias collides with a canonical token, ignoring"
            );
            return Ok(());
        }
        for key in keys {
            self.index.insert(key, idx);
        }
        self.entries[idx].add_scan_form(alias);
        Ok(())
    }
}

/// Immutable set of lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    gender: LexiconTable,
    occupation: LexiconTable,
    state: LexiconTable,
}

impl Lexicon {
    /// Built-in tables without overlays
    pub fn builtin() -> Self {
        LexiconBuilder::new().build()
    }

    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    pub fn table(&self, kind: LexiconKind) -> &LexiconTable {
        match kind {
            LexiconKind::Gender => &self.gender,
            LexiconKind::Occupation => &self.occupation,
            LexiconKind::State => &self.state,
        }
    }

    /// Display label for a canonical token, if it is one
    pub fn label(&self, kind: LexiconKind, canonical: &str, language: Language) -> Option<&str> {
        self.table(kind).get(canonical).map(|e| e.label(language))
    }

    pub fn is_canonical(&self, kind: LexiconKind, token: &str) -> bool {
        self.table(kind).is_canonical(token)
    }

    /// All states and union territories in canonical order
    pub fn regions(&self) -> &[LexiconEntry] {
        self.state.entries()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Composes the built-in tables with alias overlays
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    gender: LexiconTable,
    occupation: LexiconTable,
    state: LexiconTable,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self {
            gender: LexiconTable::from_defs(LexiconKind::Gender, tables::GENDERS),
            occupation: LexiconTable::from_defs(LexiconKind::Occupation, tables::OCCUPATIONS),
            state: LexiconTable::from_defs(LexiconKind::State, tables::REGIONS),
        }
    }

    /// Map `alias` onto an existing canonical token
    ///
    /// Fails with [`Error::UnknownCanonical`] when `canonical` is not in the
    /// table. An alias that would shadow a canonical token is ignored.
    pub fn alias(mut self, kind: LexiconKind, alias: &str, canonical: &str) -> Result<Self> {
        let table = match kind {
            LexiconKind::Gender => &mut self.gender,
            LexiconKind::Occupation => &mut self.occupation,
            LexiconKind::State => &mut self.state,
        };
        table.add_alias(alias, &canonical.trim().to_lowercase())?;
        Ok(self)
    }

    pub fn build(self) -> Lexicon {
        tracing::debug!(
            genders = self.gender.entries.len(),
            occupations = self.occupation.entries.len(),
            regions = self.state.entries.len(),
            "Lexicon built"
        );
        Lexicon {
            gender: self.gender,
            occupation: self.occupation,
            state: self.state,
        }
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Index keys for one surface form: exact, lower, compact, compact lower
fn index_keys(form: &str) -> Vec<String> {
    let exact = normalize_str(form);
    if exact.is_empty() {
        return Vec::new();
    }
    let lower = exact.to_lowercase();
    let mut keys = vec![compact(&exact), compact(&lower), exact, lower];
    keys.sort();
    keys.dedup();
    keys
}

/// Substring match anchored at a word start
///
/// The match may be followed by a vowel sign or nasalization mark (inflected
/// nouns: "किसानों", "छात्रा", "महिलाओं") but not by another consonant, so
/// "असम" is not found in "असमर्थ".
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(pos, _)| {
        let starts_word = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |prev| !is_word_char(prev));
        let ends_word = haystack[pos + needle.len()..]
            .chars()
            .next()
            .map_or(true, |next| !is_word_char(next) || is_inflection_mark(next));
        starts_word && ends_word
    })
}

fn is_inflection_mark(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{0903}' | '\u{093E}'..='\u{094C}' | 'ओ' | 'ए' | 'ई')
}

fn is_word_char(c: char) -> bool {
    // Devanagari block minus the danda punctuation
    c.is_alphanumeric() || (('\u{0900}'..='\u{097F}').contains(&c) && c != '।' && c != '॥')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_canonical_fixed_points() {
        let lexicon = Lexicon::builtin();
        for kind in LexiconKind::ALL {
            let table = lexicon.table(kind);
            for entry in table.entries() {
                let found = table.lookup(&entry.canonical).unwrap();
                assert_eq!(found.canonical, entry.canonical, "{} {}", kind, entry.canonical);
            }
        }
    }

    #[test]
    fn test_region_table_shape() {
        let lexicon = Lexicon::builtin();
        let regions = lexicon.regions();
        assert_eq!(regions.len(), 36);
        let uts = regions
            .iter()
            .filter(|r| r.region == Some(RegionType::UnionTerritory))
            .count();
        assert_eq!(uts, 8);
    }

    #[test]
    fn test_lookup_strategies() {
        let states = Lexicon::builtin().table(LexiconKind::State).clone();
        assert_eq!(states.lookup("Orissa").unwrap().canonical, "odisha");
        assert_eq!(states.lookup("TamilNadu").unwrap().canonical, "tamil nadu");
        assert_eq!(states.lookup("तमिल नाडु").unwrap().canonical, "tamil nadu");
        assert_eq!(states.lookup("Union Territory of Delhi").unwrap().canonical, "delhi");
        assert_eq!(states.lookup("NCT of Delhi").unwrap().canonical, "delhi");
        assert_eq!(states.lookup("UP").unwrap().canonical, "uttar pradesh");
        assert_eq!(states.lookup("मध्यप्रदेश").unwrap().canonical, "madhya pradesh");
        assert!(states.lookup("atlantis").is_none());
        assert!(states.lookup("  ").is_none());
    }

    #[test]
    fn test_scan_whole_tokens() {
        let genders = Lexicon::builtin();
        let genders = genders.table(LexiconKind::Gender);
        assert_eq!(genders.scan(&normalize("I am a female")).unwrap().canonical, "female");
        assert_eq!(genders.scan(&normalize("a woman aged 40")).unwrap().canonical, "female");
        assert!(genders.scan(&normalize("I am 62 years old, a farmer")).is_none());
        // Exact-only forms are not scanned
        assert!(genders.scan(&normalize("m f o")).is_none());
    }

    #[test]
    fn test_scan_plural_and_possessive() {
        let lexicon = Lexicon::builtin();
        let occupations = lexicon.table(LexiconKind::Occupation);
        let hit = occupations.scan(&normalize("We are farmers")).unwrap();
        assert_eq!(hit.canonical, "farmer");
        let hit = occupations.scan(&normalize("a students' hostel")).unwrap();
        assert_eq!(hit.canonical, "student");

        let states = lexicon.table(LexiconKind::State);
        assert_eq!(states.scan(&normalize("Kerala's coast")).unwrap().canonical, "kerala");
        assert!(states.scan(&normalize("goals and plans")).is_none());

        let genders = lexicon.table(LexiconKind::Gender);
        assert_eq!(genders.scan(&normalize("females only")).unwrap().canonical, "female");
        assert_eq!(genders.scan(&normalize("for women")).unwrap().canonical, "female");
    }

    #[test]
    fn test_scan_native_word_start() {
        let lexicon = Lexicon::builtin();
        let occupations = lexicon.table(LexiconKind::Occupation);
        let hit = occupations.scan(&normalize("हम किसानों के परिवार से हैं")).unwrap();
        assert_eq!(hit.canonical, "farmer");

        let hit = occupations.scan(&normalize("वह छात्रा है")).unwrap();
        assert_eq!(hit.canonical, "student");

        let states = lexicon.table(LexiconKind::State);
        assert!(states.scan(&normalize("मैं असमर्थ हूँ")).is_none());
        assert!(states.scan(&normalize("नयाअसम")).is_none());
        assert_eq!(states.scan(&normalize("मैं असम से हूँ")).unwrap().canonical, "assam");
    }

    #[test]
    fn test_scan_table_order_tie_break() {
        let lexicon = Lexicon::builtin();
        let occupations = lexicon.table(LexiconKind::Occupation);
        let hit = occupations.scan(&normalize("teacher and part time farmer")).unwrap();
        assert_eq!(hit.canonical, "farmer");
    }

    #[test]
    fn test_other_is_not_scanned() {
        let lexicon = Lexicon::builtin();
        let occupations = lexicon.table(LexiconKind::Occupation);
        assert!(occupations.scan(&normalize("some other job")).is_none());
        assert_eq!(occupations.lookup("Other").unwrap().canonical, "other");
    }

    #[test]
    fn test_labels() {
        let lexicon = Lexicon::builtin();
        assert_eq!(
            lexicon.label(LexiconKind::Occupation, "labour", Language::English),
            Some("Worker")
        );
        assert_eq!(
            lexicon.label(LexiconKind::State, "odisha", Language::Hindi),
            Some("ओडिशा")
        );
        assert_eq!(lexicon.label(LexiconKind::State, "orissa", Language::English), None);
    }

    #[test]
    fn test_overlay_alias() {
        let lexicon = Lexicon::builder()
            .alias(LexiconKind::Occupation, "krishak mitra", "farmer")
            .unwrap()
            .build();
        let table = lexicon.table(LexiconKind::Occupation);
        assert_eq!(table.lookup("Krishak Mitra").unwrap().canonical, "farmer");
        assert_eq!(
            table.scan(&normalize("I work as a krishak mitra")).unwrap().canonical,
            "farmer"
        );
    }

    #[test]
    fn test_overlay_unknown_canonical() {
        let err = Lexicon::builder()
            .alias(LexiconKind::State, "bombay", "bombay state")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCanonical { .. }));
    }

    #[test]
    fn test_overlay_cannot_shadow_canonical() {
        let lexicon = Lexicon::builder()
            .alias(LexiconKind::State, "Goa", "kerala")
            .unwrap()
            .build();
        let table = lexicon.table(LexiconKind::State);
        assert_eq!(table.lookup("goa").unwrap().canonical, "goa");
    }
}
