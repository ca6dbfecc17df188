//! Catalog and region listings for clients building pickers

use serde::Serialize;
use std::collections::HashSet;

use sahaj_seva_core::Scheme;
use sahaj_seva_text_processing::Lexicon;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateItem {
    pub key: String,
    pub en: String,
    pub hi: String,
    #[serde(rename = "type")]
    pub region_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeItem {
    pub key: String,
    pub en: String,
    pub hi: String,
}

/// All regions, sorted by English label
pub fn states(lexicon: &Lexicon) -> Vec<StateItem> {
    let mut items: Vec<StateItem> = lexicon
        .regions()
        .iter()
        .map(|entry| StateItem {
            key: entry.canonical.clone(),
            en: entry.label_en.clone(),
            hi: entry.label_hi.clone(),
            region_type: entry
                .region
                .map(|r| r.as_str())
                .unwrap_or_default()
                .to_string(),
        })
        .collect();
    items.sort_by(|a, b| a.en.cmp(&b.en));
    items
}

/// Catalog schemes with stable slug keys, sorted by English name
///
/// Keys are assigned in catalog order before sorting, so of two schemes with
/// the same name the earlier one keeps the plain slug.
pub fn schemes(catalog: &[Scheme]) -> Vec<SchemeItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(catalog.len());

    for (i, scheme) in catalog.iter().enumerate() {
        let en = scheme.name.trim();
        let hi = scheme.name_hi.trim();
        let base = match (en.is_empty(), hi.is_empty()) {
            (false, _) => slug(en),
            (true, false) => slug(hi),
            (true, true) => slug(&i.to_string()),
        };

        let mut key = base.clone();
        let mut n = 2;
        while seen.contains(&key) {
            key = format!("{}-{}", base, n);
            n += 1;
        }
        seen.insert(key.clone());

        items.push(SchemeItem {
            key,
            en: en.to_string(),
            hi: hi.to_string(),
        });
    }

    // Stable sort keeps catalog order among equal names
    items.sort_by(|a, b| a.en.cmp(&b.en));
    items
}

/// Lower-case ASCII slug; anything else collapses into single dashes
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_dash = false;
    for ch in name.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    let key = out.trim_matches('-');
    if key.is_empty() {
        "scheme".to_string()
    } else {
        key.to_string()
    }
}
