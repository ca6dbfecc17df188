//! Form-to-matches
//!
//! Canonicalizes a submitted profile, evaluates it against every scheme in
//! catalog order and assembles localized results. When the profile names a
//! known state or union territory, a pointer to that region's official scheme
//! portal is appended after the catalog matches.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use sahaj_seva_core::{Language, Profile, Scheme};
use sahaj_seva_text_processing::{Canonicalizer, Lexicon, LexiconEntry};

use crate::evaluator;
use crate::explain::{ExplanationContext, ExplanationProfile, Explainer, TemplateExplainer};

/// One entry of the scheme finder response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeResult {
    pub name: String,
    pub benefits: String,
    pub why: String,
    pub portal_url: String,
}

/// Matches profiles against a shared, immutable catalog
#[derive(Clone)]
pub struct SchemeFinder {
    schemes: Arc<Vec<Scheme>>,
    canonicalizer: Canonicalizer,
    explainer: Arc<dyn Explainer>,
    /// Official portal URL per canonical state key
    state_portals: Arc<BTreeMap<String, String>>,
}

impl std::fmt::Debug for SchemeFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeFinder")
            .field("schemes", &self.schemes.len())
            .field("explainer", &self.explainer.name())
            .field("state_portals", &self.state_portals.len())
            .finish()
    }
}

impl SchemeFinder {
    pub fn new(schemes: Arc<Vec<Scheme>>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            schemes,
            canonicalizer: Canonicalizer::new(lexicon),
            explainer: Arc::new(TemplateExplainer::new()),
            state_portals: Arc::new(BTreeMap::new()),
        }
    }

    /// Set state portal links (keys are canonical state tokens)
    pub fn with_state_portals(mut self, portals: BTreeMap<String, String>) -> Self {
        self.state_portals = Arc::new(portals);
        self
    }

    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = explainer;
        self
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.canonicalizer.lexicon()
    }

    /// Eligible schemes in catalog order, then the state portal suggestion
    pub fn find(&self, profile: &Profile, language: Language) -> Vec<SchemeResult> {
        let canonical = self.canonicalizer.canonicalize_profile(profile);
        let localized = ExplanationProfile::localize(profile, &canonical, self.lexicon(), language);

        let mut results: Vec<SchemeResult> = self
            .schemes
            .iter()
            .filter(|scheme| evaluator::is_eligible(scheme, &canonical))
            .map(|scheme| self.result_for(scheme, &localized, language))
            .collect();

        let matched = results.len();

        if let Some(region) = canonical
            .state()
            .and_then(|state| self.lexicon().regions().iter().find(|e| e.canonical == state))
        {
            results.push(self.state_portal(region, language));
        }

        tracing::debug!(
            language = %language,
            schemes = self.schemes.len(),
            matched,
            state_portal = results.len() > matched,
            "Scheme finder completed"
        );

        results
    }

    fn result_for(
        &self,
        scheme: &Scheme,
        profile: &ExplanationProfile,
        language: Language,
    ) -> SchemeResult {
        let name = scheme.name_for(language);
        let benefits = scheme.benefits_for(language);

        let context = ExplanationContext {
            scheme_name: name,
            benefits,
            rule_note: scheme.explanation_for(language),
            profile,
        };
        let why = self.explainer.explain(&context, language);

        SchemeResult {
            name: name.to_string(),
            benefits: benefits.to_string(),
            why: strip_benefit_echo(&why, benefits, language),
            portal_url: scheme.portal_url.trim().to_string(),
        }
    }

    fn state_portal(&self, region: &LexiconEntry, language: Language) -> SchemeResult {
        let label = region.label(language);
        let portal_url = self
            .state_portals
            .get(&region.canonical)
            .cloned()
            .unwrap_or_default();

        match language {
            Language::English => SchemeResult {
                name: format!("{} State Schemes (Official Portal)", label),
                benefits: "Browse your state’s schemes, check eligibility, and get \
                           application/status information."
                    .to_string(),
                why: "This is the safest way to find verified, state-specific schemes for \
                      your location."
                    .to_string(),
                portal_url,
            },
            Language::Hindi => SchemeResult {
                name: format!("{} के राज्य-स्तरीय योजनाएँ (आधिकारिक पोर्टल)", label),
                benefits: "अपने राज्य की योजनाएँ देखें, पात्रता जांचें, और आवेदन/स्थिति की जानकारी पाएं।"
                    .to_string(),
                why: "यह आपके राज्य के लिए आधिकारिक/राज्य-स्तरीय योजनाओं को ढूँढने का सबसे सुरक्षित तरीका है।"
                    .to_string(),
                portal_url,
            },
        }
    }
}

/// Remove a "Benefit: ..." echo from `why`; benefits are shown separately
///
/// Only applied when both texts are non-empty. Double spaces are collapsed
/// once and separator punctuation is trimmed from both ends.
fn strip_benefit_echo(why: &str, benefits: &str, language: Language) -> String {
    if why.is_empty() || benefits.is_empty() {
        return why.to_string();
    }

    let (prefix, trim): (&str, &[char]) = match language {
        Language::English => ("Benefit", &[' ', '-', ':', '.', '\n', '\t']),
        Language::Hindi => ("लाभ", &[' ', '-', ':', '।', '\n', '\t']),
    };

    why.replace(&format!("{}: {}", prefix, benefits), "")
        .replace("  ", " ")
        .trim_matches(trim)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder(json: &str) -> SchemeFinder {
        let schemes: Vec<Scheme> = serde_json::from_str(json).unwrap();
        SchemeFinder::new(Arc::new(schemes), Arc::new(Lexicon::builtin()))
    }

    const CATALOG: &str = r#"[
        {
            "name": "PM-KISAN",
            "name_hi": "पीएम-किसान",
            "benefits": "₹6,000 per year",
            "benefits_hi": "₹6,000 प्रति वर्ष",
            "explanation": "For landholding farmer families",
            "portal_url": " https://pmkisan.gov.in ",
            "eligibility": {"occupation": ["farmer"], "state": "any"}
        },
        {
            "name": "Old Age Pension",
            "benefits": "Monthly pension",
            "eligibility": {"age_min": 60}
        },
        {
            "name": "Bihar Student Credit Card",
            "eligibility": {"occupation": "student", "state": "bihar"}
        }
    ]"#;

    #[test]
    fn test_catalog_order_and_state_portal_last() {
        let mut portals = BTreeMap::new();
        portals.insert("odisha".to_string(), "https://odisha.gov.in".to_string());
        let finder = finder(CATALOG).with_state_portals(portals);

        let profile = Profile::new()
            .with_occupation("Farmer")
            .with_state("Orissa")
            .with_age(65);
        let results = finder.find(&profile, Language::English);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["PM-KISAN", "Old Age Pension", "Odisha State Schemes (Official Portal)"]
        );
        assert_eq!(results[0].portal_url, "https://pmkisan.gov.in");
        assert_eq!(results[2].portal_url, "https://odisha.gov.in");
        assert_eq!(
            results[0].why,
            "You can apply for PM-KISAN. Because your occupation is Farmer, you are in Odisha. \
             Note: For landholding farmer families"
        );
    }

    #[test]
    fn test_hindi_results() {
        let finder = finder(CATALOG);
        let profile = Profile::new().with_occupation("किसान").with_state("बिहार");
        let results = finder.find(&profile, Language::Hindi);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "पीएम-किसान");
        assert_eq!(results[0].benefits, "₹6,000 प्रति वर्ष");
        assert!(results[0].why.starts_with("आप पीएम-किसान के लिए आवेदन कर सकते हैं।"));
        assert!(results[0].why.contains("आपका पेशा: किसान"));
        assert_eq!(results[1].name, "बिहार के राज्य-स्तरीय योजनाएँ (आधिकारिक पोर्टल)");
        assert_eq!(results[1].portal_url, "");
    }

    #[test]
    fn test_unknown_state_has_no_portal() {
        let finder = finder(CATALOG);
        let results = finder.find(&Profile::new().with_state("Atlantis"), Language::English);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_profile() {
        let finder = finder(CATALOG);
        assert!(finder.find(&Profile::new(), Language::English).is_empty());
    }

    #[test]
    fn test_strip_benefit_echo() {
        assert_eq!(
            strip_benefit_echo("PM-KISAN fits you. Benefit: ₹6,000 per year.", "₹6,000 per year", Language::English),
            "PM-KISAN fits you"
        );
        assert_eq!(
            strip_benefit_echo("आप पात्र हैं। लाभ: ₹6,000", "₹6,000", Language::Hindi),
            "आप पात्र हैं"
        );
        assert_eq!(strip_benefit_echo("Eligible.", "", Language::English), "Eligible.");
    }

    struct Fixed;

    impl Explainer for Fixed {
        fn explain(&self, context: &ExplanationContext<'_>, _language: Language) -> String {
            format!("{} - Benefit: {}", context.scheme_name, context.benefits)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_custom_explainer_output_is_deduplicated() {
        let finder = finder(CATALOG).with_explainer(Arc::new(Fixed));
        let results = finder.find(&Profile::new().with_age(70), Language::English);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].why, "Old Age Pension");
    }
}
