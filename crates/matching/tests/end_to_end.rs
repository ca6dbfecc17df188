//! Text and form paths through extraction, canonicalization and matching

use std::sync::Arc;

use sahaj_seva_config::SchemeCatalog;
use sahaj_seva_core::{Language, LexiconKind, Profile};
use sahaj_seva_matching::{is_eligible, SchemeFinder};
use sahaj_seva_text_processing::{Canonicalizer, Lexicon, ProfileExtractor};

const CATALOG: &str = r#"[
    {
        "name": "PM-KISAN",
        "name_hi": "पीएम-किसान",
        "benefits": "₹6,000 per year in three instalments",
        "explanation": "Landholding farmer families",
        "portal_url": "https://pmkisan.gov.in",
        "eligibility": {"occupation": ["farmer"], "state": "any"}
    },
    {
        "name": "Indira Gandhi National Old Age Pension",
        "benefits": "Monthly pension",
        "eligibility": {"age_min": 60}
    },
    {
        "name": "Low Income Support",
        "eligibility": {"income_min": 0, "income_max": 200000}
    },
    {
        "name": "Open To All",
        "eligibility": {"occupation": "any"}
    }
]"#;

fn setup() -> (ProfileExtractor, Canonicalizer, SchemeCatalog) {
    let lexicon = Arc::new(Lexicon::builtin());
    let catalog = SchemeCatalog::from_json_str(CATALOG).unwrap();
    (
        ProfileExtractor::new(lexicon.clone()),
        Canonicalizer::new(lexicon),
        catalog,
    )
}

fn scheme<'a>(catalog: &'a SchemeCatalog, name: &str) -> &'a sahaj_seva_core::Scheme {
    catalog.schemes().iter().find(|s| s.name == name).unwrap()
}

#[test]
fn test_text_to_profile_scenario() {
    let (extractor, _, _) = setup();
    let profile = extractor.extract("I am 62 years old, a farmer, my income is 2 lakh rupees");
    assert_eq!(profile.age, Some(62));
    assert_eq!(profile.occupation, "farmer");
    assert_eq!(profile.income, Some(200_000.0));
    assert_eq!(profile.gender, "");
    assert_eq!(profile.state, "");
}

#[test]
fn test_form_with_aliases_matches() {
    let (_, canonicalizer, catalog) = setup();
    let form = Profile::new().with_occupation("Farmer").with_state("Orissa");
    let canonical = canonicalizer.canonicalize_profile(&form);
    assert_eq!(canonical.occupation(), Some("farmer"));
    assert_eq!(canonical.state(), Some("odisha"));
    assert!(is_eligible(scheme(&catalog, "PM-KISAN"), &canonical));
}

#[test]
fn test_age_min_requires_age() {
    let (_, canonicalizer, catalog) = setup();
    let pension = scheme(&catalog, "Indira Gandhi National Old Age Pension");
    assert!(!is_eligible(pension, &canonicalizer.canonicalize_profile(&Profile::new())));
    assert!(is_eligible(
        pension,
        &canonicalizer.canonicalize_profile(&Profile::new().with_age(60))
    ));
}

#[test]
fn test_income_band() {
    let (_, canonicalizer, catalog) = setup();
    let support = scheme(&catalog, "Low Income Support");
    let cases = [
        (None, false),
        (Some(150_000.0), true),
        (Some(200_000.0), true),
        (Some(200_000.01), false),
    ];
    for (income, expected) in cases {
        let mut form = Profile::new();
        form.income = income;
        let canonical = canonicalizer.canonicalize_profile(&form);
        assert_eq!(is_eligible(support, &canonical), expected, "income {:?}", income);
    }
}

#[test]
fn test_any_occupation_accepts_empty() {
    let (_, canonicalizer, catalog) = setup();
    let open = scheme(&catalog, "Open To All");
    assert!(is_eligible(open, &canonicalizer.canonicalize_profile(&Profile::new())));
}

#[test]
fn test_age_years_old_property() {
    let (extractor, _, _) = setup();
    for age in 1..130u32 {
        let profile = extractor.extract(&format!("I am {} years old", age));
        assert_eq!(profile.age, Some(age), "age {}", age);
    }
    for age in [0u32, 130, 150, 999] {
        let detailed = extractor.extract_detailed(&format!("{} years old", age));
        assert_ne!(detailed.age.map(|m| m.rule), Some("years_old"), "age {}", age);
    }
}

#[test]
fn test_lakh_property() {
    let (extractor, _, _) = setup();
    for (phrase, expected) in [
        ("2 lakh", 200_000.0),
        ("2.5 lakh", 250_000.0),
        ("10 lakh", 1_000_000.0),
        ("0.5 lakh", 50_000.0),
    ] {
        let profile = extractor.extract(&format!("my income is {}", phrase));
        assert_eq!(profile.income, Some(expected), "{}", phrase);
    }
}

#[test]
fn test_canonicalize_idempotent_and_fixed_points() {
    let (_, canonicalizer, _) = setup();
    let lexicon = canonicalizer.lexicon();

    let raw = [
        "Orissa", "NCT of Delhi", "Union Territory of Delhi", "उड़ीसा", "Kisan", "F", "M",
        "Weaver", "  Tamil   Nadu ", "", "Pondicherry",
    ];
    for kind in LexiconKind::ALL {
        for value in raw {
            let once = canonicalizer.canonicalize(value, kind);
            assert_eq!(canonicalizer.canonicalize(&once, kind), once, "{} {:?}", kind, value);
        }
        for entry in lexicon.table(kind).entries() {
            assert_eq!(canonicalizer.canonicalize(&entry.canonical, kind), entry.canonical);
        }
    }
}

#[test]
fn test_text_to_matches_pipeline() {
    let (extractor, _, catalog) = setup();
    let finder = SchemeFinder::new(catalog.shared(), Arc::new(Lexicon::builtin()));

    let profile = extractor.extract("मैं 65 साल का किसान हूँ, बिहार से, सालाना आय 1.5 लाख");
    assert_eq!(profile.age, Some(65));
    assert_eq!(profile.occupation, "farmer");
    assert_eq!(profile.state, "bihar");
    assert_eq!(profile.income, Some(150_000.0));

    let results = finder.find(&profile, Language::Hindi);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "पीएम-किसान",
            "Indira Gandhi National Old Age Pension",
            "Low Income Support",
            "Open To All",
            "बिहार के राज्य-स्तरीय योजनाएँ (आधिकारिक पोर्टल)",
        ]
    );
    assert!(results[2].why.contains("आपकी आय: ₹1,50,000"));
}
