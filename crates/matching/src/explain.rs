//! Match explanations
//!
//! Every eligible scheme comes back with a short "why" sentence. The
//! [`TemplateExplainer`] builds it from fixed per-language templates so the
//! service is complete without any model behind it; other explainers can be
//! plugged in behind the [`Explainer`] trait.

use sahaj_seva_core::{Language, LexiconKind, Profile};
use sahaj_seva_text_processing::{CanonicalProfile, Lexicon};

/// Explanation generation interface
///
/// Implementations:
/// - `TemplateExplainer` - Deterministic bilingual templates
///
/// # Example
///
/// ```ignore
/// let explainer: Arc<dyn Explainer> = Arc::new(TemplateExplainer::new());
/// let why = explainer.explain(&context, Language::Hindi);
/// ```
pub trait Explainer: Send + Sync + 'static {
    /// Explain why the profile in `context` matched
    fn explain(&self, context: &ExplanationContext<'_>, language: Language) -> String;

    /// Explainer name for logging
    fn name(&self) -> &str;
}

/// Profile fields as they should appear in a sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplanationProfile {
    pub gender: String,
    pub occupation: String,
    pub income: Option<f64>,
    pub state: String,
}

impl ExplanationProfile {
    /// Display values for a profile in `language`
    ///
    /// Recognized tokens are replaced by their lexicon label; anything else
    /// is shown the way the user typed it.
    pub fn localize(
        raw: &Profile,
        canonical: &CanonicalProfile,
        lexicon: &Lexicon,
        language: Language,
    ) -> Self {
        let label_for = |kind: LexiconKind, token: Option<&str>, typed: &str| -> String {
            token
                .and_then(|t| lexicon.label(kind, t, language))
                .unwrap_or(typed)
                .trim()
                .to_string()
        };

        Self {
            gender: label_for(LexiconKind::Gender, canonical.gender(), &raw.gender),
            occupation: label_for(LexiconKind::Occupation, canonical.occupation(), &raw.occupation),
            income: raw.income,
            state: label_for(LexiconKind::State, canonical.state(), &raw.state),
        }
    }
}

/// Inputs for one explanation, already localized
#[derive(Debug, Clone)]
pub struct ExplanationContext<'a> {
    pub scheme_name: &'a str,
    pub benefits: &'a str,
    /// Catalog-authored eligibility note, may be empty
    pub rule_note: &'a str,
    pub profile: &'a ExplanationProfile,
}

/// Fixed-template explainer
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }
}

impl Explainer for TemplateExplainer {
    fn explain(&self, context: &ExplanationContext<'_>, language: Language) -> String {
        let profile = context.profile;
        let income = profile.income.map(|v| format_rupees(v, language));

        let mut parts = Vec::with_capacity(3);
        let mut reasons = Vec::with_capacity(3);

        match language {
            Language::English => {
                parts.push(format!("You can apply for {}.", context.scheme_name));
                if !profile.occupation.is_empty() {
                    reasons.push(format!("your occupation is {}", profile.occupation));
                }
                if let Some(income) = income {
                    reasons.push(format!("your income is {}", income));
                }
                if !profile.state.is_empty() {
                    reasons.push(format!("you are in {}", profile.state));
                }
                if !reasons.is_empty() {
                    parts.push(format!("Because {}.", reasons.join(", ")));
                }
                if !context.rule_note.trim().is_empty() {
                    parts.push(format!("Note: {}", context.rule_note.trim()));
                }
            }
            Language::Hindi => {
                parts.push(format!("आप {} के लिए आवेदन कर सकते हैं।", context.scheme_name));
                if !profile.occupation.is_empty() {
                    reasons.push(format!("आपका पेशा: {}", profile.occupation));
                }
                if let Some(income) = income {
                    reasons.push(format!("आपकी आय: {}", income));
                }
                if !profile.state.is_empty() {
                    reasons.push(format!("राज्य: {}", profile.state));
                }
                if !reasons.is_empty() {
                    parts.push(format!("क्योंकि {}।", reasons.join(", ")));
                }
                if !context.rule_note.trim().is_empty() {
                    parts.push(format!("नोट: {}", context.rule_note.trim()));
                }
            }
        }

        parts.join(" ")
    }

    fn name(&self) -> &str {
        "template"
    }
}

/// Whole rupees with digit grouping for `language`
///
/// English uses groups of three (`2,50,000` is written `250,000`), Hindi the
/// Indian lakh/crore grouping (`2,50,000`). Fractions are truncated.
pub fn format_rupees(amount: f64, language: Language) -> String {
    let whole = amount.trunc();
    let negative = whole < 0.0;
    let digits = format!("{:.0}", whole.abs());

    let grouped = match language {
        Language::English => group_digits(&digits, 3, 3),
        Language::Hindi => group_digits(&digits, 3, 2),
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Insert commas: `first` digits in the rightmost group, `rest` in the others
fn group_digits(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > rest {
        groups.push(&head[end - rest..end]);
        end -= rest;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahaj_seva_text_processing::Canonicalizer;

    fn context<'a>(profile: &'a ExplanationProfile, note: &'a str) -> ExplanationContext<'a> {
        ExplanationContext {
            scheme_name: "PM-KISAN",
            benefits: "₹6,000 per year",
            rule_note: note,
            profile,
        }
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0.0, Language::English), "₹0");
        assert_eq!(format_rupees(999.99, Language::English), "₹999");
        assert_eq!(format_rupees(200_000.0, Language::English), "₹200,000");
        assert_eq!(format_rupees(12_345_678.0, Language::English), "₹12,345,678");
        assert_eq!(format_rupees(200_000.0, Language::Hindi), "₹2,00,000");
        assert_eq!(format_rupees(12_345_678.0, Language::Hindi), "₹1,23,45,678");
        assert_eq!(format_rupees(5_000.0, Language::Hindi), "₹5,000");
    }

    #[test]
    fn test_english_full() {
        let profile = ExplanationProfile {
            occupation: "Farmer".to_string(),
            income: Some(150_000.0),
            state: "Odisha".to_string(),
            ..Default::default()
        };
        let text = TemplateExplainer.explain(&context(&profile, "Small and marginal farmers"), Language::English);
        assert_eq!(
            text,
            "You can apply for PM-KISAN. Because your occupation is Farmer, your income is ₹150,000, \
             you are in Odisha. Note: Small and marginal farmers"
        );
    }

    #[test]
    fn test_english_minimal() {
        let profile = ExplanationProfile::default();
        let text = TemplateExplainer.explain(&context(&profile, " "), Language::English);
        assert_eq!(text, "You can apply for PM-KISAN.");
    }

    #[test]
    fn test_hindi() {
        let profile = ExplanationProfile {
            income: Some(250_000.0),
            state: "बिहार".to_string(),
            ..Default::default()
        };
        let text = TemplateExplainer.explain(&context(&profile, "किसान परिवार"), Language::Hindi);
        assert_eq!(
            text,
            "आप PM-KISAN के लिए आवेदन कर सकते हैं। क्योंकि आपकी आय: ₹2,50,000, राज्य: बिहार। नोट: किसान परिवार"
        );
    }

    #[test]
    fn test_localize_profile() {
        let canonicalizer = Canonicalizer::default();
        let raw = Profile::new()
            .with_occupation("kisan")
            .with_state("Orissa")
            .with_gender("F")
            .with_income(10_000.0);
        let canonical = canonicalizer.canonicalize_profile(&raw);

        let hi = ExplanationProfile::localize(&raw, &canonical, canonicalizer.lexicon(), Language::Hindi);
        assert_eq!(hi.occupation, "किसान");
        assert_eq!(hi.state, "ओडिशा");
        assert_eq!(hi.gender, "महिला");
        assert_eq!(hi.income, Some(10_000.0));

        let en = ExplanationProfile::localize(&raw, &canonical, canonicalizer.lexicon(), Language::English);
        assert_eq!(en.occupation, "Farmer");
        assert_eq!(en.state, "Odisha");
        assert_eq!(en.gender, "Female");
    }

    #[test]
    fn test_localize_keeps_unknown_as_typed() {
        let canonicalizer = Canonicalizer::default();
        let raw = Profile::new().with_occupation(" Weaver ");
        let canonical = canonicalizer.canonicalize_profile(&raw);
        let p = ExplanationProfile::localize(&raw, &canonical, canonicalizer.lexicon(), Language::English);
        assert_eq!(p.occupation, "Weaver");
        assert_eq!(p.state, "");
    }
}
