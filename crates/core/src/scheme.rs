//! Scheme catalog records and eligibility predicates
//!
//! A catalog is an externally maintained list of schemes, each with an
//! eligibility predicate made of independently optional constraints. The
//! shape of a categorical constraint in the source data is overloaded (key
//! absent, the literal `"any"`, a single value or a list), so it is parsed
//! into [`Constraint`] at load time and never re-interpreted afterwards.
//!
//! Malformed data (a bound that is not a number, a constraint that is neither
//! a string nor a list of strings) is rejected during deserialization.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::{Error, Language, Result};

/// Sentinel that explicitly marks a categorical field as unconstrained
pub const ANY_SENTINEL: &str = "any";

/// A categorical constraint on one profile field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Constraint {
    /// Key absent from the scheme: no restriction
    #[default]
    Unconstrained,
    /// Key present with the `"any"` sentinel: no restriction
    AnyAllowed,
    /// Profile value must be present and, if the set is non-empty, a member
    /// of it (compared lower-cased)
    OneOf(BTreeSet<String>),
}

impl Constraint {
    /// Build a `OneOf` from raw tokens, lower-casing and dropping blanks
    pub fn one_of<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Constraint::OneOf(
            tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Whether this constraint requires anything of the profile
    pub fn is_restrictive(&self) -> bool {
        matches!(self, Constraint::OneOf(_))
    }

    /// Parse the catalog representation of a constraint
    pub fn from_value(field: &str, value: &Value) -> Result<Self> {
        match value {
            // An explicit null still demands a present value
            Value::Null => Ok(Constraint::OneOf(BTreeSet::new())),
            Value::String(s) if s.trim().eq_ignore_ascii_case(ANY_SENTINEL) => {
                Ok(Constraint::AnyAllowed)
            }
            Value::String(s) => Ok(Constraint::one_of([s])),
            Value::Array(items) => {
                let mut tokens = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => tokens.push(s.as_str()),
                        other => {
                            return Err(Error::malformed(
                                field,
                                format!("list entries must be strings, got {}", other),
                            ))
                        }
                    }
                }
                Ok(Constraint::one_of(tokens))
            }
            other => Err(Error::malformed(
                field,
                format!("expected a string, a list of strings or \"any\", got {}", other),
            )),
        }
    }
}

/// Eligibility predicate: every constraint independently optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Eligibility {
    #[serde(default, deserialize_with = "occupation_constraint")]
    pub occupation: Constraint,

    #[serde(default, deserialize_with = "gender_constraint")]
    pub gender: Constraint,

    #[serde(default, deserialize_with = "state_constraint")]
    pub state: Constraint,

    /// Inclusive lower age bound
    #[serde(default, deserialize_with = "age_bound")]
    pub age_min: Option<u32>,

    /// Inclusive upper age bound
    #[serde(default, deserialize_with = "age_bound")]
    pub age_max: Option<u32>,

    /// Inclusive lower income bound (rupees per year)
    #[serde(default, deserialize_with = "income_bound")]
    pub income_min: Option<f64>,

    /// Inclusive upper income bound (rupees per year)
    #[serde(default, deserialize_with = "income_bound")]
    pub income_max: Option<f64>,
}

impl Eligibility {
    /// Number of constraints that can disqualify a profile
    pub fn restrictive_count(&self) -> usize {
        [&self.occupation, &self.gender, &self.state]
            .iter()
            .filter(|c| c.is_restrictive())
            .count()
            + [self.age_min.is_some(), self.age_max.is_some()]
                .iter()
                .filter(|b| **b)
                .count()
            + [self.income_min.is_some(), self.income_max.is_some()]
                .iter()
                .filter(|b| **b)
                .count()
    }

    /// Check bound ordering
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let (Some(min), Some(max)) = (self.age_min, self.age_max) {
            if min > max {
                return Err(format!("age_min ({}) is greater than age_max ({})", min, max));
            }
        }
        if let (Some(min), Some(max)) = (self.income_min, self.income_max) {
            if min > max {
                return Err(format!(
                    "income_min ({}) is greater than income_max ({})",
                    min, max
                ));
            }
        }
        Ok(())
    }
}

/// A scheme catalog record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scheme {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_hi: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub benefits_hi: String,
    /// Human-written rule note shown alongside the match
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub explanation_hi: String,
    #[serde(default)]
    pub portal_url: String,
    #[serde(default)]
    pub eligibility: Eligibility,
}

impl Scheme {
    pub fn name_for(&self, language: Language) -> &str {
        localized(&self.name, &self.name_hi, language)
    }

    pub fn benefits_for(&self, language: Language) -> &str {
        localized(&self.benefits, &self.benefits_hi, language)
    }

    pub fn explanation_for(&self, language: Language) -> &str {
        localized(&self.explanation, &self.explanation_hi, language)
    }

    /// Integrity checks that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let label = if self.name.trim().is_empty() {
            self.name_hi.trim()
        } else {
            self.name.trim()
        };
        if label.is_empty() {
            return Err(Error::InvalidScheme {
                scheme: "<unnamed>".to_string(),
                message: "scheme has neither `name` nor `name_hi`".to_string(),
            });
        }
        self.eligibility
            .validate()
            .map_err(|message| Error::InvalidScheme {
                scheme: label.to_string(),
                message,
            })
    }
}

/// Hindi text when requested and present, English otherwise
fn localized<'a>(en: &'a str, hi: &'a str, language: Language) -> &'a str {
    match language {
        Language::Hindi if !hi.trim().is_empty() => hi,
        _ => en,
    }
}

fn constraint<'de, D>(field: &str, deserializer: D) -> std::result::Result<Constraint, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Constraint::from_value(field, &value).map_err(de::Error::custom)
}

fn occupation_constraint<'de, D>(deserializer: D) -> std::result::Result<Constraint, D::Error>
where
    D: Deserializer<'de>,
{
    constraint("occupation", deserializer)
}

fn gender_constraint<'de, D>(deserializer: D) -> std::result::Result<Constraint, D::Error>
where
    D: Deserializer<'de>,
{
    constraint("gender", deserializer)
}

fn state_constraint<'de, D>(deserializer: D) -> std::result::Result<Constraint, D::Error>
where
    D: Deserializer<'de>,
{
    constraint("state", deserializer)
}

fn age_bound<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).ok(),
            None => n
                .as_f64()
                .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
                .map(|v| v as u32),
        },
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("age bound must be a non-negative integer, got {}", value)))
}

fn income_bound<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(Some)
        .ok_or_else(|| {
            de::Error::custom(format!("income bound must be a non-negative number, got {}", value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Eligibility {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_vs_any() {
        let elig = parse(r#"{"state": "any"}"#);
        assert_eq!(elig.state, Constraint::AnyAllowed);
        assert_eq!(elig.occupation, Constraint::Unconstrained);
        assert_eq!(elig.restrictive_count(), 0);
    }

    #[test]
    fn test_single_and_list_equivalent() {
        let single = parse(r#"{"occupation": "Farmer"}"#);
        let list = parse(r#"{"occupation": ["farmer", " "]}"#);
        assert_eq!(single.occupation, list.occupation);
        assert_eq!(single.occupation, Constraint::one_of(["farmer"]));
    }

    #[test]
    fn test_null_requires_presence() {
        let elig = parse(r#"{"gender": null}"#);
        assert_eq!(elig.gender, Constraint::OneOf(BTreeSet::new()));
        assert!(elig.gender.is_restrictive());
    }

    #[test]
    fn test_bounds_accept_numeric_strings() {
        let elig = parse(r#"{"age_min": "60", "income_max": 200000, "income_min": "0"}"#);
        assert_eq!(elig.age_min, Some(60));
        assert_eq!(elig.income_max, Some(200_000.0));
        assert_eq!(elig.income_min, Some(0.0));
        assert_eq!(elig.restrictive_count(), 3);
    }

    #[test]
    fn test_malformed_bounds_rejected() {
        assert!(serde_json::from_str::<Eligibility>(r#"{"age_min": "sixty"}"#).is_err());
        assert!(serde_json::from_str::<Eligibility>(r#"{"age_min": 60.5}"#).is_err());
        assert!(serde_json::from_str::<Eligibility>(r#"{"age_max": null}"#).is_err());
        assert!(serde_json::from_str::<Eligibility>(r#"{"income_max": -1}"#).is_err());
    }

    #[test]
    fn test_malformed_constraint_rejected() {
        assert!(serde_json::from_str::<Eligibility>(r#"{"state": 42}"#).is_err());
        assert!(serde_json::from_str::<Eligibility>(r#"{"state": ["bihar", 7]}"#).is_err());
    }

    #[test]
    fn test_yaml_catalog_record() {
        let yaml = r#"
name: Old Age Pension
name_hi: वृद्धावस्था पेंशन
eligibility:
  age_min: 60
  occupation: any
"#;
        let scheme: Scheme = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scheme.eligibility.age_min, Some(60));
        assert_eq!(scheme.eligibility.occupation, Constraint::AnyAllowed);
        assert_eq!(scheme.name_for(Language::Hindi), "वृद्धावस्था पेंशन");
    }

    #[test]
    fn test_localized_fallback() {
        let scheme = Scheme {
            name: "PM-Kisan".to_string(),
            benefits: "Rs 6000 per year".to_string(),
            ..Default::default()
        };
        assert_eq!(scheme.name_for(Language::Hindi), "PM-Kisan");
        assert_eq!(scheme.benefits_for(Language::Hindi), "Rs 6000 per year");
    }

    #[test]
    fn test_validate_bound_order() {
        let scheme = Scheme {
            name: "Broken".to_string(),
            eligibility: parse(r#"{"age_min": 70, "age_max": 60}"#),
            ..Default::default()
        };
        assert!(matches!(scheme.validate(), Err(Error::InvalidScheme { .. })));

        let unnamed = Scheme::default();
        assert!(unnamed.validate().is_err());
    }
}
