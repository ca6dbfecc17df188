//! Eligibility evaluation
//!
//! A pure predicate over a scheme and a canonical profile. Constraints are
//! checked in a fixed order (occupation, gender, age bounds, income bounds,
//! state) and evaluation stops at the first one that fails.
//!
//! Missing information is disqualifying: when a scheme restricts a field and
//! the profile does not carry it, the scheme does not match. `"any"` and an
//! absent key are the only ways to leave a field unrestricted.

use serde::Serialize;
use sahaj_seva_core::{Constraint, Scheme};
use sahaj_seva_text_processing::CanonicalProfile;

/// Constraint family, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintField {
    Occupation,
    Gender,
    AgeMin,
    AgeMax,
    IncomeMin,
    IncomeMax,
    State,
}

impl ConstraintField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Occupation => "occupation",
            Self::Gender => "gender",
            Self::AgeMin => "age_min",
            Self::AgeMax => "age_max",
            Self::IncomeMin => "income_min",
            Self::IncomeMax => "income_max",
            Self::State => "state",
        }
    }
}

impl std::fmt::Display for ConstraintField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a scheme did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "field", rename_all = "snake_case")]
pub enum Failure {
    /// The profile lacks a field the scheme restricts
    Missing(ConstraintField),
    /// The profile value is outside what the scheme allows
    Mismatch(ConstraintField),
}

impl Failure {
    pub fn field(&self) -> ConstraintField {
        match self {
            Failure::Missing(field) | Failure::Mismatch(field) => *field,
        }
    }
}

/// Result of evaluating one scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Eligible,
    Ineligible(Failure),
}

impl Outcome {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Outcome::Eligible)
    }
}

/// Evaluate `scheme` against `profile`, reporting the first failing constraint
pub fn check(scheme: &Scheme, profile: &CanonicalProfile) -> Outcome {
    let outcome = evaluate(scheme, profile);
    if let Outcome::Ineligible(failure) = outcome {
        tracing::trace!(scheme = %scheme.name, failure = ?failure, "Scheme not eligible");
    }
    outcome
}

/// Whether `profile` satisfies every constraint of `scheme`
pub fn is_eligible(scheme: &Scheme, profile: &CanonicalProfile) -> bool {
    check(scheme, profile).is_eligible()
}

fn evaluate(scheme: &Scheme, profile: &CanonicalProfile) -> Outcome {
    let elig = &scheme.eligibility;

    let checks = [
        categorical(ConstraintField::Occupation, &elig.occupation, profile.occupation()),
        categorical(ConstraintField::Gender, &elig.gender, profile.gender()),
        lower_bound(ConstraintField::AgeMin, elig.age_min, profile.age()),
        upper_bound(ConstraintField::AgeMax, elig.age_max, profile.age()),
        lower_bound(ConstraintField::IncomeMin, elig.income_min, profile.income()),
        upper_bound(ConstraintField::IncomeMax, elig.income_max, profile.income()),
        categorical(ConstraintField::State, &elig.state, profile.state()),
    ];

    // `checks` is evaluated eagerly but every entry is a cheap comparison;
    // the first failure in order is the one reported
    match checks.into_iter().flatten().next() {
        Some(failure) => Outcome::Ineligible(failure),
        None => Outcome::Eligible,
    }
}

fn categorical(
    field: ConstraintField,
    constraint: &Constraint,
    value: Option<&str>,
) -> Option<Failure> {
    let allowed = match constraint {
        Constraint::Unconstrained | Constraint::AnyAllowed => return None,
        Constraint::OneOf(allowed) => allowed,
    };
    let Some(value) = value else {
        return Some(Failure::Missing(field));
    };
    if allowed.is_empty() || allowed.contains(&value.to_lowercase()) {
        None
    } else {
        Some(Failure::Mismatch(field))
    }
}

fn lower_bound<T: PartialOrd>(field: ConstraintField, bound: Option<T>, value: Option<T>) -> Option<Failure> {
    let bound = bound?;
    match value {
        None => Some(Failure::Missing(field)),
        Some(v) if v < bound => Some(Failure::Mismatch(field)),
        Some(_) => None,
    }
}

fn upper_bound<T: PartialOrd>(field: ConstraintField, bound: Option<T>, value: Option<T>) -> Option<Failure> {
    let bound = bound?;
    match value {
        None => Some(Failure::Missing(field)),
        Some(v) if v > bound => Some(Failure::Mismatch(field)),
        Some(_) => None,
    }
}
