//! Canonicalized profile
//!
//! The only profile shape the eligibility evaluator accepts. It can only be
//! produced by the [`Canonicalizer`](crate::Canonicalizer), so raw user input
//! never reaches matching.

use serde::Serialize;
use sahaj_seva_core::Profile;

/// Profile whose categorical fields are canonical (or normalized unknown) tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalProfile {
    age: Option<u32>,
    gender: String,
    occupation: String,
    income: Option<f64>,
    state: String,
}

impl CanonicalProfile {
    pub(crate) fn new(
        age: Option<u32>,
        gender: String,
        occupation: String,
        income: Option<f64>,
        state: String,
    ) -> Self {
        Self {
            age,
            gender,
            occupation,
            income,
            state,
        }
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn income(&self) -> Option<f64> {
        self.income
    }

    /// Canonical gender, `None` when unknown
    pub fn gender(&self) -> Option<&str> {
        non_empty(&self.gender)
    }

    /// Canonical or normalized occupation, `None` when unknown
    pub fn occupation(&self) -> Option<&str> {
        non_empty(&self.occupation)
    }

    /// Canonical or normalized region, `None` when unknown
    pub fn state(&self) -> Option<&str> {
        non_empty(&self.state)
    }

    /// Back to the wire shape, empty strings for unknown fields
    pub fn to_profile(&self) -> Profile {
        Profile {
            age: self.age,
            gender: self.gender.clone(),
            occupation: self.occupation.clone(),
            income: self.income,
            state: self.state.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
