//! Citizen profile
//!
//! A `Profile` is the raw, per-request shape: either what the extractor pulled
//! out of free text or what a form submitted. Categorical fields hold whatever
//! the user typed; an empty string means "unknown". Canonicalization into the
//! fixed vocabulary happens in the text_processing crate.

use serde::{Deserialize, Deserializer, Serialize};

/// Citizen profile with independently optional fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,

    /// Gender (raw or canonical), empty if unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: String,

    /// Occupation (raw or canonical), empty if unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub occupation: String,

    /// Annual income in rupees
    #[serde(default)]
    pub income: Option<f64>,

    /// State or union territory (raw or canonical), empty if unknown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.income = Some(income);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// True when no field carries information
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.income.is_none()
            && self.gender.trim().is_empty()
            && self.occupation.trim().is_empty()
            && self.state.trim().is_empty()
    }
}

/// Form clients send `null` for untouched text fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
