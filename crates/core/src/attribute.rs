//! Categorical profile attributes that have a lexicon

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Which lexicon a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconKind {
    Gender,
    Occupation,
    State,
}

impl LexiconKind {
    pub const ALL: [LexiconKind; 3] = [Self::Gender, Self::Occupation, Self::State];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Occupation => "occupation",
            Self::State => "state",
        }
    }
}

impl FromStr for LexiconKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gender" => Ok(Self::Gender),
            "occupation" => Ok(Self::Occupation),
            "state" | "region" => Ok(Self::State),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
