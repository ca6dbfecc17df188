//! Eligibility matching for the scheme finder
//!
//! Features:
//! - Closed-world eligibility evaluation over canonical profiles
//! - Bilingual template explanations behind a pluggable [`Explainer`]
//! - Form-to-matches assembly with a state portal suggestion
//! - Scheme and region listings
//!
//! Everything here is synchronous and works on immutable, shared data; a
//! [`SchemeFinder`] can be cloned into any number of request handlers.

pub mod evaluator;
pub mod explain;
pub mod finder;
pub mod meta;

pub use evaluator::{check, is_eligible, ConstraintField, Failure, Outcome};
pub use explain::{
    format_rupees, ExplanationContext, ExplanationProfile, Explainer, TemplateExplainer,
};
pub use finder::{SchemeFinder, SchemeResult};
pub use meta::{SchemeItem, StateItem};
