//! Password rule validation.
//!
//! - [`rules`] -- the [`Rule`] trait and the four built-in rules.
//! - [`pipeline`] -- [`PasswordValidationPipeline`], which runs them fail-fast.
//! - [`charset`] -- ASCII reference sets used by the character-class rules.

pub mod charset;
pub mod pipeline;
pub mod rules;

pub use pipeline::PasswordValidationPipeline;
pub use rules::{DigitRule, LengthRule, LowerCaseRule, Rule, SpecialCharacterRule};

use crate::error::ValidationError;

/// Validate a password against the default policy (minimum length 8).
pub fn validate(password: &str) -> Result<(), ValidationError> {
    PasswordValidationPipeline::default().validate(password)
}
