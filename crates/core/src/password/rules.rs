//! Individual password rules.

use std::fmt;

use super::charset::{CharSet, DIGITS, LOWERCASE, PUNCTUATION};
use crate::config::PolicyConfig;
use crate::error::{ValidationError, ValidationErrorKind};

/// A single independent password constraint.
///
/// Implementations hold only fixed configuration; `validate` depends on
/// nothing but that configuration and the candidate.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Short identifier used in log events.
    fn name(&self) -> &'static str;

    /// Return `Ok(())` if the candidate satisfies the rule.
    fn validate(&self, candidate: &str) -> Result<(), ValidationError>;
}

/// Rejects candidates shorter than `min_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    min_length: usize,
}

impl LengthRule {
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            min_length: config.min_length(),
        }
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        // Counted in chars so multi-byte input is not over-credited.
        if candidate.chars().count() < self.min_length {
            return Err(ValidationError::new(
                ValidationErrorKind::MinimumLength,
                format!(
                    "Passwords must have at least {} characters!",
                    self.min_length
                ),
            ));
        }
        Ok(())
    }
}

/// Shared shape of the character-class rules: fail when the candidate and
/// the reference set have no character in common.
fn require_any(
    set: &CharSet,
    candidate: &str,
    kind: ValidationErrorKind,
    detail: &str,
) -> Result<(), ValidationError> {
    if set.is_disjoint(candidate) {
        return Err(ValidationError::new(kind, detail));
    }
    Ok(())
}

/// Requires at least one ASCII digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitRule;

impl Rule for DigitRule {
    fn name(&self) -> &'static str {
        "digit"
    }

    fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        require_any(
            &DIGITS,
            candidate,
            ValidationErrorKind::NoDigit,
            "Passwords must have at least 1 digit!",
        )
    }
}

/// Requires at least one ASCII lowercase letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerCaseRule;

impl Rule for LowerCaseRule {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        require_any(
            &LOWERCASE,
            candidate,
            ValidationErrorKind::NoLowerCase,
            "Passwords must have at least 1 lower case letter!",
        )
    }
}

/// Requires at least one ASCII punctuation character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialCharacterRule;

impl Rule for SpecialCharacterRule {
    fn name(&self) -> &'static str {
        "special_character"
    }

    fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        require_any(
            &PUNCTUATION,
            candidate,
            ValidationErrorKind::NoSpecialCharacter,
            "Passwords must have at least 1 especial character!",
        )
    }
}
