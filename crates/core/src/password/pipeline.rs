//! Fail-fast rule pipeline.

use super::rules::{DigitRule, LengthRule, LowerCaseRule, Rule, SpecialCharacterRule};
use crate::config::PolicyConfig;
use crate::error::ValidationError;

/// Runs the password rules in a fixed order and reports the first failure.
///
/// Order is length, digit, lower case, special character. When several rules
/// would fail, the earliest one in that order is the one reported.
#[derive(Debug)]
pub struct PasswordValidationPipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl PasswordValidationPipeline {
    /// Build the pipeline for a policy. The threshold was validated when the
    /// [`PolicyConfig`] was constructed.
    pub fn from_config(config: &PolicyConfig) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(LengthRule::from_config(config)),
            Box::new(DigitRule),
            Box::new(LowerCaseRule),
            Box::new(SpecialCharacterRule),
        ];
        Self { rules }
    }

    /// Rule identifiers in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Validate a candidate, stopping at the first rule it fails.
    ///
    /// The failing rule's error is returned unchanged.
    pub fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.validate(candidate) {
                tracing::debug!(
                    rule = rule.name(),
                    kind = err.kind.code(),
                    "Password rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Default for PasswordValidationPipeline {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}
