//! Password policy configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Minimum number of characters required when nothing else is configured.
pub const DEFAULT_MIN_LENGTH: usize = 8;

const MIN_LENGTH_VAR: &str = "PASSWORD_MIN_LENGTH";

/// Tunable parameters of the password policy.
///
/// Only the length threshold is configurable; the character-class rules are
/// fixed. Every constructor, deserialization included, rejects a zero
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPolicyConfig")]
pub struct PolicyConfig {
    min_length: usize,
}

#[derive(Deserialize)]
struct RawPolicyConfig {
    #[serde(default = "default_min_length")]
    min_length: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

impl TryFrom<RawPolicyConfig> for PolicyConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPolicyConfig) -> Result<Self, Self::Error> {
        Self::new(raw.min_length)
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PolicyConfig {
    /// Build a policy with the given minimum length in characters.
    pub fn new(min_length: usize) -> Result<Self, ConfigError> {
        checked("min_length", min_length)
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `PASSWORD_MIN_LENGTH` | `8`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(MIN_LENGTH_VAR).ok();
        parse_env(raw.as_deref())
    }

    /// Minimum password length in characters (default: `8`).
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

fn checked(key: &'static str, min_length: usize) -> Result<PolicyConfig, ConfigError> {
    if min_length == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            message: "must be a positive integer, got 0".to_string(),
        });
    }
    Ok(PolicyConfig { min_length })
}

fn parse_env(raw: Option<&str>) -> Result<PolicyConfig, ConfigError> {
    let Some(raw) = raw else {
        return Ok(PolicyConfig::default());
    };
    let min_length = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidValue {
            key: MIN_LENGTH_VAR,
            message: format!("must be a positive integer, got {raw:?}"),
        })?;
    checked(MIN_LENGTH_VAR, min_length)
}
