use serde::{Deserialize, Serialize};

/// The rule a candidate password failed.
///
/// Every rejected password maps to exactly one of these kinds. Consumers
/// translate them into transport responses (HTTP 400 and so on); this crate
/// only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    MinimumLength,
    NoDigit,
    NoLowerCase,
    NoSpecialCharacter,
}

impl ValidationErrorKind {
    /// Stable machine-readable code, identical to the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            Self::MinimumLength => "MINIMUM_LENGTH",
            Self::NoDigit => "NO_DIGIT",
            Self::NoLowerCase => "NO_LOWER_CASE",
            Self::NoSpecialCharacter => "NO_SPECIAL_CHARACTER",
        }
    }
}

/// A password rejected by one rule.
///
/// `Display` renders the `detail` text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{detail}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub detail: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// An unusable policy configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Umbrella error for callers that handle configuration and validation
/// failures through a single type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
