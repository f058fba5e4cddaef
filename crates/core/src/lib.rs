//! Password policy validation.
//!
//! A candidate password is checked against four rules in a fixed order
//! (minimum length, digit, lower case letter, special character). The first
//! rule it fails is reported as a [`ValidationError`].
//!
//! ```rust
//! use passguard_core::{validate, ValidationErrorKind};
//!
//! assert!(validate("Abcdef1!").is_ok());
//!
//! let err = validate("ABCDEF12").unwrap_err();
//! assert_eq!(err.kind, ValidationErrorKind::NoLowerCase);
//! assert_eq!(err.to_string(), "Passwords must have at least 1 lower case letter!");
//! ```

pub mod config;
pub mod error;
pub mod password;

pub use config::PolicyConfig;
pub use error::{ConfigError, CoreError, ValidationError, ValidationErrorKind};
pub use password::{validate, PasswordValidationPipeline, Rule};
