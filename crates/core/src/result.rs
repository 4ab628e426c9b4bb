//! Validation outcome.

use serde::Serialize;

/// Outcome of validating one pattern.
///
/// `error` is present exactly when `valid` is false; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidationResult {
    /// The pattern compiled.
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// The pattern did not compile, for the given reason.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Why the pattern did not compile.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
