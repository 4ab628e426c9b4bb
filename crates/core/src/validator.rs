//! Pattern validation.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::PatternError;
use crate::result::ValidationResult;

/// Compilation limits applied to every pattern.
///
/// The defaults match `regex::RegexBuilder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Upper bound on the compiled program, in bytes.
    pub size_limit: usize,
    /// Maximum nesting depth of groups and classes.
    pub nest_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            size_limit: 10 * (1 << 20),
            nest_limit: 250,
        }
    }
}

/// Checks patterns against the `regex` grammar.
///
/// Holds nothing but immutable [`Limits`], so one instance can be shared
/// across any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: Limits,
}

impl Validator {
    /// Create a validator with the given limits.
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Limits this validator compiles with.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Compile `pattern`, discarding the matcher.
    pub fn check(&self, pattern: &str) -> Result<(), PatternError> {
        RegexBuilder::new(pattern)
            .size_limit(self.limits.size_limit)
            .nest_limit(self.limits.nest_limit)
            .build()
            .map(drop)
            .map_err(|err| self.classify(pattern, err))
    }

    /// Compile `pattern` and report the outcome.
    pub fn validate(&self, pattern: &str) -> ValidationResult {
        match self.check(pattern) {
            Ok(()) => ValidationResult::valid(),
            Err(err) => {
                tracing::debug!(error = %err, "pattern rejected");
                ValidationResult::invalid(err.to_string())
            }
        }
    }

    fn classify(&self, pattern: &str, err: regex::Error) -> PatternError {
        match err {
            regex::Error::Syntax(rendered) => PatternError::Syntax(Diagnostic::locate(
                pattern,
                self.limits.nest_limit,
                &rendered,
            )),
            regex::Error::CompiledTooBig(limit) => PatternError::TooLarge { limit },
            other => PatternError::Other(other.to_string()),
        }
    }
}

/// Validate `pattern` with the default [`Limits`].
pub fn validate(pattern: &str) -> ValidationResult {
    Validator::default().validate(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("")]
    #[case::anchored_class("^[a-z]+$")]
    #[case::alternation("cat|dog")]
    #[case::named_group(r"(?P<year>\d{4})-(?P<month>\d{2})")]
    #[case::lazy_repetition("a+?b*?")]
    #[case::unicode_class(r"\p{Greek}+")]
    #[case::escaped_paren(r"\(literal\)")]
    fn accepts_valid_patterns(#[case] pattern: &str) {
        assert_eq!(validate(pattern), ValidationResult::valid());
    }

    #[rstest]
    #[case::unclosed_group("(unclosed", "unclosed group")]
    #[case::unopened_group("closed)", "unopened group")]
    #[case::nothing_to_repeat("*invalid", "repetition operator missing expression")]
    #[case::unclosed_class("[a-z", "unclosed character class")]
    #[case::bad_range("[z-a]", "invalid character class range")]
    #[case::unknown_property(r"\p{NotAProperty}", "Unicode property")]
    fn rejects_malformed_patterns(#[case] pattern: &str, #[case] expected: &str) {
        let result = validate(pattern);
        assert!(!result.is_valid());
        let error = result.error().unwrap();
        assert!(error.contains(expected), "{pattern:?} -> {error:?}");
    }

    #[test]
    fn reports_position_of_unclosed_group() {
        let err = Validator::default().check("ab(cd").unwrap_err();
        assert_eq!(err.diagnostic().and_then(|d| d.position), Some(2));
    }

    #[test]
    fn size_limit_is_enforced() {
        let validator = Validator::new(Limits {
            size_limit: 64,
            ..Limits::default()
        });
        let err = validator.check(r"\w{50}").unwrap_err();
        assert!(matches!(err, PatternError::TooLarge { .. }), "{err:?}");
        assert!(!validator.validate(r"\w{50}").is_valid());
    }

    #[test]
    fn nest_limit_is_enforced() {
        let validator = Validator::new(Limits {
            nest_limit: 3,
            ..Limits::default()
        });
        let deep = format!("{}a{}", "(".repeat(10), ")".repeat(10));
        assert!(validator.check(&deep).is_err());
        assert!(Validator::default().check(&deep).is_ok());
    }

    #[test]
    fn reports_the_limits_it_compiles_with() {
        let limits = Limits {
            size_limit: 4096,
            nest_limit: 8,
        };
        assert_eq!(Validator::new(limits).limits(), limits);
        assert_eq!(Validator::default().limits(), Limits::default());
    }

    #[test]
    fn limits_deserialize_with_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"nest_limit": 16}"#).unwrap();
        assert_eq!(
            limits,
            Limits {
                nest_limit: 16,
                ..Limits::default()
            }
        );
    }

    proptest! {
        #[test]
        fn escaped_text_is_always_valid(text in ".*") {
            prop_assert!(validate(&regex::escape(&text)).is_valid());
        }

        #[test]
        fn validation_is_idempotent(pattern in r"[()\[\]*+?a-z|\\{}0-9^$.]{0,16}") {
            let first = validate(&pattern);
            let second = validate(&pattern);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.is_valid(), first.error().is_none());
        }
    }
}
