//! Validation request decoding.
//!
//! Decoding never fails: anything that does not yield a text `regex` field is
//! treated as the empty pattern, which is valid. Bodies are read as a plain
//! JSON value so a repeated key keeps its last occurrence.

use serde_json::Value;

/// Body of a validation call.
///
/// Unknown fields are ignored; clients send extra rendering options to the
/// diagram routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRequest {
    /// The pattern to check.
    pub regex: String,
}

impl ValidationRequest {
    /// Create a request for a pattern.
    pub fn new(regex: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
        }
    }

    /// Decode a raw request body.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(document) => Self::from_value(&document),
            Err(error) => {
                tracing::warn!(%error, "unreadable validation request, using empty pattern");
                Self::default()
            }
        }
    }

    /// Read the request out of an already decoded JSON document.
    pub fn from_value(document: &Value) -> Self {
        let regex = document
            .get("regex")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self::new(regex)
    }

    /// The pattern to check.
    pub fn pattern(&self) -> &str {
        &self.regex
    }
}
