//! Structured compilation diagnostics.
//!
//! `regex::Error::Syntax` only carries a pre-rendered, multi-line report.
//! [`Diagnostic::locate`] re-runs the `regex-syntax` parser to recover the
//! error kind and the offset it points at.

use std::fmt;

use regex_syntax::ast::Span;
use serde::{Deserialize, Serialize};

/// Why a pattern failed to compile, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Description of the failure as reported by the parser.
    pub message: String,
    /// Zero-based character offset the parser stopped at, when known.
    pub position: Option<usize>,
}

impl Diagnostic {
    /// Create a diagnostic from its parts.
    pub fn new(message: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Build a diagnostic for a pattern the engine rejected as a syntax error.
    ///
    /// `rendered` is the engine's own report; it is only used when the
    /// parser cannot reproduce the failure.
    pub(crate) fn locate(pattern: &str, nest_limit: u32, rendered: &str) -> Self {
        let mut parser = regex_syntax::ParserBuilder::new()
            .nest_limit(nest_limit)
            .build();

        match parser.parse(pattern) {
            Err(regex_syntax::Error::Parse(err)) => Self::at_span(pattern, err.kind(), err.span()),
            Err(regex_syntax::Error::Translate(err)) => {
                Self::at_span(pattern, err.kind(), err.span())
            }
            Err(other) => Self::new(other.to_string(), None),
            Ok(_) => Self::new(summary_line(rendered), None),
        }
    }

    fn at_span(pattern: &str, kind: &impl fmt::Display, span: &Span) -> Self {
        Self::new(kind.to_string(), Some(char_offset(pattern, span.start.offset)))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at position {position}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Convert a byte offset into a character offset.
fn char_offset(pattern: &str, byte_offset: usize) -> usize {
    pattern
        .get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
}

/// Pull the `error: ...` line out of a rendered `regex` report.
fn summary_line(rendered: &str) -> String {
    let last = rendered
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(rendered);
    last.strip_prefix("error: ").unwrap_or(last).to_string()
}
