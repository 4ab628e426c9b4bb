//! Pattern compilation errors.

use crate::diagnostic::Diagnostic;

/// Why the engine refused to compile a pattern.
///
/// Every variant renders to the human-readable text sent back as
/// `ValidationResult::error`. None of them is a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not valid syntax.
    #[error("{0}")]
    Syntax(Diagnostic),

    /// The pattern parsed but its compiled program is over the size limit.
    #[error("compiled pattern exceeds the size limit of {limit} bytes")]
    TooLarge {
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Any other engine failure.
    #[error("{0}")]
    Other(String),
}

impl PatternError {
    /// The structured diagnostic, for syntax errors.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Syntax(diag) => Some(diag),
            _ => None,
        }
    }
}
