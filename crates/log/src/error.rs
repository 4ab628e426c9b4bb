//! Logger errors.

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// Filter string as configured.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}
