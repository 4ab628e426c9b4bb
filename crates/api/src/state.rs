//! Shared handler state.

use std::sync::Arc;

use regviz_core::Validator;

/// State handed to every handler.
///
/// Holds only the immutable validator; nothing here is locked.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    validator: Arc<Validator>,
}

impl AppState {
    /// Create state around a configured validator.
    pub fn new(validator: Validator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// The shared validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}
