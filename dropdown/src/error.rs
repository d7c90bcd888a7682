//! Error types

use thiserror::Error;

/// Errors raised while loading configuration or installing controllers.
///
/// Clicks themselves never fail: a missing trigger or menu only means the
/// dropdown does nothing.
#[derive(Debug, Error)]
pub enum DropdownError {
    /// The configuration JSON could not be parsed.
    #[error("invalid dropdown configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Two bindings name the same trigger.
    #[error("trigger '{0}' is bound more than once")]
    DuplicateTrigger(String),

    /// A binding has an empty trigger ID.
    #[error("binding {index} has an empty trigger id")]
    EmptyTrigger { index: usize },

    /// A marker class is empty or contains whitespace.
    #[error("{field} must be a single non-empty class name, got '{value}'")]
    InvalidClass { field: &'static str, value: String },

    /// The browser rejected a DOM call.
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    #[error("browser error: {0}")]
    Js(String),
}

impl DropdownError {
    pub fn invalid_class(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidClass {
            field,
            value: value.into(),
        }
    }
}
