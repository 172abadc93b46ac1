//! Cross-cutting error types for climblog.
//!
//! Storage errors live in `climb-store`; the binary folds everything into
//! `anyhow` at the top level.

use thiserror::Error;

/// Errors raised by the record model and the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A field value was rejected. Recoverable by asking for the field again.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A climb with the same (name, location) key already exists.
    #[error("climb: `{name}` at `{location}` already exists")]
    DuplicateKey { name: String, location: String },

    /// No climb matches the (name, location) key.
    #[error("climb: `{name}` at `{location}` not found")]
    NotFound { name: String, location: String },

    /// A positional lookup fell outside the collection.
    #[error("No climb at index {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the caller should ask for the same field again.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
