//! Store Errors
//!
//! Typed failures reported by an `ItemStore`. The kind discriminator is what the
//! gateway classifies on, so every backend must map its native errors onto one
//! of these kinds.

use thiserror::Error;

/// Discriminator carried by every `StoreError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// A written document violates the collection schema.
    Validation,
    /// The identifier is not in a form the backend can look up.
    InvalidId,
    /// The backend could not be reached.
    Unavailable,
    /// The backend did not answer within the allotted time.
    Timeout,
    /// Any other backend failure (query, serialization, server error).
    Backend,
}

/// A failed store operation.
#[derive(Debug, Clone, Error)]
#[error("{kind:?}: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a schema validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Validation, message)
    }

    /// Create a malformed identifier error.
    #[must_use]
    pub fn invalid_id(id: &str) -> Self {
        Self::new(StoreErrorKind::InvalidId, format!("malformed id '{}'", id))
    }

    /// Create a connection error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable, message)
    }

    /// Create a timeout error.
    #[must_use]
    pub fn timeout(duration_ms: u64) -> Self {
        Self::new(
            StoreErrorKind::Timeout,
            format!("timeout after {}ms", duration_ms),
        )
    }

    /// Create a generic backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Backend, message)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
