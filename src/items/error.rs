//! Item Errors
//!
//! The three outcomes a failed item operation can have at the HTTP boundary.
//! The gateway produces these from `StoreError`s; handlers only turn them into
//! responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::protocol::ErrorResponse;
use super::types::ItemId;
use crate::store::{StoreError, StoreErrorKind};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// Client-supplied data violates the item's field constraints.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The identifier does not resolve to an existing item.
    #[error("Item with id {id} not found")]
    NotFound { id: String },

    /// The store or its connection failed for reasons unrelated to the request.
    #[error("Store failure: {message}")]
    Infrastructure { message: String },
}

impl ItemError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(id: &ItemId) -> Self {
        Self::NotFound {
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }

    /// Classifies a store failure.
    ///
    /// `id` is the identifier the operation was addressed to, if any. A
    /// malformed id is reported as not-found; without an id there is nothing to
    /// be missing, so the same kind counts as an infrastructure failure.
    pub fn classify(err: StoreError, id: Option<&ItemId>) -> Self {
        match (err.kind, id) {
            (StoreErrorKind::Validation, _) => Self::validation(err.message),
            (StoreErrorKind::InvalidId, Some(id)) => Self::not_found(id),
            (StoreErrorKind::InvalidId, None)
            | (StoreErrorKind::Unavailable, _)
            | (StoreErrorKind::Timeout, _)
            | (StoreErrorKind::Backend, _) => Self::infrastructure(err.message),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Infrastructure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Infrastructure { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
