//! Items HTTP Protocol
//!
//! Routes and response bodies of the public item API. Request bodies are
//! `CreateItemRequest` (see `types`); successful responses carry `Item` values
//! directly.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint: `GET` lists, `POST` creates.
pub const ENDPOINT_ITEMS: &str = "/items";
/// Member endpoint: `GET` fetches, `PUT` replaces, `DELETE` removes.
pub const ENDPOINT_ITEM: &str = "/items/:id";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Data Transfer Objects ---

/// Body returned for every failed item request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// One of `validation_error`, `not_found`, `internal_error`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
