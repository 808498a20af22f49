//! Item Store Module
//!
//! The collection-like boundary between the gateway and the document database.
//!
//! ## Core Concepts
//! - **`ItemStore`**: Async trait offering the five collection calls the gateway needs.
//!   Backends report failures as a typed `StoreError` whose kind the gateway classifies.
//! - **Schema**: Every backend runs `schema::validate` before a write, so field
//!   constraints are reported the same way regardless of the backend.
//! - **`MemoryStore`**: `DashMap`-backed collection. Default backend and the test double.
//! - **`MongoStore`**: MongoDB collection, compiled with the `mongodb` feature.

pub mod error;
pub mod memory;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod schema;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::items::types::{CreateItemRequest, Item, ItemId};

pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

/// Abstract item collection.
///
/// Lookups by id return `Ok(None)` when the id is well-formed but absent, and a
/// `StoreErrorKind::InvalidId` error when the backend cannot parse it.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every document in the collection, in no particular order.
    async fn find(&self) -> StoreResult<Vec<Item>>;

    async fn find_by_id(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// Validates and inserts a new document. The store assigns the id.
    async fn insert(&self, draft: &CreateItemRequest) -> StoreResult<Item>;

    /// Replaces the mutable fields of a document and returns its new state.
    async fn find_by_id_and_replace(
        &self,
        id: &ItemId,
        draft: &CreateItemRequest,
    ) -> StoreResult<Option<Item>>;

    /// Removes a document and returns its last state.
    async fn find_by_id_and_delete(&self, id: &ItemId) -> StoreResult<Option<Item>>;
}
