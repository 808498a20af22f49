use super::error::ItemError;
use super::types::{CreateItemRequest, Item, ItemId};
use crate::store::{ItemStore, StoreError, StoreResult};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Owns every interaction with the item collection.
///
/// Each call is a single store round-trip; nothing is cached. Store failures
/// leave the gateway already classified as an `ItemError`. The store handle is
/// injected so the gateway can run against any `ItemStore`.
pub struct ItemGateway {
    store: Arc<dyn ItemStore>,
    store_timeout: Option<Duration>,
}

impl ItemGateway {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            store_timeout: None,
        }
    }

    /// Bounds every store round-trip by `timeout`. An elapsed deadline is
    /// reported as an infrastructure failure.
    pub fn with_store_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub async fn find_all(&self) -> Result<Vec<Item>, ItemError> {
        let items = self
            .round_trip(self.store.find())
            .await
            .map_err(|e| log_failure("find_all", ItemError::classify(e, None)))?;

        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    pub async fn find_one(&self, id: &ItemId) -> Result<Item, ItemError> {
        match self.round_trip(self.store.find_by_id(id)).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(log_failure("find_one", ItemError::not_found(id))),
            Err(e) => Err(log_failure("find_one", ItemError::classify(e, Some(id)))),
        }
    }

    pub async fn create(&self, draft: &CreateItemRequest) -> Result<Item, ItemError> {
        let item = self
            .round_trip(self.store.insert(draft))
            .await
            .map_err(|e| log_failure("create", ItemError::classify(e, None)))?;

        tracing::info!(id = %item.id, "Created item");
        Ok(item)
    }

    /// Replaces the mutable fields of `id` and returns the post-update state.
    pub async fn update(&self, id: &ItemId, draft: &CreateItemRequest) -> Result<Item, ItemError> {
        match self
            .round_trip(self.store.find_by_id_and_replace(id, draft))
            .await
        {
            Ok(Some(item)) => {
                tracing::info!(id = %item.id, "Updated item");
                Ok(item)
            }
            Ok(None) => Err(log_failure("update", ItemError::not_found(id))),
            Err(e) => Err(log_failure("update", ItemError::classify(e, Some(id)))),
        }
    }

    /// Removes `id` and returns the deleted snapshot.
    pub async fn delete(&self, id: &ItemId) -> Result<Item, ItemError> {
        match self.round_trip(self.store.find_by_id_and_delete(id)).await {
            Ok(Some(item)) => {
                tracing::info!(id = %item.id, "Deleted item");
                Ok(item)
            }
            Ok(None) => Err(log_failure("delete", ItemError::not_found(id))),
            Err(e) => Err(log_failure("delete", ItemError::classify(e, Some(id)))),
        }
    }

    async fn round_trip<T>(&self, call: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        match self.store_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or_else(|_| Err(StoreError::timeout(limit.as_millis() as u64))),
            None => call.await,
        }
    }
}

fn log_failure(operation: &str, err: ItemError) -> ItemError {
    match &err {
        ItemError::Infrastructure { message } => {
            tracing::error!(operation, "Store failure: {}", message)
        }
        ItemError::Validation { message } => {
            tracing::warn!(operation, "Rejected item: {}", message)
        }
        ItemError::NotFound { id } => tracing::debug!(operation, id = %id, "Item not found"),
    }
    err
}
