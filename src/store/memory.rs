use super::error::{StoreError, StoreResult};
use super::{ItemStore, schema};
use crate::items::types::{CreateItemRequest, Item, ItemId};

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-process item collection.
///
/// Documents are keyed by UUID v4 ids. Each operation touches a single
/// `DashMap` shard, so concurrent requests only contend when they hit the same
/// document. Cloning shares the underlying collection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<DashMap<Uuid, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn parse_id(id: &ItemId) -> StoreResult<Uuid> {
        Uuid::parse_str(id.as_str()).map_err(|_| StoreError::invalid_id(id.as_str()))
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn find(&self) -> StoreResult<Vec<Item>> {
        Ok(self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let key = Self::parse_id(id)?;
        Ok(self.documents.get(&key).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, draft: &CreateItemRequest) -> StoreResult<Item> {
        schema::validate(draft)?;

        let key = Uuid::new_v4();
        let item = Item::from_draft(ItemId(key.to_string()), draft.clone());
        self.documents.insert(key, item.clone());

        tracing::debug!(id = %item.id, "Inserted item document");
        Ok(item)
    }

    async fn find_by_id_and_replace(
        &self,
        id: &ItemId,
        draft: &CreateItemRequest,
    ) -> StoreResult<Option<Item>> {
        let key = Self::parse_id(id)?;
        schema::validate(draft)?;

        // Holding the shard guard keeps the lookup and the replace atomic.
        match self.documents.get_mut(&key) {
            Some(mut entry) => {
                let replaced = Item::from_draft(entry.id.clone(), draft.clone());
                *entry.value_mut() = replaced.clone();
                Ok(Some(replaced))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id_and_delete(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let key = Self::parse_id(id)?;
        Ok(self.documents.remove(&key).map(|(_, item)| item))
    }
}
