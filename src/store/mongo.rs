use super::error::{StoreError, StoreResult};
use super::{ItemStore, schema};
use crate::items::types::{CreateItemRequest, Item, ItemId};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Server error code for a document rejected by a collection `$jsonSchema` validator.
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

/// On-disk document shape. `_id` is left out on writes so the server assigns it.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    description: Option<String>,
    quantity: i64,
}

impl ItemDocument {
    fn from_draft(draft: &CreateItemRequest) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            description: draft.description.clone(),
            quantity: draft.quantity,
        }
    }

    fn into_item(self) -> StoreResult<Item> {
        let id = self
            .id
            .ok_or_else(|| StoreError::backend("document is missing _id"))?;
        Ok(Item {
            id: ItemId(id.to_hex()),
            name: self.name,
            description: self.description,
            quantity: self.quantity,
        })
    }
}

/// Item collection stored in MongoDB.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<ItemDocument>,
}

impl MongoStore {
    /// Connects to the cluster and verifies it answers a ping.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;

        tracing::info!("Connected to MongoDB database '{}'", database);

        Ok(Self {
            collection: db.collection(collection),
        })
    }

    fn parse_id(id: &ItemId) -> StoreResult<ObjectId> {
        ObjectId::parse_str(id.as_str()).map_err(|_| StoreError::invalid_id(id.as_str()))
    }
}

#[async_trait]
impl ItemStore for MongoStore {
    async fn find(&self) -> StoreResult<Vec<Item>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await.map_err(map_mongo_error)?;

        documents.into_iter().map(ItemDocument::into_item).collect()
    }

    async fn find_by_id(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let oid = Self::parse_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?
            .map(ItemDocument::into_item)
            .transpose()
    }

    async fn insert(&self, draft: &CreateItemRequest) -> StoreResult<Item> {
        schema::validate(draft)?;

        let document = ItemDocument::from_draft(draft);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::backend("server returned a non-ObjectId _id"))?;

        Ok(Item::from_draft(ItemId(oid.to_hex()), draft.clone()))
    }

    async fn find_by_id_and_replace(
        &self,
        id: &ItemId,
        draft: &CreateItemRequest,
    ) -> StoreResult<Option<Item>> {
        let oid = Self::parse_id(id)?;
        schema::validate(draft)?;

        self.collection
            .find_one_and_replace(doc! { "_id": oid }, ItemDocument::from_draft(draft))
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?
            .map(ItemDocument::into_item)
            .transpose()
    }

    async fn find_by_id_and_delete(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let oid = Self::parse_id(id)?;
        self.collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?
            .map(ItemDocument::into_item)
            .transpose()
    }
}

fn map_mongo_error(err: mongodb::error::Error) -> StoreError {
    let server_error = match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => {
            return StoreError::unavailable(err.to_string());
        }
        // Inserts report schema rejections as write errors, findAndModify as command errors.
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            Some((write_error.code, write_error.message.as_str()))
        }
        ErrorKind::Command(command_error) => {
            Some((command_error.code, command_error.message.as_str()))
        }
        _ => None,
    };

    match server_error {
        Some((code, message)) => classify_server_code(code, message),
        None => StoreError::backend(err.to_string()),
    }
}

fn classify_server_code(code: i32, message: &str) -> StoreError {
    if code == DOCUMENT_VALIDATION_FAILURE {
        StoreError::validation(message)
    } else {
        StoreError::backend(format!("server error {}: {}", code, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreErrorKind;

    #[test]
    fn test_document_validation_code_is_validation() {
        let err = classify_server_code(DOCUMENT_VALIDATION_FAILURE, "Document failed validation");

        assert_eq!(err.kind, StoreErrorKind::Validation);
        assert_eq!(err.message, "Document failed validation");
    }

    #[test]
    fn test_other_server_codes_are_backend() {
        // 11000: duplicate key
        let err = classify_server_code(11000, "E11000 duplicate key error");

        assert_eq!(err.kind, StoreErrorKind::Backend);
        assert!(err.message.contains("11000"));
    }
}
