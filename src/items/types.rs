//! Item Data Types
//!
//! Defines the persisted `Item` and the client-supplied draft used to create or
//! replace one. Both are plain serde structures; field constraints live in the
//! store's document schema (`store::schema`), not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a persisted item.
///
/// Assigned by the store on insert and never changed afterwards. The textual
/// form depends on the backend (UUID for the memory store, ObjectId hex for MongoDB).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The single resource managed by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
}

impl Item {
    /// Builds the stored form of a draft under a freshly assigned id.
    pub fn from_draft(id: ItemId, draft: CreateItemRequest) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
        }
    }

    /// Returns true if the mutable fields equal those of `draft`.
    pub fn matches(&self, draft: &CreateItemRequest) -> bool {
        self.name == draft.name
            && self.description == draft.description
            && self.quantity == draft.quantity
    }
}

/// Client-supplied field set for `POST /items` and `PUT /items/:id`.
///
/// Carries no `id`: any `id` sent by the client is ignored during deserialization.
/// `quantity` is signed so a negative value reaches the schema check and is
/// reported as a validation failure instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
}

impl CreateItemRequest {
    pub fn new(name: &str, description: Option<&str>, quantity: i64) -> Self {
        Self {
            name: name.to_string(),
            description: description.map(str::to_string),
            quantity,
        }
    }
}
