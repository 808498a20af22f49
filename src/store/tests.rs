//! Store Module Tests
//!
//! Validates the document schema and the in-memory collection.
//!
//! ## Test Scopes
//! - **Schema**: Field constraints and the combined violation message.
//! - **MemoryStore**: Insert/lookup/replace/delete semantics and id handling.
//!
//! *Note: `MongoStore` needs a live cluster and is not covered here.*

#[cfg(test)]
mod tests {
    use crate::items::types::{CreateItemRequest, ItemId};
    use crate::store::error::{StoreError, StoreErrorKind};
    use crate::store::memory::MemoryStore;
    use crate::store::schema;
    use crate::store::ItemStore;
    use std::sync::Arc;

    fn draft(name: &str, quantity: i64) -> CreateItemRequest {
        CreateItemRequest::new(name, Some("test item"), quantity)
    }

    // ============================================================
    // SCHEMA TESTS
    // ============================================================

    #[test]
    fn test_schema_accepts_valid_draft() {
        assert!(schema::validate(&draft("Item One", 100)).is_ok());
    }

    #[test]
    fn test_schema_accepts_zero_quantity_and_missing_description() {
        let d = CreateItemRequest::new("Empty shelf", None, 0);
        assert!(schema::validate(&d).is_ok());
    }

    #[test]
    fn test_schema_rejects_blank_name() {
        let err = schema::validate(&draft("   ", 1)).unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Validation);
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_schema_reports_every_violation() {
        let err = schema::validate(&draft("", -5)).unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Validation);
        assert!(err.message.contains("name"), "got: {}", err.message);
        assert!(err.message.contains("quantity"), "got: {}", err.message);
    }

    #[test]
    fn test_store_error_constructors() {
        assert_eq!(StoreError::invalid_id("x").kind, StoreErrorKind::InvalidId);
        assert_eq!(StoreError::timeout(10).kind, StoreErrorKind::Timeout);
        assert_eq!(
            StoreError::unavailable("down").kind,
            StoreErrorKind::Unavailable
        );
        assert!(StoreError::invalid_id("x").message.contains("'x'"));
    }

    // ============================================================
    // MEMORY STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_insert_assigns_unique_ids() {
        let store = MemoryStore::new();

        let a = store.insert(&draft("A", 1)).await.unwrap();
        let b = store.insert(&draft("B", 2)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_memory_insert_then_find_by_id() {
        let store = MemoryStore::new();
        let d = draft("Item One", 100);

        let created = store.insert(&d).await.unwrap();
        let found = store.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created.clone()));
        assert!(created.matches(&d));
    }

    #[tokio::test]
    async fn test_memory_invalid_insert_persists_nothing() {
        let store = MemoryStore::new();

        let err = store.insert(&draft("", 3)).await.unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Validation);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_memory_find_returns_all_documents() {
        let store = MemoryStore::new();
        assert!(store.find().await.unwrap().is_empty());

        for i in 0..5 {
            store.insert(&draft(&format!("item_{}", i), i)).await.unwrap();
        }

        assert_eq!(store.find().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_memory_malformed_id_is_invalid_id() {
        let store = MemoryStore::new();
        let bad = ItemId::from("not-a-uuid");

        let err = store.find_by_id(&bad).await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::InvalidId);

        let err = store.find_by_id_and_delete(&bad).await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::InvalidId);
    }

    #[tokio::test]
    async fn test_memory_absent_id_is_none() {
        let store = MemoryStore::new();
        let absent = ItemId(uuid::Uuid::new_v4().to_string());

        assert!(store.find_by_id(&absent).await.unwrap().is_none());
        assert!(store
            .find_by_id_and_replace(&absent, &draft("X", 1))
            .await
            .unwrap()
            .is_none());
        assert!(store.find_by_id_and_delete(&absent).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_replace_preserves_id() {
        let store = MemoryStore::new();
        let created = store.insert(&draft("Before", 1)).await.unwrap();

        let replaced = store
            .find_by_id_and_replace(&created.id, &draft("After", 7))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "After");
        assert_eq!(replaced.quantity, 7);
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn test_memory_invalid_replace_keeps_old_state() {
        let store = MemoryStore::new();
        let created = store.insert(&draft("Keep", 4)).await.unwrap();

        let err = store
            .find_by_id_and_replace(&created.id, &draft("Keep", -1))
            .await
            .unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Validation);
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_memory_delete_returns_snapshot_once() {
        let store = MemoryStore::new();
        let created = store.insert(&draft("Gone", 2)).await.unwrap();

        let deleted = store.find_by_id_and_delete(&created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));

        let again = store.find_by_id_and_delete(&created.id).await.unwrap();
        assert!(again.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_memory_concurrent_inserts() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(&draft(&format!("item_{}", i), i)).await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(store.len(), 50);
    }
}
