//! Item Document Schema
//!
//! Field constraints every backend enforces before a write reaches the
//! collection. Violations are collected per field and reported together as a
//! single `Validation` store error, the way a document mapper reports a failed
//! schema check.

use super::error::{StoreError, StoreResult};
use crate::items::types::CreateItemRequest;

/// Checks a draft against the item schema.
///
/// - `name` must contain at least one non-whitespace character.
/// - `quantity` must be zero or positive.
pub fn validate(draft: &CreateItemRequest) -> StoreResult<()> {
    let mut violations: Vec<String> = Vec::new();

    if draft.name.trim().is_empty() {
        violations.push("name: path `name` is required".to_string());
    }

    if draft.quantity < 0 {
        violations.push(format!(
            "quantity: value {} is less than minimum allowed value (0)",
            draft.quantity
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(StoreError::validation(format!(
            "Item validation failed: {}",
            violations.join(", ")
        )))
    }
}
