//! Items Module
//!
//! The public CRUD API over the single `Item` resource.
//!
//! ## Flow
//! Handler -> Gateway -> Store. Results travel back unchanged; failures are
//! classified once, at the gateway, into `ItemError::{Validation, NotFound,
//! Infrastructure}`, and handlers map each kind to a fixed status code
//! (400, 404, 500).
//!
//! ## Submodules
//! - **`types`**: `Item`, `ItemId` and the `CreateItemRequest` draft.
//! - **`gateway`**: `ItemGateway`, the only component talking to the store.
//! - **`handlers`**: axum handlers and the `routes` builder.
//! - **`error`**: `ItemError` and its response mapping.
//! - **`protocol`**: Endpoint paths and error/health bodies.

pub mod error;
pub mod gateway;
pub mod handlers;
pub mod protocol;
pub mod types;


pub use handlers::routes;
