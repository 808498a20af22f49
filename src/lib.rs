//! Items Service Library
//!
//! CRUD backend for a single `Item` resource stored in a document collection.
//! The binary (`main.rs`) wires these modules into an HTTP server.
//!
//! ## Modules
//! - **`items`**: The public API. Handlers delegate to `ItemGateway`, which owns
//!   every store call and classifies failures as validation, not-found or
//!   infrastructure errors.
//! - **`store`**: The `ItemStore` boundary, the shared document schema, and the
//!   in-memory and MongoDB backends.
//! - **`config`**: Flag/environment configuration for the binary.

pub mod config;
pub mod items;
pub mod store;
