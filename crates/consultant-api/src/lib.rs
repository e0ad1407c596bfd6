//! HTTP API for the consultant locations service.
//!
//! This crate provides an Axum HTTP server that exposes the single shared
//! [`LocationStore`](consultant_core::LocationStore):
//!
//! - **`GET {base}/locations/{id}`** returns the whole current collection
//!   as JSON. The id is logged but does not filter anything.
//! - **`POST {base}/consultantlocations/`** replaces the collection with
//!   the request body (JSON or XML) and echoes it back in the same family.
//! - **`GET {base}/api-docs`** describes the route table.
//!
//! # Architecture
//!
//! Handlers take an immutable snapshot from the store and serialize it
//! outside any lock. The JSON/XML decision for writes lives in
//! [`representation`] and is a two-way branch on the request's media
//! subtype.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod representation;
pub mod router;
pub mod server;
pub mod state;
mod xml;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use representation::{Representation, RepresentationError};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
