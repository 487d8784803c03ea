//! HTTP API.
//!
//! Exposes the diagnosis engine, the selected-list symptom service and the
//! interaction checker as JSON endpoints. The router is composable:
//! `api_router()` returns a `Router` that can be mounted on any axum server
//! instance, and `start_server()` runs it with a shutdown handle.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
