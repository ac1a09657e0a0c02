//! HTTP server layer
//!
//! Axum server with:
//! - JSON error responses
//! - Request tracing
//! - Static asset serving
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
