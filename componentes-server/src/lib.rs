//! componentes-server: HTTP CRUD service for hardware components
//!
//! Exposes a single resource, `componentes`, over five routes backed by
//! a PostgreSQL table. The connection pool is constructed explicitly and
//! injected into the handlers through shared state.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, HttpConfig};
pub use db::create_pool;
pub use http::{run_server, ServerConfig};
