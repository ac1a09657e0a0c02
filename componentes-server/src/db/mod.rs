//! Database layer - pool, table bootstrap, and the componentes repository

pub mod bootstrap;
pub mod pool;
pub mod repo;

pub use pool::{create_pool, create_pool_with_options};
pub use repo::{ComponenteRepo, DbError};
