//! silo-db - Warehouse abstraction layer for Silo
//!
//! This crate provides the `Warehouse` trait, a DuckDB implementation,
//! and a Snowflake stub, plus the backend selection factory.

pub mod duckdb;
pub mod error;
pub mod snowflake;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use snowflake::SnowflakeBackend;
pub use traits::Warehouse;

use silo_core::config::{BackendKind, WarehouseConfig};
use std::sync::Arc;

/// Open a warehouse connection for the configured backend.
///
/// For DuckDB, `config.database` is the database file path (`:memory:`
/// opens an in-memory database). The Snowflake backend is a stub and
/// fails with `[D005]`.
pub fn connect(config: &WarehouseConfig) -> DbResult<Arc<dyn Warehouse>> {
    match config.backend {
        BackendKind::DuckDb => Ok(Arc::new(DuckDbBackend::new(&config.database)?)),
        BackendKind::Snowflake => Ok(Arc::new(SnowflakeBackend::new(config)?)),
    }
}
