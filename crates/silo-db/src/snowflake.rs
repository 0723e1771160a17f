//! Snowflake warehouse backend stub

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;
use async_trait::async_trait;
use silo_core::config::WarehouseConfig;

/// Snowflake warehouse backend (stub implementation)
///
/// Placeholder for future Snowflake support; selecting it fails at
/// connection time.
pub struct SnowflakeBackend {
    // Connection details would go here
}

impl SnowflakeBackend {
    /// Create a new Snowflake backend (not yet implemented)
    pub fn new(_config: &WarehouseConfig) -> DbResult<Self> {
        Err(DbError::NotImplemented {
            backend: "snowflake".to_string(),
            feature: "connect".to_string(),
        })
    }
}

#[async_trait]
impl Warehouse for SnowflakeBackend {
    async fn execute(&self, _sql: &str) -> DbResult<usize> {
        Err(not_implemented("execute"))
    }

    async fn query_count(&self, _sql: &str) -> DbResult<usize> {
        Err(not_implemented("query_count"))
    }

    async fn load_csv(&self, _table: &str, _path: &str) -> DbResult<()> {
        Err(not_implemented("load_csv"))
    }

    async fn close(&self) -> DbResult<()> {
        Err(not_implemented("close"))
    }

    fn warehouse_type(&self) -> &'static str {
        "snowflake"
    }
}

fn not_implemented(feature: &str) -> DbError {
    DbError::NotImplemented {
        backend: "snowflake".to_string(),
        feature: feature.to_string(),
    }
}
