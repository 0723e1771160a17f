//! Warehouse trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Warehouse abstraction trait for Silo
///
/// Implementations must be Send + Sync for async operation. A connection
/// is acquired once per deployment run and must be closed exactly once;
/// operations after `close` fail with `[D003]`.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Execute a single SQL statement, returning affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a query and return its row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Load a CSV file into a table, replacing it if it exists
    async fn load_csv(&self, table: &str, path: &str) -> DbResult<()>;

    /// Release the underlying connection. Idempotence is not provided:
    /// a second close fails with `[D003]`.
    async fn close(&self) -> DbResult<()>;

    /// Backend identifier for logging
    fn warehouse_type(&self) -> &'static str;
}
