//! DuckDB warehouse backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;
use async_trait::async_trait;
use duckdb::Connection;
use silo_core::sql::escape_sql_string;
use std::path::Path;
use std::sync::Mutex;

/// DuckDB warehouse backend
///
/// The connection lives behind `Option` so that `close` can hand the
/// `Connection` back to DuckDB exactly once; later operations observe
/// `None` and fail with `[D003]`.
pub struct DuckDbBackend {
    conn: Mutex<Option<Connection>>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> DbResult<T>) -> DbResult<T> {
        let guard = self
            .conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        match guard.as_ref() {
            Some(conn) => f(conn),
            None => Err(DbError::Closed),
        }
    }

    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        self.with_conn(|conn| {
            conn.execute(sql, [])
                .map_err(|e| DbError::ExecutionError(e.to_string()))
        })
    }

    fn query_count_sync(&self, sql: &str) -> DbResult<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM ({})", sql), [], |row| {
                    row.get(0)
                })
                .map_err(|e| DbError::ExecutionError(e.to_string()))?;
            Ok(count as usize)
        })
    }
}

#[async_trait]
impl Warehouse for DuckDbBackend {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn query_count(&self, sql: &str) -> DbResult<usize> {
        self.query_count_sync(sql)
    }

    async fn load_csv(&self, table: &str, path: &str) -> DbResult<()> {
        let sql = format!(
            "CREATE OR REPLACE TABLE {} AS SELECT * FROM read_csv_auto('{}')",
            table,
            escape_sql_string(path)
        );
        self.execute_sync(&sql)
            .map_err(|e| DbError::CsvError(e.to_string()))?;
        Ok(())
    }

    async fn close(&self) -> DbResult<()> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        match guard.take() {
            Some(conn) => conn
                .close()
                .map_err(|(_, e)| DbError::ConnectionError(e.to_string())),
            None => Err(DbError::Closed),
        }
    }

    fn warehouse_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
