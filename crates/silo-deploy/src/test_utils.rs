//! Shared test doubles for pipeline tests

use async_trait::async_trait;
use silo_db::{DbError, DbResult, Warehouse};
use std::sync::Mutex;

/// Recording warehouse for pipeline tests.
///
/// Records every executed statement, fails any statement containing
/// `fail_on`, and counts closes so tests can assert the close-exactly-once
/// discipline.
pub(crate) struct MockWarehouse {
    pub statements: Mutex<Vec<String>>,
    pub close_count: Mutex<usize>,
    pub fail_on: Option<String>,
    pub row_count: usize,
}

impl MockWarehouse {
    pub fn new() -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            close_count: Mutex::new(0),
            fail_on: None,
            row_count: 0,
        }
    }

    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::new()
        }
    }

    pub fn executed(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        *self.close_count.lock().unwrap()
    }
}

#[async_trait]
impl Warehouse for MockWarehouse {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        if *self.close_count.lock().unwrap() > 0 {
            return Err(DbError::Closed);
        }
        self.statements.lock().unwrap().push(sql.to_string());
        if let Some(needle) = &self.fail_on {
            if sql.contains(needle.as_str()) {
                return Err(DbError::ExecutionError(format!("injected failure: {sql}")));
            }
        }
        Ok(0)
    }

    async fn query_count(&self, _sql: &str) -> DbResult<usize> {
        Ok(self.row_count)
    }

    async fn load_csv(&self, table: &str, path: &str) -> DbResult<()> {
        self.statements
            .lock()
            .unwrap()
            .push(format!("LOAD CSV {table} {path}"));
        Ok(())
    }

    async fn close(&self) -> DbResult<()> {
        let mut closes = self.close_count.lock().unwrap();
        if *closes > 0 {
            return Err(DbError::Closed);
        }
        *closes += 1;
        Ok(())
    }

    fn warehouse_type(&self) -> &'static str {
        "mock"
    }
}
