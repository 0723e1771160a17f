//! Per-file statement execution
//!
//! A script executes as a unit: environment substitution, then each
//! statement in order against the live connection. The first failing
//! statement aborts the file; there is no statement-level retry and no
//! transaction wrapping beyond what the connection provides.

use crate::error::{DeployError, DeployResult};
use silo_core::sql::{bind_environment, split_statements, statement_preview};
use silo_core::Environment;
use silo_db::Warehouse;
use std::path::Path;
use std::sync::Arc;

/// Execute one SQL script against the warehouse, bound to `env`.
///
/// Returns the number of statements executed.
pub async fn execute_sql_file(
    warehouse: &Arc<dyn Warehouse>,
    path: &Path,
    env: Environment,
) -> DeployResult<usize> {
    let sql = std::fs::read_to_string(path).map_err(|source| DeployError::ScriptRead {
        path: path.display().to_string(),
        source,
    })?;

    let sql = bind_environment(&sql, env);
    let statements = split_statements(&sql);

    let mut executed = 0;
    for statement in &statements {
        log::info!("Executing: {}...", statement_preview(statement));
        warehouse
            .execute(statement)
            .await
            .map_err(|source| DeployError::Statement {
                file: path.display().to_string(),
                statement: statement_preview(statement).to_string(),
                source,
            })?;
        executed += 1;
    }

    log::info!("Successfully executed {}", path.display());
    Ok(executed)
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
