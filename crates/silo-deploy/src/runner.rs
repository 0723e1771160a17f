//! Category runner and deployment orchestrator
//!
//! Categories run in the fixed sequence setup → ingestion →
//! transformation → analytics, strictly sequentially. Within a category,
//! scripts run in lexicographic filename order. The first failure
//! terminates the run; already-applied statements are not rolled back.

use crate::executor::execute_sql_file;
use crate::report::{DeployReport, DeployStatus, FileRecord, FileStatus};
use chrono::Utc;
use silo_core::{discover_scripts, Environment, ScriptCategory};
use silo_db::Warehouse;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Run the full deployment pipeline against an already-open connection.
///
/// The caller owns the connection lifecycle: this function never closes
/// the warehouse, so the connection can be released exactly once on every
/// exit path. Failure is recorded in the returned report rather than
/// bubbled as `Err`, so callers always get the full file-by-file record.
pub async fn run_deployment(
    warehouse: &Arc<dyn Warehouse>,
    scripts_root: &Path,
    env: Environment,
) -> DeployReport {
    let run_id = Uuid::new_v4().to_string();
    let started_at = Utc::now();
    log::info!("Starting deployment {} to {} environment", run_id, env);

    let mut files = Vec::new();
    let mut error = None;

    'categories: for category in ScriptCategory::ORDER {
        log::info!("Running {} scripts", category);

        let scripts = match discover_scripts(scripts_root, category) {
            Ok(scripts) => scripts,
            Err(e) => {
                log::error!("Script discovery failed for {}: {}", category, e);
                error = Some(e.to_string());
                break 'categories;
            }
        };

        for path in scripts {
            let start = Instant::now();
            match execute_sql_file(warehouse, &path, env).await {
                Ok(statements) => {
                    files.push(FileRecord {
                        file: path.display().to_string(),
                        category: category.to_string(),
                        status: FileStatus::Success,
                        statements,
                        duration_secs: start.elapsed().as_secs_f64(),
                        error: None,
                    });
                }
                Err(e) => {
                    log::error!("{}", e);
                    files.push(FileRecord {
                        file: path.display().to_string(),
                        category: category.to_string(),
                        status: FileStatus::Error,
                        statements: 0,
                        duration_secs: start.elapsed().as_secs_f64(),
                        error: Some(e.to_string()),
                    });
                    error = Some(e.to_string());
                    break 'categories;
                }
            }
        }
    }

    let status = if error.is_none() {
        log::info!("Deployment to {} completed successfully", env);
        DeployStatus::Succeeded
    } else {
        log::error!("Deployment to {} failed", env);
        DeployStatus::Failed
    };

    DeployReport {
        run_id,
        environment: env,
        started_at,
        completed_at: Utc::now(),
        status,
        error,
        files,
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
