//! Verify command implementation
//!
//! Runs the read-only view checks declared in the check file: row-count
//! expectations per view, plus named predicates that must return no
//! rows. Every check runs regardless of earlier failures; the command
//! exits non-zero if any failed.

use anyhow::{bail, Result};
use silo_core::{CheckFile, ViewCheck};
use silo_db::Warehouse;
use std::path::Path;
use std::sync::Arc;

use crate::cli::{GlobalArgs, VerifyArgs};
use crate::commands::common;

async fn run_check(warehouse: &Arc<dyn Warehouse>, check: &ViewCheck) -> Vec<String> {
    let mut failures = Vec::new();

    let needs_count =
        check.min_rows.is_some() || check.max_rows.is_some() || check.exact_rows.is_some();
    if needs_count {
        match warehouse
            .query_count(&format!("SELECT * FROM {}", check.view))
            .await
        {
            Ok(count) => failures.extend(check.row_count_failures(count)),
            Err(e) => failures.push(format!("{}: count query failed: {}", check.view, e)),
        }
    }

    for predicate in &check.no_rows {
        match warehouse.query_count(&predicate.sql).await {
            Ok(0) => {}
            Ok(n) => failures.push(format!(
                "{}: {} returned {} violating rows",
                check.view, predicate.name, n
            )),
            Err(e) => failures.push(format!(
                "{}: {} query failed: {}",
                check.view, predicate.name, e
            )),
        }
    }

    failures
}

/// Execute the verify command
pub async fn execute(args: &VerifyArgs, global: &GlobalArgs) -> Result<()> {
    let checks_path = Path::new(&global.project_dir).join(&args.checks);
    let check_file = CheckFile::load(&checks_path)?;

    if check_file.checks.is_empty() {
        println!("No checks defined in {}.", checks_path.display());
        return Ok(());
    }

    let warehouse = common::connect_warehouse(global)?;

    println!("Running {} view checks...\n", check_file.checks.len());

    let mut failed = 0;
    for check in &check_file.checks {
        let failures = run_check(&warehouse, check).await;
        if failures.is_empty() {
            println!("  \u{2713} {}", check.view);
        } else {
            failed += 1;
            for failure in &failures {
                println!("  \u{2717} {}", failure);
            }
        }
    }

    common::close_after_run(&warehouse, failed > 0).await?;

    println!();
    if failed > 0 {
        bail!("{} of {} checks failed", failed, check_file.checks.len());
    }
    println!("All {} checks passed", check_file.checks.len());
    Ok(())
}
