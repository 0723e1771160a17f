//! Deploy command implementation

use anyhow::{bail, Result};
use silo_core::Environment;
use silo_deploy::{run_deployment, DeployStatus, FileStatus};
use std::path::Path;

use crate::cli::{DeployArgs, GlobalArgs};
use crate::commands::common;

/// Execute the deploy command
pub async fn execute(args: &DeployArgs, global: &GlobalArgs) -> Result<()> {
    let env: Environment = args.env.into();
    let project_root = Path::new(&global.project_dir);
    let scripts_root = project_root.join("scripts");

    println!("Deploying to {} environment...\n", env);

    let warehouse = common::connect_warehouse(global)?;
    let report = run_deployment(&warehouse, &scripts_root, env).await;
    let failed = report.status == DeployStatus::Failed;

    for record in &report.files {
        match record.status {
            FileStatus::Success => println!(
                "  \u{2713} {} ({} statements) [{:.0}ms]",
                record.file,
                record.statements,
                record.duration_secs * 1000.0
            ),
            FileStatus::Error => println!(
                "  \u{2717} {} - {}",
                record.file,
                record.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    let report_path = project_root.join("target").join("deploy_results.json");
    if let Err(e) = report.write(&report_path) {
        log::warn!("{}", e);
    } else if global.verbose {
        eprintln!("[verbose] Wrote deploy report to {}", report_path.display());
    }

    // The connection is released exactly once, on success and on failure.
    // Results are printed and the report written first, so a close
    // failure never discards the run record.
    common::close_after_run(&warehouse, failed).await?;

    println!();
    if failed {
        bail!(
            "Deployment to {} failed: {}",
            env,
            report.error.as_deref().unwrap_or("unknown error")
        );
    }

    println!(
        "Deployment to {} completed successfully ({} files)",
        env,
        report.succeeded_files()
    );
    Ok(())
}

#[cfg(test)]
#[path = "deploy_test.rs"]
mod tests;
