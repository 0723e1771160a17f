//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use silo_core::WarehouseConfig;
use silo_db::Warehouse;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Resolve credentials from the environment and open the warehouse
/// connection.
///
/// Configuration is read here, once, before any SQL runs; a missing
/// variable fails before a connection is attempted.
pub(crate) fn connect_warehouse(global: &GlobalArgs) -> Result<Arc<dyn Warehouse>> {
    let config = WarehouseConfig::from_env().context("Failed to load warehouse configuration")?;

    if global.verbose {
        eprintln!(
            "[verbose] Connecting to {} backend, database '{}'",
            config.backend, config.database
        );
    }

    let warehouse = silo_db::connect(&config).context("Failed to connect to warehouse")?;
    log::info!(
        "Connected to {} as {}",
        warehouse.warehouse_type(),
        config.user
    );
    Ok(warehouse)
}

/// Close the connection after a run whose outcome is already known.
///
/// On a successful run a close failure is an error; after a failed run
/// the original error wins and the close failure is only logged.
pub(crate) async fn close_after_run(
    warehouse: &Arc<dyn Warehouse>,
    run_failed: bool,
) -> Result<()> {
    match warehouse.close().await {
        Ok(()) => Ok(()),
        Err(e) if run_failed => {
            log::warn!("Failed to close warehouse connection: {}", e);
            Ok(())
        }
        Err(e) => Err(e).context("Failed to close warehouse connection"),
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
