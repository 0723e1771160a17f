//! silo-deploy - Deployment pipeline for Silo
//!
//! This crate implements the environment-parameterized SQL deployment
//! pipeline: per-file statement execution, per-category ordered runs, and
//! the orchestrator that walks the fixed category sequence with fail-fast
//! semantics. Results are collected into a machine-readable run report.

pub mod error;
pub mod executor;
pub mod report;
pub mod runner;

pub use error::{DeployError, DeployResult};
pub use executor::execute_sql_file;
pub use report::{DeployReport, DeployStatus, FileRecord, FileStatus};
pub use runner::run_deployment;

#[cfg(test)]
pub(crate) mod test_utils;
