//! Error types for silo-deploy

use silo_core::CoreError;
use silo_db::DbError;
use thiserror::Error;

/// Deployment pipeline errors
#[derive(Error, Debug)]
pub enum DeployError {
    /// P001: Script file could not be read
    #[error("[P001] Failed to read script '{path}': {source}")]
    ScriptRead {
        path: String,
        source: std::io::Error,
    },

    /// P002: A statement in a script failed to execute
    #[error("[P002] Error executing {file} at statement '{statement}': {source}")]
    Statement {
        file: String,
        statement: String,
        source: DbError,
    },

    /// P003: Script discovery failed
    #[error("[P003] {0}")]
    Discovery(#[from] CoreError),

    /// P004: Run report serialization failed
    #[error("[P004] Failed to serialize deploy report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    /// P005: Run report could not be written
    #[error("[P005] Failed to write deploy report '{path}': {source}")]
    ReportWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for DeployError
pub type DeployResult<T> = Result<T, DeployError>;
