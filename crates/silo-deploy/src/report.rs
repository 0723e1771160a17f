//! Deploy run report
//!
//! A JSON record of one deployment run, written to
//! `target/deploy_results.json`. The report is advisory output for
//! operators and CI; it is never read back, so a failed run has no
//! resumption state and must be corrected and re-run from the start.

use crate::error::{DeployError, DeployResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use silo_core::Environment;
use std::path::Path;

/// Terminal status of a deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployStatus {
    Succeeded,
    Failed,
}

/// Outcome of a single script file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Success,
    Error,
}

/// Per-file execution record
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Script path as executed
    pub file: String,

    /// Category the script belongs to
    pub category: String,

    pub status: FileStatus,

    /// Statements executed. Zero for a failed file: partial progress
    /// within a file is not tracked, and there is no rollback of
    /// statements that did apply.
    pub statements: usize,

    pub duration_secs: f64,

    /// Error message if the file failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete record of one deployment run
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    /// Unique identifier for this run
    pub run_id: String,

    /// Target environment
    pub environment: Environment,

    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,

    pub status: DeployStatus,

    /// Error that terminated the run, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Files in execution order
    pub files: Vec<FileRecord>,
}

impl DeployReport {
    /// Write the report as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn write(&self, path: &Path) -> DeployResult<()> {
        let json = serde_json::to_string_pretty(self)?;

        let write_err = |source: std::io::Error| DeployError::ReportWrite {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, json).map_err(write_err)
    }

    /// Count of files that executed successfully
    pub fn succeeded_files(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Success)
            .count()
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
