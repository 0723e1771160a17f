//! Script categories and directory-ordered discovery
//!
//! Deployment scripts live under `scripts/<category>/` and execute in a
//! fixed category sequence; within a category, files run in lexicographic
//! filename order. Later categories assume earlier categories' schema and
//! object changes are already visible, so the sequence is never reordered
//! or parallelized.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// A fixed script grouping within a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCategory {
    Setup,
    Ingestion,
    Transformation,
    Analytics,
}

impl ScriptCategory {
    /// Deployment order: setup, ingestion, transformation, analytics
    pub const ORDER: [ScriptCategory; 4] = [
        ScriptCategory::Setup,
        ScriptCategory::Ingestion,
        ScriptCategory::Transformation,
        ScriptCategory::Analytics,
    ];

    /// Directory name under the scripts root
    pub fn dir_name(&self) -> &'static str {
        match self {
            ScriptCategory::Setup => "setup",
            ScriptCategory::Ingestion => "ingestion",
            ScriptCategory::Transformation => "transformation",
            ScriptCategory::Analytics => "analytics",
        }
    }

    /// Whether a file in this category's directory should be deployed.
    ///
    /// Analytics scripts only run when their name signals that they are
    /// parameterized by environment; every other category runs all of its
    /// `.sql` files.
    pub fn includes_file(&self, file_name: &str) -> bool {
        match self {
            ScriptCategory::Analytics => file_name.contains("parameterized"),
            _ => true,
        }
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Discover the `.sql` files to deploy for one category, sorted by
/// filename.
///
/// A missing category directory yields an empty list; deployments are
/// allowed to carry only a subset of the category directories.
pub fn discover_scripts(
    scripts_root: &Path,
    category: ScriptCategory,
) -> CoreResult<Vec<PathBuf>> {
    let dir = scripts_root.join(category.dir_name());
    if !dir.is_dir() {
        log::warn!("Script directory not found, skipping: {}", dir.display());
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(&dir).map_err(|source| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source,
    })?;

    let mut scripts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || !path.extension().is_some_and(|e| e == "sql") {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if category.includes_file(file_name) {
            scripts.push(path);
        }
    }

    scripts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(scripts)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
