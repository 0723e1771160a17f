//! View-check definitions for `silo verify`
//!
//! Checks are declared in a YAML file and run read-only against the
//! warehouse. Two kinds are supported: row-count expectations on a view,
//! and named predicates that must return zero rows.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level check file (`checks.yml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckFile {
    #[serde(default)]
    pub checks: Vec<ViewCheck>,
}

/// Assertions against one analytic view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewCheck {
    /// View name, optionally schema-qualified
    pub view: String,

    /// Minimum row count (inclusive)
    #[serde(default)]
    pub min_rows: Option<usize>,

    /// Maximum row count (inclusive)
    #[serde(default)]
    pub max_rows: Option<usize>,

    /// Exact row count
    #[serde(default)]
    pub exact_rows: Option<usize>,

    /// Queries that must return no rows (invariant violations)
    #[serde(default)]
    pub no_rows: Vec<Predicate>,
}

/// A named query whose result set must be empty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Predicate {
    pub name: String,
    pub sql: String,
}

impl ViewCheck {
    /// Evaluate the row-count expectations against an observed count.
    ///
    /// Returns one human-readable failure per violated expectation;
    /// empty means the counts pass. Predicates (`no_rows`) are evaluated
    /// separately since they require their own queries.
    pub fn row_count_failures(&self, count: usize) -> Vec<String> {
        let mut failures = Vec::new();
        if let Some(min) = self.min_rows {
            if count < min {
                failures.push(format!(
                    "{}: expected at least {} rows, got {}",
                    self.view, min, count
                ));
            }
        }
        if let Some(max) = self.max_rows {
            if count > max {
                failures.push(format!(
                    "{}: expected at most {} rows, got {}",
                    self.view, max, count
                ));
            }
        }
        if let Some(exact) = self.exact_rows {
            if count != exact {
                failures.push(format!(
                    "{}: expected exactly {} rows, got {}",
                    self.view, exact, count
                ));
            }
        }
        failures
    }
}

impl CheckFile {
    /// Load and parse a check file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "checks_test.rs"]
mod tests;
