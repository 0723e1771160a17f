//! Warehouse connection configuration
//!
//! Credentials are resolved from the process environment exactly once, at
//! the entry point, into an explicit [`WarehouseConfig`] that is passed to
//! the connection factory. Nothing downstream reads the environment ad hoc.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Environment variables holding the warehouse credentials
pub const VAR_ACCOUNT: &str = "SILO_ACCOUNT";
pub const VAR_USER: &str = "SILO_USER";
pub const VAR_PASSWORD: &str = "SILO_PASSWORD";
pub const VAR_ROLE: &str = "SILO_ROLE";
pub const VAR_WAREHOUSE: &str = "SILO_WAREHOUSE";
pub const VAR_DATABASE: &str = "SILO_DATABASE";
/// Optional backend selector; defaults to DuckDB
pub const VAR_BACKEND: &str = "SILO_BACKEND";

/// Warehouse backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    DuckDb,
    Snowflake,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::DuckDb => write!(f, "duckdb"),
            BackendKind::Snowflake => write!(f, "snowflake"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "duckdb" => Ok(BackendKind::DuckDb),
            "snowflake" => Ok(BackendKind::Snowflake),
            _ => Err(CoreError::InvalidBackend {
                value: s.to_string(),
            }),
        }
    }
}

/// Connection settings for a deployment run
///
/// All credential fields are required: a deployment must fail on missing
/// configuration before any SQL runs. For the DuckDB backend, `database`
/// is the database file path (`:memory:` is accepted).
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub backend: BackendKind,
    pub account: String,
    pub user: String,
    pub password: String,
    pub role: String,
    pub warehouse: String,
    pub database: String,
}

impl WarehouseConfig {
    /// Build the config from the process environment.
    ///
    /// Fails with `[E001]` on the first missing required variable.
    pub fn from_env() -> CoreResult<Self> {
        let backend = match std::env::var(VAR_BACKEND) {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::DuckDb,
        };

        Ok(Self {
            backend,
            account: required_var(VAR_ACCOUNT)?,
            user: required_var(VAR_USER)?,
            password: required_var(VAR_PASSWORD)?,
            role: required_var(VAR_ROLE)?,
            warehouse: required_var(VAR_WAREHOUSE)?,
            database: required_var(VAR_DATABASE)?,
        })
    }
}

fn required_var(name: &str) -> CoreResult<String> {
    std::env::var(name).map_err(|_| CoreError::MissingEnvVar {
        name: name.to_string(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
