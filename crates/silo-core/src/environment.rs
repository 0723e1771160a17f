//! Deployment environment selection
//!
//! An [`Environment`] is chosen once per deployment run and is immutable
//! for the run's duration. Scripts are parameterized by it through the
//! marker substitution in [`crate::sql::bind_environment`].

use crate::error::CoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Target deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Dev,
    Test,
    Prod,
}

impl Environment {
    /// All environments, in promotion order
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Test, Environment::Prod];

    /// Uppercase name as it appears in SQL scripts (`SET ENV = 'DEV';`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "DEV",
            Environment::Test => "TEST",
            Environment::Prod => "PROD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEV" => Ok(Environment::Dev),
            "TEST" => Ok(Environment::Test),
            "PROD" => Ok(Environment::Prod),
            _ => Err(CoreError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
