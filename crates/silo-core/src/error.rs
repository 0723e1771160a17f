//! Error types for silo-core

use thiserror::Error;

/// Core error type for Silo
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Required environment variable is not set
    #[error("[E001] Missing required environment variable: {name}")]
    MissingEnvVar { name: String },

    /// E002: Unknown deployment environment name
    #[error("[E002] Invalid environment '{value}': expected DEV, TEST, or PROD")]
    InvalidEnvironment { value: String },

    /// E003: Unknown warehouse backend name
    #[error("[E003] Invalid backend '{value}': expected 'duckdb' or 'snowflake'")]
    InvalidBackend { value: String },

    /// E004: IO error
    #[error("[E004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E005: IO error with file path context
    #[error("[E005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E006: Check file parse error
    #[error("[E006] Check file parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
