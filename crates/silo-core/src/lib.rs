//! silo-core - Core library for Silo
//!
//! This crate provides the shared types used across all Silo components:
//! deployment environments, script categories and discovery, statement
//! splitting and environment substitution, warehouse credential
//! configuration, and view-check definitions.

pub mod checks;
pub mod config;
pub mod environment;
pub mod error;
pub mod script;
pub mod sql;

pub use checks::{CheckFile, Predicate, ViewCheck};
pub use config::{BackendKind, WarehouseConfig};
pub use environment::Environment;
pub use error::{CoreError, CoreResult};
pub use script::{discover_scripts, ScriptCategory};
