//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use silo_core::Environment;

/// Silo - deploy categorized SQL scripts to a warehouse per environment
#[derive(Parser, Debug)]
#[command(name = "silo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the SQL deployment pipeline against an environment
    Deploy(DeployArgs),

    /// Upload CSV/JSON data files from disk into the warehouse
    Load(LoadArgs),

    /// Run read-only checks against analytic views
    Verify(VerifyArgs),
}

/// Target environment as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvArg {
    #[value(name = "DEV")]
    Dev,
    #[value(name = "TEST")]
    Test,
    #[value(name = "PROD")]
    Prod,
}

impl From<EnvArg> for Environment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Dev => Environment::Dev,
            EnvArg::Test => Environment::Test,
            EnvArg::Prod => Environment::Prod,
        }
    }
}

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Environment to deploy to
    #[arg(long, value_enum)]
    pub env: EnvArg,
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Directory containing the data files, relative to the project dir
    #[arg(long, default_value = "data")]
    pub data_dir: String,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Check file path, relative to the project dir
    #[arg(long, default_value = "checks.yml")]
    pub checks: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
