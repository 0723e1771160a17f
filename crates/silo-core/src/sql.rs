//! Statement splitting and environment substitution
//!
//! Scripts carry a fixed marker statement (`SET ENV = 'DEV';`) that binds
//! them to a target environment at deploy time. Substitution is plain
//! textual replacement, not templating: it does not generalize to
//! arbitrary variables, and a script without the marker passes through
//! unchanged.

use crate::environment::Environment;

/// The marker statement rewritten by [`bind_environment`]
pub const ENV_MARKER: &str = "SET ENV = 'DEV';";

/// Rewrite every occurrence of the environment marker to name `env`.
///
/// Scripts that do not contain the exact marker are returned unchanged.
pub fn bind_environment(sql: &str, env: Environment) -> String {
    let bound = format!("SET ENV = '{}';", env);
    sql.replace(ENV_MARKER, &bound)
}

/// Split a script into non-empty, whitespace-trimmed statements.
///
/// Splits on the `;` delimiter only. This is not SQL-aware: a `;` inside
/// a string literal, a comment, or a procedural body splits incorrectly.
/// That matches the deployment scripts this tool targets (plain DDL/DML,
/// one statement per `;`); feeding it procedural SQL will misbehave.
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// First 100 characters of a statement, for log and error context.
pub fn statement_preview(statement: &str) -> &str {
    match statement.char_indices().nth(100) {
        Some((idx, _)) => &statement[..idx],
        None => statement,
    }
}

/// Quote a SQL identifier, escaping embedded double quotes by doubling
/// them.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Escape a value for use inside a single-quoted SQL string literal.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

#[cfg(test)]
#[path = "sql_test.rs"]
mod tests;
