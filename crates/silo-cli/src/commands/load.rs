//! Load command implementation
//!
//! Uploads data files that already exist on disk. Unlike the deploy
//! pipeline, a failing file does not abort its siblings: every file is
//! attempted and failures are reported at the end.

use anyhow::{bail, Context, Result};
use silo_core::sql::{escape_sql_string, quote_ident};
use silo_db::Warehouse;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::{GlobalArgs, LoadArgs};
use crate::commands::common;

/// Landing table for raw JSON documents
const JSON_TABLE: &str = "categories";

/// A discovered data file
struct DataFile {
    /// Table name derived from the file stem
    name: String,
    path: PathBuf,
    kind: FileKind,
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum FileKind {
    Csv,
    Json,
}

/// Discover CSV and JSON files in the data directory, sorted by name
fn discover_data_files(data_dir: &Path) -> Result<Vec<DataFile>> {
    let mut files = Vec::new();

    let entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read data directory {}", data_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let kind = match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => FileKind::Csv,
            Some("json") => FileKind::Json,
            _ => continue,
        };
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push(DataFile {
                name: stem.to_string(),
                path,
                kind,
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

async fn upload_json(warehouse: &Arc<dyn Warehouse>, file: &DataFile) -> Result<()> {
    let text = std::fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read {}", file.path.display()))?;
    let file_name = file
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&file.name);

    let sql = format!(
        "INSERT INTO {} (raw_json, source_file) VALUES ('{}', '{}')",
        quote_ident(JSON_TABLE),
        escape_sql_string(&text),
        escape_sql_string(file_name)
    );
    warehouse.execute(&sql).await?;
    Ok(())
}

/// Execute the load command
pub async fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let data_dir = Path::new(&global.project_dir).join(&args.data_dir);
    let files = discover_data_files(&data_dir)?;

    if files.is_empty() {
        println!("No data files found in {}.", data_dir.display());
        return Ok(());
    }

    let warehouse = common::connect_warehouse(global)?;

    // JSON documents land in one raw table with their source file name.
    if files.iter().any(|f| f.kind == FileKind::Json) {
        warehouse
            .execute(&format!(
                "CREATE TABLE IF NOT EXISTS {} (raw_json VARCHAR, source_file VARCHAR)",
                quote_ident(JSON_TABLE)
            ))
            .await
            .context("Failed to create JSON landing table")?;
    }

    println!("Loading {} data files...\n", files.len());

    let mut success_count = 0;
    let mut failure_count = 0;

    for file in &files {
        let result = match file.kind {
            FileKind::Csv => {
                let path = file.path.display().to_string();
                warehouse
                    .load_csv(&quote_ident(&file.name), &path)
                    .await
                    .map_err(anyhow::Error::from)
            }
            FileKind::Json => upload_json(&warehouse, file).await,
        };

        match result {
            Ok(()) => {
                success_count += 1;
                println!("  \u{2713} {}", file.path.display());
            }
            Err(e) => {
                failure_count += 1;
                log::error!("Error uploading {}: {}", file.path.display(), e);
                println!("  \u{2717} {} - {}", file.path.display(), e);
            }
        }
    }

    common::close_after_run(&warehouse, failure_count > 0).await?;

    println!();
    println!("Loaded {} of {} files", success_count, files.len());

    if failure_count > 0 {
        bail!("{} data files failed to upload", failure_count);
    }
    Ok(())
}
