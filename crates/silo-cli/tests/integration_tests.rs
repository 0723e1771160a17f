//! End-to-end tests running the deployment pipeline against DuckDB

use silo_core::{CheckFile, Environment};
use silo_db::{DuckDbBackend, Warehouse};
use silo_deploy::{run_deployment, DeployStatus, FileStatus};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_script(root: &Path, category: &str, name: &str, sql: &str) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), sql).unwrap();
}

/// A deployable project whose scripts are valid DuckDB SQL
fn duckdb_project(broken_transformation: bool) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_script(
        root,
        "setup",
        "00_schemas.sql",
        "CREATE SCHEMA IF NOT EXISTS raw;\nCREATE SCHEMA IF NOT EXISTS analytics;",
    );
    write_script(
        root,
        "ingestion",
        "10_videos.sql",
        "CREATE TABLE raw.videos (video_id VARCHAR, views BIGINT, likes BIGINT);\n\
         INSERT INTO raw.videos VALUES ('a', 100, 10), ('b', 250, 5), ('c', 0, 0);",
    );
    let transform = if broken_transformation {
        "CREATE TABLE analytics.videos AS SELECT * FROM raw.does_not_exist;"
    } else {
        "CREATE TABLE analytics.videos AS SELECT * FROM raw.videos WHERE views > 0;"
    };
    write_script(root, "transformation", "20_videos.sql", transform);
    write_script(
        root,
        "analytics",
        "parameterized_top_videos.sql",
        "CREATE VIEW analytics.top_videos AS \
         SELECT * FROM analytics.videos ORDER BY views DESC LIMIT 10;",
    );
    // Not parameterized: skipped by the analytics filter, and would fail
    // if it ever ran.
    write_script(
        root,
        "analytics",
        "scratch.sql",
        "SELECT * FROM analytics.missing_view;",
    );
    tmp
}

#[tokio::test]
async fn test_full_deployment_succeeds() {
    let project = duckdb_project(false);
    let warehouse: Arc<dyn Warehouse> = Arc::new(DuckDbBackend::in_memory().unwrap());

    let report = run_deployment(&warehouse, project.path(), Environment::Dev).await;

    assert_eq!(report.status, DeployStatus::Succeeded);
    assert_eq!(report.files.len(), 4);
    assert!(report.files.iter().all(|f| f.status == FileStatus::Success));

    let top = warehouse
        .query_count("SELECT * FROM analytics.top_videos")
        .await
        .unwrap();
    assert_eq!(top, 2);

    warehouse.close().await.unwrap();
}

#[tokio::test]
async fn test_failing_transformation_stops_pipeline() {
    let project = duckdb_project(true);
    let warehouse: Arc<dyn Warehouse> = Arc::new(DuckDbBackend::in_memory().unwrap());

    let report = run_deployment(&warehouse, project.path(), Environment::Dev).await;

    assert_eq!(report.status, DeployStatus::Failed);
    assert!(report.error.as_deref().unwrap().contains("20_videos.sql"));

    // Earlier categories applied and stay applied: no rollback.
    let raw = warehouse
        .query_count("SELECT * FROM raw.videos")
        .await
        .unwrap();
    assert_eq!(raw, 3);

    // Analytics never ran.
    assert!(warehouse
        .query_count("SELECT * FROM analytics.top_videos")
        .await
        .is_err());

    warehouse.close().await.unwrap();
}

#[tokio::test]
async fn test_report_written_after_run() {
    let project = duckdb_project(false);
    let warehouse: Arc<dyn Warehouse> = Arc::new(DuckDbBackend::in_memory().unwrap());

    let report = run_deployment(&warehouse, project.path(), Environment::Test).await;
    warehouse.close().await.unwrap();

    let report_path = project.path().join("target").join("deploy_results.json");
    report.write(&report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["status"], "succeeded");
    assert_eq!(json["environment"], "TEST");
    assert_eq!(json["files"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_view_checks_against_deployed_views() {
    let project = duckdb_project(false);
    let warehouse: Arc<dyn Warehouse> = Arc::new(DuckDbBackend::in_memory().unwrap());

    let report = run_deployment(&warehouse, project.path(), Environment::Dev).await;
    assert_eq!(report.status, DeployStatus::Succeeded);

    let checks_path = project.path().join("checks.yml");
    fs::write(
        &checks_path,
        r#"
checks:
  - view: analytics.top_videos
    min_rows: 1
    max_rows: 10
    no_rows:
      - name: no_zero_view_videos
        sql: SELECT * FROM analytics.top_videos WHERE views <= 0
"#,
    )
    .unwrap();

    let check_file = CheckFile::load(&checks_path).unwrap();
    let check = &check_file.checks[0];

    let count = warehouse
        .query_count(&format!("SELECT * FROM {}", check.view))
        .await
        .unwrap();
    assert!(check.row_count_failures(count).is_empty());

    let violations = warehouse
        .query_count(&check.no_rows[0].sql)
        .await
        .unwrap();
    assert_eq!(violations, 0);

    warehouse.close().await.unwrap();
}
