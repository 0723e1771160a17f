use super::*;

#[test]
fn test_parse_row_count_check() {
    let yaml = r#"
checks:
  - view: analytics.most_disliked_videos
    exact_rows: 5
"#;
    let file: CheckFile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(file.checks.len(), 1);
    assert_eq!(file.checks[0].view, "analytics.most_disliked_videos");
    assert_eq!(file.checks[0].exact_rows, Some(5));
    assert!(file.checks[0].no_rows.is_empty());
}

#[test]
fn test_parse_predicate_check() {
    let yaml = r#"
checks:
  - view: analytics.top_videos_by_category
    min_rows: 1
    no_rows:
      - name: no_category_over_ten_videos
        sql: >
          SELECT category_name FROM analytics.top_videos_by_category
          GROUP BY category_name HAVING COUNT(*) > 10
"#;
    let file: CheckFile = serde_yaml::from_str(yaml).unwrap();
    let check = &file.checks[0];
    assert_eq!(check.min_rows, Some(1));
    assert_eq!(check.no_rows.len(), 1);
    assert_eq!(check.no_rows[0].name, "no_category_over_ten_videos");
    assert!(check.no_rows[0].sql.contains("HAVING COUNT(*) > 10"));
}

#[test]
fn test_unknown_fields_rejected() {
    let yaml = r#"
checks:
  - view: v
    rows: 5
"#;
    assert!(serde_yaml::from_str::<CheckFile>(yaml).is_err());
}

#[test]
fn test_load_missing_file_has_path_context() {
    let err = CheckFile::load(Path::new("/nonexistent/checks.yml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/checks.yml"));
}

fn count_check(min: Option<usize>, max: Option<usize>, exact: Option<usize>) -> ViewCheck {
    ViewCheck {
        view: "analytics.v".to_string(),
        min_rows: min,
        max_rows: max,
        exact_rows: exact,
        no_rows: Vec::new(),
    }
}

#[test]
fn test_row_count_min() {
    let check = count_check(Some(1), None, None);
    assert!(check.row_count_failures(1).is_empty());
    let failures = check.row_count_failures(0);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("at least 1"));
}

#[test]
fn test_row_count_max() {
    let check = count_check(None, Some(3), None);
    assert!(check.row_count_failures(3).is_empty());
    assert!(!check.row_count_failures(4).is_empty());
}

#[test]
fn test_row_count_exact() {
    let check = count_check(None, None, Some(5));
    assert!(check.row_count_failures(5).is_empty());
    assert!(!check.row_count_failures(6).is_empty());
}

#[test]
fn test_row_count_combined_bounds() {
    let check = count_check(Some(2), Some(4), None);
    assert!(check.row_count_failures(3).is_empty());
    assert_eq!(check.row_count_failures(1).len(), 1);
    assert_eq!(check.row_count_failures(5).len(), 1);
}

#[test]
fn test_empty_check_file() {
    let file: CheckFile = serde_yaml::from_str("checks: []").unwrap();
    assert!(file.checks.is_empty());
}
