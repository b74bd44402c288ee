use predicates::str::contains;
use std::fs;

mod common;
use common::{aip, init_db_with_fixture, log_usage, setup_test_db, temp_out};

#[test]
fn test_export_json_preserves_logged_values() {
    let db_path = setup_test_db("export_json");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");

    let out_file = temp_out("export_json", "json");

    aip()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out_file])
        .assert()
        .success()
        .stdout(contains("JSON"));

    let content = fs::read_to_string(&out_file).expect("export file written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid JSON export");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["date"], serde_json::json!("2024-03-05"));
    assert_eq!(row["employee"], serde_json::json!("Alice Smith"));
    assert_eq!(row["department"], serde_json::json!("Marketing"));
    assert_eq!(row["tool"], serde_json::json!("T1"));
    assert_eq!(row["minutes_used"], serde_json::json!(35));
    assert_eq!(row["minutes_saved"], serde_json::json!(80));
    assert_eq!(row["quality"], serde_json::json!(4));
    assert_eq!(row["source"], serde_json::json!("cli"));
}

#[test]
fn test_export_csv_has_header_and_rows_in_date_order() {
    let db_path = setup_test_db("export_csv");
    init_db_with_fixture(&db_path);

    // Logged out of order: the export must come back date-sorted
    log_usage(&db_path, "2", "1", "20", "45", "3", "2024-03-20");
    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");

    let out_file = temp_out("export_csv", "csv");

    aip()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out_file])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("export file written");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,date,employee,department,tool"));
    assert!(lines[1].contains("2024-03-05"));
    assert!(lines[2].contains("2024-03-20"));
}

#[test]
fn test_export_xlsx_writes_a_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");

    let out_file = temp_out("export_xlsx", "xlsx");

    aip()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out_file])
        .assert()
        .success()
        .stdout(contains("XLSX"));

    let meta = fs::metadata(&out_file).expect("xlsx file written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_range_filters_events() {
    let db_path = setup_test_db("export_range");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-02-28");
    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");
    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-04-01");

    let out_file = temp_out("export_range", "json");

    aip()
        .args([
            "--db", &db_path, "export",
            "--format", "json",
            "--file", &out_file,
            "--range", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("export file written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid JSON export");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], serde_json::json!("2024-03-05"));
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");

    let out_file = temp_out("export_empty", "json");

    aip()
        .args([
            "--db", &db_path, "export",
            "--format", "json",
            "--file", &out_file,
            "--range", "2019",
        ])
        .assert()
        .success()
        .stdout(contains("No usage events found"));

    assert!(!std::path::Path::new(&out_file).exists());
}

#[test]
fn test_export_bad_range_fails() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_fixture(&db_path);

    let out_file = temp_out("export_bad_range", "csv");

    aip()
        .args([
            "--db", &db_path, "export",
            "--format", "csv",
            "--file", &out_file,
            "--range", "not-a-date",
        ])
        .assert()
        .failure();

    // Multi-byte input must come back as the usual range error
    aip()
        .args([
            "--db", &db_path, "export",
            "--format", "csv",
            "--file", &out_file,
            "--range", "1234€",
        ])
        .assert()
        .failure()
        .stderr(contains("unsupported --range format"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "35", "80", "4", "2024-03-05");

    let out_file = temp_out("export_overwrite", "json");
    fs::write(&out_file, "existing").expect("create pre-existing file");

    aip()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out_file])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out_file).unwrap(), "existing");

    aip()
        .args([
            "--db", &db_path, "export",
            "--format", "json",
            "--file", &out_file,
            "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out_file).expect("overwritten export");
    assert!(content.starts_with('['));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_fixture(&db_path);

    aip()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}
