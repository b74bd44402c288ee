#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn aip() -> Command {
    cargo_bin_cmd!("aipulse")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_aipulse.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema on a fresh test DB
pub fn init_db(db_path: &str) {
    aip()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Hire one employee through the CLI, returns nothing (ids are sequential from 1)
pub fn hire(db_path: &str, name: &str, dept: &str, role: &str, seniority: &str, salary: &str) {
    aip()
        .args([
            "--db", db_path, "hire", name,
            "--dept", dept,
            "--role", role,
            "--seniority", seniority,
            "--hired", "2022-01-15",
            "--salary", salary,
        ])
        .assert()
        .success();
}

/// Adopt one tool through the CLI (ids are sequential from 1)
pub fn adopt(db_path: &str, name: &str, category: &str, cost: &str) {
    aip()
        .args([
            "--db", db_path, "adopt", name,
            "--category", category,
            "--vendor", "TestVendor",
            "--cost", cost,
            "--introduced", "2023-01-01",
        ])
        .assert()
        .success();
}

/// Log one usage event through the CLI
pub fn log_usage(
    db_path: &str,
    employee_id: &str,
    tool_id: &str,
    used: &str,
    saved: &str,
    quality: &str,
    date: &str,
) {
    aip()
        .args([
            "--db", db_path, "log", employee_id, tool_id,
            "--used", used,
            "--saved", saved,
            "--quality", quality,
            "--date", date,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small company useful for many tests:
/// 3 Marketing employees at 75000 plus a tool "T1" costing 20/month.
pub fn init_db_with_fixture(db_path: &str) {
    init_db(db_path);

    hire(db_path, "Alice Smith", "Marketing", "Content Manager", "Senior", "75000");
    hire(db_path, "Bob Jones", "Marketing", "Copywriter", "Mid", "75000");
    hire(db_path, "Carol White", "Marketing", "Designer", "Junior", "75000");

    adopt(db_path, "T1", "Content Generation", "20");
}
