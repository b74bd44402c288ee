use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{adopt, aip, hire, init_db, init_db_with_fixture, log_usage, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    aip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    // init must be idempotent
    aip()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_hire_and_list_employees() {
    let db_path = setup_test_db("hire_list");
    init_db(&db_path);

    hire(&db_path, "Ana García", "Marketing", "Content Manager", "Senior", "75000");
    hire(&db_path, "Carlos López", "Engineering", "Developer", "Mid", "85000");

    aip()
        .args(["--db", &db_path, "employees"])
        .assert()
        .success()
        .stdout(contains("Ana García"))
        .stdout(contains("Carlos López"));

    // Department filter
    aip()
        .args(["--db", &db_path, "employees", "--dept", "Marketing"])
        .assert()
        .success()
        .stdout(contains("Ana García"))
        .stdout(contains("Carlos López").not());
}

#[test]
fn test_hire_rejects_bad_seniority() {
    let db_path = setup_test_db("bad_seniority");
    init_db(&db_path);

    aip()
        .args([
            "--db", &db_path, "hire", "X",
            "--dept", "Marketing",
            "--role", "Intern",
            "--seniority", "Wizard",
            "--hired", "2024-01-01",
            "--salary", "30000",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid seniority tier"));
}

#[test]
fn test_adopt_and_list_tools() {
    let db_path = setup_test_db("adopt_list");
    init_db(&db_path);

    adopt(&db_path, "ChatGPT Plus", "Content Generation", "20");
    adopt(&db_path, "Copilot", "Programming", "10");

    aip()
        .args(["--db", &db_path, "tools"])
        .assert()
        .success()
        .stdout(contains("ChatGPT Plus"))
        .stdout(contains("Copilot"));
}

#[test]
fn test_retire_tool_hides_it_from_default_listing() {
    let db_path = setup_test_db("retire_tool");
    init_db(&db_path);

    adopt(&db_path, "OldTool", "Legacy", "5");

    aip()
        .args(["--db", &db_path, "tools", "--retire", "1"])
        .assert()
        .success();

    aip()
        .args(["--db", &db_path, "tools"])
        .assert()
        .success()
        .stdout(contains("OldTool").not());

    aip()
        .args(["--db", &db_path, "tools", "--all"])
        .assert()
        .success()
        .stdout(contains("OldTool"));
}

#[test]
fn test_log_quality_out_of_range_fails() {
    let db_path = setup_test_db("bad_quality");
    init_db_with_fixture(&db_path);

    for bad in ["0", "6"] {
        aip()
            .args([
                "--db", &db_path, "log", "1", "1",
                "--used", "30",
                "--saved", "60",
                "--quality", bad,
                "--date", "2024-03-05",
            ])
            .assert()
            .failure()
            .stderr(contains("Quality score out of range"));
    }
}

#[test]
fn test_log_negative_minutes_fails() {
    let db_path = setup_test_db("neg_minutes");
    init_db_with_fixture(&db_path);

    aip()
        .args([
            "--db", &db_path, "log", "1", "1",
            "--used", "-10",
            "--saved", "60",
            "--quality", "4",
            "--date", "2024-03-05",
        ])
        .assert()
        .failure()
        .stderr(contains("Minutes must be non-negative"));

    aip()
        .args([
            "--db", &db_path, "log", "1", "1",
            "--used", "30",
            "--saved", "-5",
            "--quality", "4",
            "--date", "2024-03-05",
        ])
        .assert()
        .failure()
        .stderr(contains("Minutes must be non-negative"));
}

#[test]
fn test_log_unknown_foreign_keys_fail() {
    let db_path = setup_test_db("bad_fk");
    init_db_with_fixture(&db_path);

    aip()
        .args([
            "--db", &db_path, "log", "999", "1",
            "--used", "30", "--saved", "60", "--quality", "4",
            "--date", "2024-03-05",
        ])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));

    aip()
        .args([
            "--db", &db_path, "log", "1", "999",
            "--used", "30", "--saved", "60", "--quality", "4",
            "--date", "2024-03-05",
        ])
        .assert()
        .failure()
        .stderr(contains("Tool not found"));
}

#[test]
fn test_hr_updates_salary_and_active_flag() {
    let db_path = setup_test_db("hr_updates");
    init_db_with_fixture(&db_path);

    aip()
        .args(["--db", &db_path, "hr", "1", "--salary", "80000"])
        .assert()
        .success()
        .stdout(contains("salary updated"));

    aip()
        .args(["--db", &db_path, "hr", "2", "--active", "false"])
        .assert()
        .success();

    // Inactive employee drops out of the default listing
    aip()
        .args(["--db", &db_path, "employees"])
        .assert()
        .success()
        .stdout(contains("Bob Jones").not());

    aip()
        .args(["--db", &db_path, "employees", "--all"])
        .assert()
        .success()
        .stdout(contains("Bob Jones"));
}

#[test]
fn test_hr_unknown_employee_fails() {
    let db_path = setup_test_db("hr_unknown");
    init_db(&db_path);

    aip()
        .args(["--db", &db_path, "hr", "42", "--salary", "1"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));
}

#[test]
fn test_seed_refuses_non_empty_db_without_force() {
    let db_path = setup_test_db("seed_refuse");
    init_db_with_fixture(&db_path);

    aip()
        .args(["--db", &db_path, "seed", "--days", "5"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    aip()
        .args(["--db", &db_path, "seed", "--days", "5", "--force"])
        .assert()
        .success();
}

#[test]
fn test_seed_populates_demo_company() {
    let db_path = setup_test_db("seed_demo");
    init_db(&db_path);

    aip()
        .args(["--db", &db_path, "seed", "--days", "10"])
        .assert()
        .success()
        .stdout(contains("Demo dataset seeded"));

    aip()
        .args(["--db", &db_path, "employees"])
        .assert()
        .success()
        .stdout(contains("Ana García"))
        .stdout(contains("Isabel Torres"));

    aip()
        .args(["--db", &db_path, "tools"])
        .assert()
        .success()
        .stdout(contains("ChatGPT Plus"))
        .stdout(contains("DataRobot"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_ops");
    init_db_with_fixture(&db_path);

    log_usage(&db_path, "1", "1", "30", "60", "4", "2024-03-05");

    aip()
        .args(["--db", &db_path, "audit", "--print"])
        .assert()
        .success()
        .stdout(contains("hire"))
        .stdout(contains("adopt"))
        .stdout(contains("log"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maint");
    init_db_with_fixture(&db_path);

    aip()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    aip()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees"))
        .stdout(contains("Usage events"));

    aip()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    aip()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));
}
