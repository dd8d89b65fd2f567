use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cs, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // tables exist afterwards
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
             AND name IN ('employees','projects','attendance','activities','log')",
            [],
            |row| row.get(0),
        )
        .expect("query");
    assert_eq!(count, 5);
}

#[test]
fn test_clock_inserts_attendance_row() {
    let db_path = setup_test_db("clock_insert");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cs().args([
        "--db", &db_path, "clock", "2025-09-01",
        "--employee", "rina",
        "--in", "08:00",
        "--out", "17:00",
        "--break", "30",
    ])
    .assert()
    .success()
    .stdout(contains("Attendance recorded for rina"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (clock_in, break_minutes): (String, i64) = conn
        .query_row(
            "SELECT clock_in, break_minutes FROM attendance WHERE date = '2025-09-01'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("row");
    assert_eq!(clock_in, "2025-09-01T08:00");
    assert_eq!(break_minutes, 30);
}

#[test]
fn test_clock_upserts_same_day() {
    let db_path = setup_test_db("clock_upsert");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cs().args([
        "--db", &db_path, "clock", "2025-09-01",
        "--employee", "rina",
        "--in", "08:00",
    ])
    .assert()
    .success();

    // second call fills the clock-out on the same row
    cs().args([
        "--db", &db_path, "clock", "2025-09-01",
        "--employee", "rina",
        "--out", "17:00",
    ])
    .assert()
    .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 1);

    let (clock_in, clock_out): (String, String) = conn
        .query_row(
            "SELECT clock_in, clock_out FROM attendance WHERE date = '2025-09-01'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("row");
    assert_eq!(clock_in, "2025-09-01T08:00");
    assert_eq!(clock_out, "2025-09-01T17:00");
}

#[test]
fn test_activity_rejects_unknown_kind() {
    let db_path = setup_test_db("activity_bad_kind");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cs().args([
        "--db", &db_path, "activity", "2025-09-01",
        "--employee", "rina",
        "--kind", "sprint",
        "--title", "whatever",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid activity kind"));
}

#[test]
fn test_report_shows_kpis_and_insights() {
    let db_path = setup_test_db("report_basic");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "report",
        "--employee", "rina",
        "--period", "2025-09",
    ])
    .assert()
    .success()
    .stdout(contains("Days present:     1"))
    .stdout(contains("Total hours:      9.0"))
    .stdout(contains("Total activities: 1"))
    .stdout(contains("Brand Campaign"))
    .stdout(contains("Good consistency"));
}

#[test]
fn test_report_auto_clockout_insight() {
    let db_path = setup_test_db("report_auto");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for day in ["2025-09-01", "2025-09-02", "2025-09-03"] {
        cs().args([
            "--db", &db_path, "clock", day,
            "--employee", "budi",
            "--in", "08:00",
            "--out", "17:00",
            "--auto",
        ])
        .assert()
        .success();
    }

    cs().args([
        "--db", &db_path, "report",
        "--employee", "budi",
        "--period", "2025-09",
    ])
    .assert()
    .success()
    .stdout(contains("Auto clock-outs:  3"))
    .stdout(contains("Frequently forgets clock-out"));
}

#[test]
fn test_report_json_is_parseable() {
    let db_path = setup_test_db("report_json");
    init_db_with_data(&db_path);

    let output = cs()
        .args([
            "--db", &db_path, "report",
            "--employee", "rina",
            "--period", "2025-09",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("utf8");
    // skip the leading blank line printed by main
    let value: serde_json::Value =
        serde_json::from_str(text.trim()).expect("valid JSON report");

    assert_eq!(value["attendance"]["days_present"], 1);
    assert_eq!(value["activity"]["total_activities"], 1);
    assert!(value["contributions"].is_array());
    assert!(value["insights"].is_array());
}

#[test]
fn test_report_unknown_employee_fails() {
    let db_path = setup_test_db("report_unknown");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // an employee with no rows is a distinct error, not a zero-valued report
    cs().args([
        "--db", &db_path, "report",
        "--employee", "ghost",
        "--period", "2025-09",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown employee: ghost"));
}

#[test]
fn test_report_requires_employee() {
    let db_path = setup_test_db("report_no_employee");

    cs().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cs().args(["--db", &db_path, "report", "--period", "2025-09"])
        .assert()
        .failure()
        .stderr(contains("No employee given"));
}

#[test]
fn test_report_rejects_invalid_period() {
    let db_path = setup_test_db("report_bad_period");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "report",
        "--employee", "rina",
        "--period", "september",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    cs().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("clock").and(contains("activity")));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    cs().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));

    cs().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees:"))
        .stdout(contains("Attendance rows:"));
}
