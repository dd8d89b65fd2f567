use predicates::str::contains;
use std::fs;

mod common;
use common::{cs, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_daily_series() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "export",
        "--employee", "rina",
        "--period", "2025-09",
        "--format", "csv",
        "--file", &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,clock_in_hour,clock_out_hour,auto_clockouts")
    );
    let row = lines.next().expect("one data row");
    assert!(row.starts_with("2025-09-01,8.0,17.0,0"));
}

#[test]
fn test_export_json_full_report() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "export",
        "--employee", "rina",
        "--period", "2025-09",
        "--format", "json",
        "--file", &out,
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(value["attendance"]["days_present"], 1);
    assert_eq!(value["contributions"][0]["title"], "Brand Campaign");
    assert_eq!(value["window"]["start"], "2025-09-01");
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "export",
        "--employee", "rina",
        "--period", "2025-09",
        "--format", "xlsx",
        "--file", &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relpath");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "export",
        "--employee", "rina",
        "--period", "2025-09",
        "--format", "csv",
        "--file", "relative.csv",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_period_warns_without_file() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_data(&db_path);

    cs().args([
        "--db", &db_path, "export",
        "--employee", "rina",
        "--period", "2020-01",
        "--format", "csv",
        "--file", &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}
