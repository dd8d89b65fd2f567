#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use crewsight::models::activity::{ActivityKind, ActivityRecord, ActivityStatus, ProjectRef};
use crewsight::models::attendance::{AUTO_CLOCKOUT_MARKER, AttendanceRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cs() -> Command {
    cargo_bin_cmd!("crewsight")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewsight.sqlite", name));
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

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Attendance row builder for core tests. Times are "YYYY-MM-DDTHH:MM".
pub fn att(day: &str, clock_in: Option<&str>, clock_out: Option<&str>, notes: Option<&str>) -> AttendanceRecord {
    let parse_dt = |s: &str| {
        chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid datetime")
    };
    AttendanceRecord {
        id: 0,
        employee_id: 1,
        date: date(day),
        clock_in: clock_in.map(parse_dt),
        clock_out: clock_out.map(parse_dt),
        break_minutes: 0,
        notes: notes.map(|n| n.to_string()),
    }
}

/// Attendance row whose clock-out was filled automatically.
pub fn att_auto(day: &str, clock_in: Option<&str>, clock_out: Option<&str>) -> AttendanceRecord {
    att(day, clock_in, clock_out, Some(AUTO_CLOCKOUT_MARKER))
}

/// Task builder for core tests.
pub fn task(day: &str, deadline: Option<&str>, status: ActivityStatus, project: Option<(&str, &str)>) -> ActivityRecord {
    activity(ActivityKind::Task, day, deadline, status, project)
}

pub fn activity(
    kind: ActivityKind,
    day: &str,
    deadline: Option<&str>,
    status: ActivityStatus,
    project: Option<(&str, &str)>,
) -> ActivityRecord {
    ActivityRecord {
        id: 0,
        employee_id: 1,
        kind,
        title: "test activity".to_string(),
        project: project.map(|(id, title)| ProjectRef {
            id: id.to_string(),
            title: title.to_string(),
        }),
        date: date(day),
        deadline: deadline.map(date),
        status,
    }
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    cs().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    cs().args([
        "--db", db_path, "clock", "2025-09-01",
        "--employee", "rina",
        "--in", "08:00",
        "--out", "17:00",
    ])
    .assert()
    .success();

    cs().args([
        "--db", db_path, "activity", "2025-09-01",
        "--employee", "rina",
        "--kind", "task",
        "--title", "Edit brand video",
        "--project", "p1",
        "--project-title", "Brand Campaign",
        "--deadline", "2099-12-31",
    ])
    .assert()
    .success();
}
