mod common;

use common::date;
use crewsight::utils::date::parse_window;

#[test]
fn test_parse_window_year() {
    let w = parse_window("2025").expect("year window");
    assert_eq!(w.start, date("2025-01-01"));
    assert_eq!(w.end, date("2025-12-31"));
}

#[test]
fn test_parse_window_month_handles_leap_february() {
    let w = parse_window("2024-02").expect("month window");
    assert_eq!(w.start, date("2024-02-01"));
    assert_eq!(w.end, date("2024-02-29"));

    let w = parse_window("2025-02").expect("month window");
    assert_eq!(w.end, date("2025-02-28"));
}

#[test]
fn test_parse_window_single_day() {
    let w = parse_window("2025-09-15").expect("day window");
    assert_eq!(w.start, w.end);
    assert_eq!(w.start, date("2025-09-15"));
}

#[test]
fn test_parse_window_ranges() {
    let w = parse_window("2024-11:2025-02").expect("month range");
    assert_eq!(w.start, date("2024-11-01"));
    assert_eq!(w.end, date("2025-02-28"));

    let w = parse_window("2025-09-01:2025-09-15").expect("day range");
    assert_eq!(w.start, date("2025-09-01"));
    assert_eq!(w.end, date("2025-09-15"));
}

#[test]
fn test_parse_window_rejects_garbage() {
    assert!(parse_window("september").is_err());
    assert!(parse_window("2025-9").is_err());
    assert!(parse_window("2025:2025-09").is_err());
}

#[test]
fn test_parse_window_rejects_inverted_range() {
    assert!(parse_window("2025-09-15:2025-09-01").is_err());
}

#[test]
fn test_window_days_are_chronological_and_inclusive() {
    let w = parse_window("2025-09-28:2025-10-02").expect("range");
    let days = w.days();
    assert_eq!(days.len(), 5);
    assert_eq!(days.first(), Some(&date("2025-09-28")));
    assert_eq!(days.last(), Some(&date("2025-10-02")));
}
