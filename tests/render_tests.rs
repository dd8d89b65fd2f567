use crewsight::utils::colors::colorize_optional;
use crewsight::utils::table::{Column, Table};

#[test]
fn test_table_renders_default_separator_row() {
    let mut table = Table::new(vec![Column::left("Date", 10), Column::right("In", 6)]);
    table.add_row(vec!["2025-09-01".to_string(), "8.00".to_string()]);

    let out = table.render();
    assert!(out.contains("---------- ------"));
}

#[test]
fn test_table_uses_configured_separator_char() {
    let mut table = Table::with_separator(
        vec![Column::left("Date", 10), Column::right("In", 6)],
        "=",
    );
    table.add_row(vec!["2025-09-01".to_string(), "8.00".to_string()]);

    let out = table.render();
    assert!(out.contains("========== ======"));
    assert!(!out.contains("---------- ------"));
}

#[test]
fn test_table_empty_separator_falls_back_to_dash() {
    let table = Table::with_separator(vec![Column::left("Date", 4)], "");
    assert!(table.render().contains("----"));
}

#[test]
fn test_colorize_optional_greys_placeholder_values() {
    // placeholders get wrapped in ANSI codes
    assert_ne!(colorize_optional("--:--"), "--:--");
    assert_ne!(colorize_optional("0.00"), "0.00");
    assert!(colorize_optional("0.00").contains("0.00"));

    // real values pass through untouched
    assert_eq!(colorize_optional("8.50"), "8.50");
    assert_eq!(colorize_optional("17.00"), "17.00");
}
