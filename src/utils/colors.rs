/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholder values in tables.
///
/// Example:
/// `colorize_optional("--:--")` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str) -> String {
    // "0.00" matches the {:.2} hour formatting used by the report tables
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "0.00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
