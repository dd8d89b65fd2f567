//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Presentation-time rounding of an hour total to one decimal.
/// Aggregation never rounds; only output does.
pub fn hours1(hours: f64) -> String {
    format!("{:.1}", hours)
}
