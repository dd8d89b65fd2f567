//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_separator(columns, "-")
    }

    /// Table using the configured separator character for the underline row.
    pub fn with_separator(columns: Vec<Column>, separator: &str) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: separator.to_string(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header + underline
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');
        // only the first char counts; an empty config value falls back to '-'
        let sep = self.separator.chars().next().unwrap_or('-').to_string();
        for col in &self.columns {
            out.push_str(&sep.repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows (numeric columns right-aligned)
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = match col.align {
                    Align::Left => pad_right(&row[i], col.width),
                    Align::Right => pad_left(&row[i], col.width),
                };
                out.push_str(&cell);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
