use crate::utils::colors::{CYAN, GREEN, YELLOW};
use serde::Serialize;

/// Closed set of insight severities. Each carries its own presentation
/// hint, decided once at insight-construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Info,
    Success,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Warning => YELLOW,
            Severity::Info => CYAN,
            Severity::Success => GREEN,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
        }
    }
}

/// Derived, human-readable observation about an employee's attendance and
/// activity pattern. Recomputed on every report, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Insight {
    pub fn new(severity: Severity, title: &str, description: String) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description,
        }
    }
}
