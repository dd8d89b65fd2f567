use crate::models::activity::ActivityKind;
use serde::Serialize;

/// Bucket key for activities without a project reference.
pub const NO_PROJECT_KEY: &str = "none";

/// Display name of the fallback bucket.
pub const NO_PROJECT_TITLE: &str = "Tanpa Project";

/// Per-project activity tally for one employee over one window.
/// Buckets keep first-seen (insertion) order, not sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContribution {
    pub key: String,
    pub title: String,
    pub tasks: u32,
    pub meetings: u32,
    pub shootings: u32,
    pub events: u32,
    pub overdue: u32,
}

impl ProjectContribution {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            tasks: 0,
            meetings: 0,
            shootings: 0,
            events: 0,
            overdue: 0,
        }
    }

    pub fn bump(&mut self, kind: ActivityKind) {
        match kind {
            ActivityKind::Task => self.tasks += 1,
            ActivityKind::Meeting => self.meetings += 1,
            ActivityKind::Shooting => self.shootings += 1,
            ActivityKind::CalendarEvent => self.events += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.tasks + self.meetings + self.shootings + self.events
    }
}
