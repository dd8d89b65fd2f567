use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Task,
    Meeting,
    Shooting,
    CalendarEvent,
}

impl ActivityKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActivityKind::Task => "task",
            ActivityKind::Meeting => "meeting",
            ActivityKind::Shooting => "shooting",
            ActivityKind::CalendarEvent => "event",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "task" => Some(ActivityKind::Task),
            "meeting" => Some(ActivityKind::Meeting),
            "shooting" => Some(ActivityKind::Shooting),
            "event" => Some(ActivityKind::CalendarEvent),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        ActivityKind::from_db_str(&code.to_lowercase())
    }

    /// Human-readable label used in tables and chart categories.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Task => "Tasks",
            ActivityKind::Meeting => "Meetings",
            ActivityKind::Shooting => "Shootings",
            ActivityKind::CalendarEvent => "Events",
        }
    }

    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Task,
        ActivityKind::Meeting,
        ActivityKind::Shooting,
        ActivityKind::CalendarEvent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityStatus {
    Todo,
    InProgress,
    Scheduled,
    Done,
    Completed,
    Cancelled,
}

impl ActivityStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActivityStatus::Todo => "todo",
            ActivityStatus::InProgress => "in_progress",
            ActivityStatus::Scheduled => "scheduled",
            ActivityStatus::Done => "done",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(ActivityStatus::Todo),
            "in_progress" => Some(ActivityStatus::InProgress),
            "scheduled" => Some(ActivityStatus::Scheduled),
            "done" => Some(ActivityStatus::Done),
            "completed" => Some(ActivityStatus::Completed),
            "cancelled" => Some(ActivityStatus::Cancelled),
            _ => None,
        }
    }

    /// Terminal statuses never count as overdue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActivityStatus::Done | ActivityStatus::Completed)
    }
}

/// Reference to the project an activity belongs to, already joined to its
/// display title by the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub id: i32,
    pub employee_id: i32,
    pub kind: ActivityKind,
    pub title: String,
    pub project: Option<ProjectRef>,   // None groups under the "no project" bucket
    pub date: NaiveDate,               // relevant date of the activity
    pub deadline: Option<NaiveDate>,   // tasks only
    pub status: ActivityStatus,
}

impl ActivityRecord {
    /// A task is overdue iff its status is not terminal, it carries a
    /// deadline, and that deadline is strictly before `today`.
    /// Re-evaluated at aggregation time, never at fetch time.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.kind == ActivityKind::Task
            && !self.status.is_terminal()
            && self.deadline.is_some_and(|d| d < today)
    }
}
