use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Marker substring appended to the notes of an attendance row whose
/// clock-out was filled in automatically instead of by the employee.
pub const AUTO_CLOCKOUT_MARKER: &str = "Auto clock-out";

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub id: i32,
    pub employee_id: i32,
    pub date: NaiveDate,                   // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub clock_in: Option<NaiveDateTime>,   // ⇔ attendance.clock_in (TEXT, nullable)
    pub clock_out: Option<NaiveDateTime>,  // ⇔ attendance.clock_out (TEXT, nullable)
    pub break_minutes: u32,                // ⇔ attendance.break_minutes (INT, default 0)
    pub notes: Option<String>,             // ⇔ attendance.notes (TEXT, nullable)
}

impl AttendanceRecord {
    /// True when the notes carry the auto clock-out marker.
    /// Such a row's clock-out is excluded from the departure time series
    /// but still counts toward total hours.
    pub fn auto_clockout(&self) -> bool {
        self.notes
            .as_deref()
            .is_some_and(|n| n.contains(AUTO_CLOCKOUT_MARKER))
    }

    /// Hours between clock-in and clock-out, unrounded.
    /// A missing clock-in or clock-out contributes zero.
    pub fn worked_hours(&self) -> f64 {
        match (self.clock_in, self.clock_out) {
            (Some(ci), Some(co)) if co > ci => {
                (co - ci).num_seconds() as f64 / 3600.0
            }
            _ => 0.0,
        }
    }
}
