use serde::Serialize;

/// Attendance counters derived for one employee over one window.
/// Never persisted, recomputed on every report.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AttendanceKpi {
    pub auto_clockout_days: u32,
    /// Unrounded sum of (clock_out - clock_in) in hours.
    /// Rounding happens only at presentation time.
    pub total_hours: f64,
    pub days_present: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityKpi {
    /// Tasks past their deadline relative to the evaluation instant,
    /// independent of the window bounds.
    pub tasks_overdue: u32,
    pub total_activities: u32,
}
