use crate::core::aggregator::{activity, attendance};
use crate::core::{insights, series};
use crate::models::activity::ActivityRecord;
use crate::models::attendance::AttendanceRecord;
use crate::models::report::SubjectReport;
use crate::models::series::DailySeries;
use crate::models::window::PeriodWindow;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// One full aggregation pass: rows in, derived report out.
    /// Takes all inputs as arguments and returns a fresh result; holds no
    /// state across invocations. `today` is the evaluation instant used
    /// for overdue checks.
    pub fn build_report(
        attendance_rows: &[AttendanceRecord],
        activities: &[ActivityRecord],
        window: &PeriodWindow,
        today: NaiveDate,
    ) -> SubjectReport {
        let attendance_kpi = attendance::attendance_kpi(attendance_rows);
        let activity_kpi = activity::activity_kpi(activities, today);
        let contributions = activity::project_contributions(activities, today);
        let distribution = series::activity_distribution(activities);

        let daily = DailySeries {
            clock: attendance::daily_clock_series(attendance_rows, window),
            auto_clockouts: attendance::auto_clockout_trend(attendance_rows, window),
        };

        let derived = insights::derive_insights(&attendance_kpi, &activity_kpi);

        SubjectReport {
            window: *window,
            attendance: attendance_kpi,
            activity: activity_kpi,
            contributions,
            distribution,
            series: daily,
            insights: derived,
        }
    }
}
