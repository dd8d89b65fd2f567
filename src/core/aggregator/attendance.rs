//! Attendance aggregation: per-window KPIs plus the daily clock and
//! auto clock-out series. Pure functions, no shared state.

use crate::models::attendance::AttendanceRecord;
use crate::models::kpi::AttendanceKpi;
use crate::models::series::{AutoClockoutPoint, DailyClockPoint};
use crate::models::window::PeriodWindow;
use crate::utils::time::fractional_hour;

/// Reduce attendance rows into window KPIs.
///
/// - `total_hours` stays unrounded; rounding is a presentation concern.
/// - A missing clock-out contributes zero hours.
/// - Auto clock-out rows still count toward total hours.
pub fn attendance_kpi(rows: &[AttendanceRecord]) -> AttendanceKpi {
    let mut kpi = AttendanceKpi::default();

    for row in rows {
        if row.auto_clockout() {
            kpi.auto_clockout_days += 1;
        }
        if row.clock_in.is_some() {
            kpi.days_present += 1;
        }
        kpi.total_hours += row.worked_hours();
    }

    kpi
}

/// Attendance line series over the window, in chronological order.
///
/// Each day with a matching row yields one point carrying the fractional-hour
/// clock-in and, only for non-auto-clockout rows, the fractional-hour
/// clock-out. Days without a row yield no point; a point is emitted only
/// when at least one field is non-null. Explicit zeros (midnight) are kept.
pub fn daily_clock_series(
    rows: &[AttendanceRecord],
    window: &PeriodWindow,
) -> Vec<DailyClockPoint> {
    let mut out = Vec::new();

    for day in window.days() {
        let Some(row) = rows.iter().find(|r| r.date == day) else {
            continue;
        };

        let clock_in_hour = row.clock_in.map(fractional_hour);
        let clock_out_hour = if row.auto_clockout() {
            None
        } else {
            row.clock_out.map(fractional_hour)
        };

        if clock_in_hour.is_none() && clock_out_hour.is_none() {
            continue;
        }

        out.push(DailyClockPoint {
            date: day,
            clock_in_hour,
            clock_out_hour,
        });
    }

    out
}

/// Sparse per-day count of auto clock-out rows. Zero-count days are
/// omitted; chart consumers treat absence as zero. Rows dated outside
/// the window never contribute.
pub fn auto_clockout_trend(
    rows: &[AttendanceRecord],
    window: &PeriodWindow,
) -> Vec<AutoClockoutPoint> {
    let mut out: Vec<AutoClockoutPoint> = Vec::new();

    for row in rows {
        if !row.auto_clockout() || !window.contains(row.date) {
            continue;
        }
        match out.iter().position(|p| p.date == row.date) {
            Some(i) => out[i].count += 1,
            None => out.push(AutoClockoutPoint {
                date: row.date,
                count: 1,
            }),
        }
    }

    out.sort_by_key(|p| p.date);
    out
}
