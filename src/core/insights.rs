//! Insight rules engine: a fixed, ordered set of threshold predicates over
//! the aggregated KPIs. Pure and deterministic; output preserves rule
//! declaration order, not severity order.

use crate::models::insight::{Insight, Severity};
use crate::models::kpi::{ActivityKpi, AttendanceKpi};

const AUTO_CLOCKOUT_WARN: u32 = 3;
const OVERDUE_WARN: u32 = 3;
const HIGH_PRODUCTIVITY: u32 = 15;

/// Evaluate every rule against the KPIs. Rules are not mutually exclusive:
/// more than one insight may fire from a single input. Rules 3 and 4 can
/// co-fire; that is accepted behavior, not deduplicated.
pub fn derive_insights(att: &AttendanceKpi, act: &ActivityKpi) -> Vec<Insight> {
    let mut out = Vec::new();

    // 1. frequent auto clock-outs
    if att.auto_clockout_days >= AUTO_CLOCKOUT_WARN {
        out.push(Insight::new(
            Severity::Warning,
            "Frequently forgets clock-out",
            format!(
                "Clock-out was filled in automatically on {} days in this period.",
                att.auto_clockout_days
            ),
        ));
    }

    // 2. high task overdue
    if act.tasks_overdue >= OVERDUE_WARN {
        out.push(Insight::new(
            Severity::Warning,
            "High task overdue",
            format!("{} tasks are past their deadline.", act.tasks_overdue),
        ));
    }

    // 3. hours logged without any activity
    if att.total_hours > 0.0 && act.total_activities == 0 {
        out.push(Insight::new(
            Severity::Info,
            "Hours logged without activity",
            "Working hours were recorded but no activity in this period.".to_string(),
        ));
    }

    // 4. good consistency (trivially satisfied by empty input)
    if att.auto_clockout_days == 0 && act.tasks_overdue == 0 {
        out.push(Insight::new(
            Severity::Success,
            "Good consistency",
            "No auto clock-outs and no overdue tasks.".to_string(),
        ));
    }

    // 5. high productivity
    if act.total_activities > HIGH_PRODUCTIVITY {
        out.push(Insight::new(
            Severity::Success,
            "High productivity",
            format!("{} activities recorded in this period.", act.total_activities),
        ));
    }

    out
}
