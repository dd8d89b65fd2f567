//! Activity aggregation: overdue/total KPIs and per-project tallies.

use crate::models::activity::ActivityRecord;
use crate::models::contribution::{NO_PROJECT_KEY, NO_PROJECT_TITLE, ProjectContribution};
use crate::models::kpi::ActivityKpi;
use chrono::NaiveDate;

/// Reduce activity records into window KPIs.
///
/// Overdue is evaluated against `today` at aggregation time, so it is
/// always relative to the evaluation instant, independent of the window.
pub fn activity_kpi(records: &[ActivityRecord], today: NaiveDate) -> ActivityKpi {
    let mut kpi = ActivityKpi {
        total_activities: records.len() as u32,
        ..Default::default()
    };

    for rec in records {
        if rec.is_overdue(today) {
            kpi.tasks_overdue += 1;
        }
    }

    kpi
}

/// Group records by project bucket, accumulating one counter per activity
/// kind plus an overdue counter. Records without a project land in the
/// explicit "Tanpa Project" bucket. Output keeps first-seen order.
pub fn project_contributions(
    records: &[ActivityRecord],
    today: NaiveDate,
) -> Vec<ProjectContribution> {
    // Vec scan instead of a map: bucket counts are small and insertion
    // order must survive.
    let mut buckets: Vec<ProjectContribution> = Vec::new();

    for rec in records {
        let (key, title) = match &rec.project {
            Some(p) => (p.id.as_str(), p.title.as_str()),
            None => (NO_PROJECT_KEY, NO_PROJECT_TITLE),
        };

        let pos = match buckets.iter().position(|b| b.key == key) {
            Some(i) => i,
            None => {
                buckets.push(ProjectContribution::new(key, title));
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[pos];
        bucket.bump(rec.kind);
        if rec.is_overdue(today) {
            bucket.overdue += 1;
        }
    }

    buckets
}
