//! Chart-series shaping helpers: reshape aggregator output into the minimal
//! {category, value} tuples a generic charting consumer needs.

use crate::models::activity::{ActivityKind, ActivityRecord};
use crate::models::series::CategoryCount;

/// Per-kind distribution of activities for a pie chart.
/// Zero-value categories are filtered out, never emitted.
pub fn activity_distribution(records: &[ActivityRecord]) -> Vec<CategoryCount> {
    let mut out = Vec::new();

    for kind in ActivityKind::ALL {
        let value = records.iter().filter(|r| r.kind == kind).count() as u32;
        if value > 0 {
            out.push(CategoryCount {
                label: kind.label().to_string(),
                value,
            });
        }
    }

    out
}
