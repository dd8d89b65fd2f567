use crate::models::report::SubjectReport;
use serde::Serialize;

/// Flat per-day row for CSV/XLSX export of the attendance series.
/// Dense over the days that produced a data point; the sparse auto
/// clock-out trend is folded in as an explicit per-day count.
#[derive(Serialize, Clone, Debug)]
pub struct SeriesExport {
    pub date: String,
    pub clock_in_hour: Option<f64>,
    pub clock_out_hour: Option<f64>,
    pub auto_clockouts: u32,
}

/// Flat per-project row for CSV/XLSX export of contributions.
#[derive(Serialize, Clone, Debug)]
pub struct ContributionExport {
    pub project: String,
    pub tasks: u32,
    pub meetings: u32,
    pub shootings: u32,
    pub events: u32,
    pub overdue: u32,
}

pub(crate) fn series_rows(report: &SubjectReport) -> Vec<SeriesExport> {
    // union of both series: a day can carry an auto clock-out count
    // without having produced a clock point
    let mut dates: Vec<chrono::NaiveDate> =
        report.series.clock.iter().map(|p| p.date).collect();
    for a in &report.series.auto_clockouts {
        if !dates.contains(&a.date) {
            dates.push(a.date);
        }
    }
    dates.sort();

    dates
        .into_iter()
        .map(|date| {
            let point = report.series.clock.iter().find(|p| p.date == date);
            SeriesExport {
                date: date.format("%Y-%m-%d").to_string(),
                clock_in_hour: point.and_then(|p| p.clock_in_hour),
                clock_out_hour: point.and_then(|p| p.clock_out_hour),
                auto_clockouts: report
                    .series
                    .auto_clockouts
                    .iter()
                    .find(|a| a.date == date)
                    .map(|a| a.count)
                    .unwrap_or(0),
            }
        })
        .collect()
}

pub(crate) fn contribution_rows(report: &SubjectReport) -> Vec<ContributionExport> {
    report
        .contributions
        .iter()
        .map(|c| ContributionExport {
            project: c.title.clone(),
            tasks: c.tasks,
            meetings: c.meetings,
            shootings: c.shootings,
            events: c.events,
            overdue: c.overdue,
        })
        .collect()
}

/// Headers for the series worksheet / CSV.
pub(crate) fn series_headers() -> Vec<&'static str> {
    vec!["date", "clock_in_hour", "clock_out_hour", "auto_clockouts"]
}

/// Headers for the contributions worksheet.
pub(crate) fn contribution_headers() -> Vec<&'static str> {
    vec!["project", "tasks", "meetings", "shootings", "events", "overdue"]
}

pub(crate) fn series_to_row(r: &SeriesExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.clock_in_hour.map(|v| format!("{v:.2}")).unwrap_or_default(),
        r.clock_out_hour.map(|v| format!("{v:.2}")).unwrap_or_default(),
        r.auto_clockouts.to_string(),
    ]
}

pub(crate) fn contribution_to_row(r: &ContributionExport) -> Vec<String> {
    vec![
        r.project.clone(),
        r.tasks.to_string(),
        r.meetings.to_string(),
        r.shootings.to_string(),
        r.events.to_string(),
        r.overdue.to_string(),
    ]
}
