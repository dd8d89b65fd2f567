use crate::models::contribution::ProjectContribution;
use crate::models::insight::Insight;
use crate::models::kpi::{ActivityKpi, AttendanceKpi};
use crate::models::series::{CategoryCount, DailySeries};
use crate::models::window::PeriodWindow;
use serde::Serialize;

/// Full derived output of one aggregation pass for one employee.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectReport {
    pub window: PeriodWindow,
    pub attendance: AttendanceKpi,
    pub activity: ActivityKpi,
    pub contributions: Vec<ProjectContribution>,
    pub distribution: Vec<CategoryCount>,
    pub series: DailySeries,
    pub insights: Vec<Insight>,
}
