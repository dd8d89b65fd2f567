use chrono::NaiveDate;
use serde::Serialize;

/// One point of the attendance line series.
/// Emitted only for days with at least one non-null field; explicit zero
/// values are retained, never filtered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyClockPoint {
    pub date: NaiveDate,
    /// Clock-in as fractional hour of day (hour + minute/60).
    pub clock_in_hour: Option<f64>,
    /// Clock-out as fractional hour of day. None for auto clock-out rows.
    pub clock_out_hour: Option<f64>,
}

/// One point of the sparse auto clock-out trend. Days with zero count are
/// omitted; consumers must treat absence as zero, not as missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoClockoutPoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// Minimal {category, value} tuple for pie/distribution charts.
/// Zero-value categories must not appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub value: u32,
}

/// Chart-ready series bundle produced by one aggregation pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub clock: Vec<DailyClockPoint>,
    pub auto_clockouts: Vec<AutoClockoutPoint>,
}
