//! Time utilities: parsing HH:MM, fractional hours, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Time of day as fractional hour (hour + minute/60), the unit used by the
/// attendance line series. 08:30 → 8.5.
pub fn fractional_hour(dt: NaiveDateTime) -> f64 {
    dt.hour() as f64 + dt.minute() as f64 / 60.0
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
