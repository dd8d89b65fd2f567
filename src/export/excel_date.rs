use chrono::NaiveDate;

/// Interpret a string as a calendar date, returning the Excel serial plus
/// its number format. Only the "YYYY-MM-DD" shape the exports emit.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", date_to_excel_serial(d)))
}

fn date_to_excel_serial(d: NaiveDate) -> f64 {
    // Excel's day zero, accounting for the fictional 1900-02-29
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .expect("valid epoch");
    (d - excel_epoch).num_days() as f64
}
