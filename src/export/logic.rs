use crate::core::logic::Core;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_employee, load_activities, load_attendance};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{contribution_rows, series_rows};
use crate::export::xlsx::export_xlsx;
use crate::models::window::PeriodWindow;
use crate::ui::messages::warning;
use crate::utils::date::{current_month_window, parse_window, today};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the period report for one employee and write it out.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute path of the output file
    /// - `period`: `None` (current month) or `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, `start:end`
    pub fn export(
        pool: &mut DbPool,
        employee: &str,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let window: PeriodWindow = match period {
            None => current_month_window()?,
            Some(p) => parse_window(p)?,
        };

        let employee_id = find_employee(&pool.conn, employee)?;
        let attendance = load_attendance(pool, employee_id, &window)?;
        let activities = load_activities(pool, employee_id, &window)?;

        if attendance.is_empty() && activities.is_empty() {
            warning("No records found for selected period.");
            return Ok(());
        }

        let report = Core::build_report(&attendance, &activities, &window, today());

        let label = format.as_str();
        match format {
            ExportFormat::Csv => export_csv(&series_rows(&report), path)?,
            ExportFormat::Json => export_json(&report, path)?,
            ExportFormat::Xlsx => {
                export_xlsx(&series_rows(&report), &contribution_rows(&report), path)?
            }
        }

        if let Err(e) = oplog(
            &pool.conn,
            "export",
            employee,
            &format!("{} export ({} to {})", label, window.start, window.end),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}
