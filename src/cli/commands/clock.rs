use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{ensure_employee, upsert_attendance};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AUTO_CLOCKOUT_MARKER;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        date,
        employee,
        clock_in,
        clock_out,
        break_minutes,
        notes,
        auto,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let t_in = parse_optional_time(clock_in.as_ref())?;
        let t_out = parse_optional_time(clock_out.as_ref())?;

        // --auto marks the clock-out as automatic by appending the marker
        // substring the aggregator looks for
        let notes = match (notes, auto) {
            (Some(n), true) if !n.contains(AUTO_CLOCKOUT_MARKER) => {
                Some(format!("{n} [{AUTO_CLOCKOUT_MARKER}]"))
            }
            (Some(n), _) => Some(n.clone()),
            (None, true) => Some(format!("[{AUTO_CLOCKOUT_MARKER}]")),
            (None, false) => None,
        };

        let name = resolve_employee(cfg, employee)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let employee_id = ensure_employee(&pool.conn, &name)?;

        upsert_attendance(
            &pool.conn,
            employee_id,
            day,
            t_in.map(|t| day.and_time(t)),
            t_out.map(|t| day.and_time(t)),
            *break_minutes,
            notes.as_deref(),
        )?;

        if let Err(e) = oplog(
            &pool.conn,
            "clock",
            &name,
            &format!("Attendance recorded for {name} on {date}"),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Attendance recorded for {name} on {date}"));
    }
    Ok(())
}
