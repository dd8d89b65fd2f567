use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries::{ensure_employee, insert_activity};
use crate::errors::{AppError, AppResult};
use crate::models::activity::{ActivityKind, ActivityStatus, ProjectRef};
use crate::ui::messages::success;
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity {
        date,
        employee,
        kind,
        title,
        project,
        project_title,
        deadline,
        status,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;

        let kind = ActivityKind::from_code(kind)
            .ok_or_else(|| AppError::InvalidKind(kind.clone()))?;
        let status = ActivityStatus::from_db_str(status)
            .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

        let deadline = match deadline {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let project = project.as_ref().map(|id| ProjectRef {
            id: id.clone(),
            title: project_title.clone().unwrap_or_else(|| id.clone()),
        });

        let name = resolve_employee(cfg, employee)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let employee_id = ensure_employee(&pool.conn, &name)?;

        insert_activity(
            &pool.conn,
            employee_id,
            kind,
            title,
            project.as_ref(),
            day,
            deadline,
            status,
        )?;

        if let Err(e) = oplog(
            &pool.conn,
            "activity",
            &name,
            &format!("{} recorded for {name} on {date}", kind.to_db_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "{} '{}' recorded for {name} on {date}",
            kind.to_db_str(),
            title
        ));
    }
    Ok(())
}
