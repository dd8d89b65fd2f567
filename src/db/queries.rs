use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::activity::{
    ActivityKind, ActivityRecord, ActivityStatus, ProjectRef,
};
use crate::models::attendance::AttendanceRecord;
use crate::models::window::PeriodWindow;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M";

// ---------------------------
// Employees / projects
// ---------------------------

/// Look up an employee id by name, creating the row on first use.
pub fn ensure_employee(conn: &Connection, name: &str) -> AppResult<i32> {
    if let Some(id) = lookup_employee(conn, name)? {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO employees (name, created_at) VALUES (?1, ?2)",
        params![name, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

/// Look up an employee id by name; typed error when absent.
pub fn find_employee(conn: &Connection, name: &str) -> AppResult<i32> {
    lookup_employee(conn, name)?.ok_or_else(|| AppError::UnknownEmployee(name.to_string()))
}

fn lookup_employee(conn: &Connection, name: &str) -> AppResult<Option<i32>> {
    let id: Option<i32> = conn
        .query_row("SELECT id FROM employees WHERE name = ?1", [name], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(id)
}

/// Insert or refresh a project display title.
pub fn ensure_project(conn: &Connection, id: &str, title: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO projects (id, title, created_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET title = excluded.title",
        params![id, title, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

// ---------------------------
// Attendance
// ---------------------------

/// Insert or update the single attendance row for (employee, date).
/// Fields passed as None leave the stored value untouched.
pub fn upsert_attendance(
    conn: &Connection,
    employee_id: i32,
    date: NaiveDate,
    clock_in: Option<NaiveDateTime>,
    clock_out: Option<NaiveDateTime>,
    break_minutes: Option<u32>,
    notes: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance (employee_id, date, clock_in, clock_out, break_minutes, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, COALESCE(?5, 0), ?6, ?7)
         ON CONFLICT(employee_id, date) DO UPDATE SET
            clock_in      = COALESCE(excluded.clock_in, attendance.clock_in),
            clock_out     = COALESCE(excluded.clock_out, attendance.clock_out),
            break_minutes = COALESCE(?5, attendance.break_minutes),
            notes         = COALESCE(excluded.notes, attendance.notes)",
        params![
            employee_id,
            date.format("%Y-%m-%d").to_string(),
            clock_in.map(|t| t.format(DATETIME_FMT).to_string()),
            clock_out.map(|t| t.format(DATETIME_FMT).to_string()),
            break_minutes,
            notes,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Load attendance rows for one employee over one window, date order.
pub fn load_attendance(
    pool: &mut DbPool,
    employee_id: i32,
    window: &PeriodWindow,
) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, employee_id, date, clock_in, clock_out, break_minutes, notes
         FROM attendance
         WHERE employee_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            window.start.format("%Y-%m-%d").to_string(),
            window.end.format("%Y-%m-%d").to_string(),
        ],
        map_attendance_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_attendance_row(row: &Row) -> Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let date = parse_date_col(&date_str)?;

    let clock_in = parse_opt_datetime_col(row.get::<_, Option<String>>("clock_in")?)?;
    let clock_out = parse_opt_datetime_col(row.get::<_, Option<String>>("clock_out")?)?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        clock_in,
        clock_out,
        break_minutes: row.get::<_, i64>("break_minutes")?.max(0) as u32,
        notes: row.get("notes")?,
    })
}

// ---------------------------
// Activities
// ---------------------------

#[allow(clippy::too_many_arguments)]
pub fn insert_activity(
    conn: &Connection,
    employee_id: i32,
    kind: ActivityKind,
    title: &str,
    project: Option<&ProjectRef>,
    date: NaiveDate,
    deadline: Option<NaiveDate>,
    status: ActivityStatus,
) -> AppResult<()> {
    if let Some(p) = project {
        ensure_project(conn, &p.id, &p.title)?;
    }

    conn.execute(
        "INSERT INTO activities (employee_id, kind, title, project_id, date, deadline, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            employee_id,
            kind.to_db_str(),
            title,
            project.map(|p| p.id.as_str()),
            date.format("%Y-%m-%d").to_string(),
            deadline.map(|d| d.format("%Y-%m-%d").to_string()),
            status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Load activity rows for one employee over one window, already joined to
/// the project display title. The core never re-queries for titles.
pub fn load_activities(
    pool: &mut DbPool,
    employee_id: i32,
    window: &PeriodWindow,
) -> AppResult<Vec<ActivityRecord>> {
    let mut stmt = pool.conn.prepare(
        "SELECT a.id, a.employee_id, a.kind, a.title, a.project_id, p.title AS project_title,
                a.date, a.deadline, a.status
         FROM activities a
         LEFT JOIN projects p ON p.id = a.project_id
         WHERE a.employee_id = ?1 AND a.date BETWEEN ?2 AND ?3
         ORDER BY a.date ASC, a.id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            window.start.format("%Y-%m-%d").to_string(),
            window.end.format("%Y-%m-%d").to_string(),
        ],
        map_activity_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_activity_row(row: &Row) -> Result<ActivityRecord> {
    let kind_str: String = row.get("kind")?;
    let kind = ActivityKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(AppError::InvalidKind(kind_str.clone()))
    })?;

    let status_str: String = row.get("status")?;
    let status = ActivityStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(AppError::InvalidStatus(status_str.clone()))
    })?;

    let date_str: String = row.get("date")?;
    let date = parse_date_col(&date_str)?;

    let deadline = match row.get::<_, Option<String>>("deadline")? {
        Some(s) => Some(parse_date_col(&s)?),
        None => None,
    };

    // project_id NULL routes to the "no project" bucket downstream;
    // a dangling id keeps the id as its own display title
    let project = match row.get::<_, Option<String>>("project_id")? {
        Some(id) => {
            let title: Option<String> = row.get("project_title")?;
            Some(ProjectRef {
                title: title.unwrap_or_else(|| id.clone()),
                id,
            })
        }
        None => None,
    };

    Ok(ActivityRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        kind,
        title: row.get("title")?,
        project,
        date,
        deadline,
        status,
    })
}

// ---------------------------
// Column parsing helpers
// ---------------------------

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(s.to_string())))
}

fn parse_opt_datetime_col(s: Option<String>) -> Result<Option<NaiveDateTime>> {
    match s {
        None => Ok(None),
        Some(raw) => NaiveDateTime::parse_from_str(&raw, DATETIME_FMT)
            .map(Some)
            .map_err(|_| conversion_error(AppError::InvalidTime(raw.clone()))),
    }
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}
