use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{find_employee, load_activities, load_attendance};
use crate::errors::{AppError, AppResult};
use crate::models::report::SubjectReport;
use crate::ui::messages::{header, insight_line};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{current_month_window, parse_window, today};
use crate::utils::formatting::hours1;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        period,
        json,
    } = cmd
    {
        let window = match period {
            Some(p) => parse_window(p)?,
            None => current_month_window()?,
        };

        let name = resolve_employee(cfg, employee)?;
        let mut pool = DbPool::new(&cfg.database)?;

        // a failed load surfaces as an error, never as zero-valued KPIs
        let employee_id = find_employee(&pool.conn, &name)?;
        let attendance = load_attendance(&mut pool, employee_id, &window)?;
        let activities = load_activities(&mut pool, employee_id, &window)?;

        let report = Core::build_report(&attendance, &activities, &window, today());

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
        } else {
            print_report(&name, &report, &cfg.separator_char);
        }
    }
    Ok(())
}

fn print_report(name: &str, report: &SubjectReport, separator: &str) {
    header(format!(
        "Report: {} ({} to {})",
        name,
        report.window.start.format("%Y-%m-%d"),
        report.window.end.format("%Y-%m-%d")
    ));

    println!("Attendance:");
    println!("  • Days present:     {}", report.attendance.days_present);
    println!(
        "  • Total hours:      {}",
        hours1(report.attendance.total_hours)
    );
    println!(
        "  • Auto clock-outs:  {}",
        report.attendance.auto_clockout_days
    );

    println!("\nActivity:");
    println!(
        "  • Total activities: {}",
        report.activity.total_activities
    );
    println!("  • Tasks overdue:    {}", report.activity.tasks_overdue);

    println!("\nInsights:");
    if report.insights.is_empty() {
        // neutral empty state, not an error
        println!("  (none for this period)");
    } else {
        for ins in &report.insights {
            print!("  ");
            insight_line(ins);
        }
    }

    if !report.contributions.is_empty() {
        println!("\nProject contributions:");
        let mut table = Table::with_separator(
            vec![
                Column::left("Project", 24),
                Column::right("Tasks", 6),
                Column::right("Meet", 6),
                Column::right("Shoot", 6),
                Column::right("Event", 6),
                Column::right("Total", 6),
                Column::right("Overdue", 8),
            ],
            separator,
        );
        for c in &report.contributions {
            table.add_row(vec![
                c.title.clone(),
                c.tasks.to_string(),
                c.meetings.to_string(),
                c.shootings.to_string(),
                c.events.to_string(),
                c.total().to_string(),
                c.overdue.to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    if !report.series.clock.is_empty() {
        println!("\nDaily clock series:");
        let mut table = Table::with_separator(
            vec![
                Column::left("Date", 10),
                Column::right("In", 6),
                Column::right("Out", 6),
            ],
            separator,
        );
        for p in &report.series.clock {
            table.add_row(vec![
                p.date.format("%Y-%m-%d").to_string(),
                colorize_optional(&fmt_hour(p.clock_in_hour)),
                colorize_optional(&fmt_hour(p.clock_out_hour)),
            ]);
        }
        print!("{}", table.render());
    }

    if !report.series.auto_clockouts.is_empty() {
        println!("\nAuto clock-out days:");
        for p in &report.series.auto_clockouts {
            println!("  {} × {}", p.date.format("%Y-%m-%d"), p.count);
        }
    }

    println!();
}

fn fmt_hour(h: Option<f64>) -> String {
    match h {
        Some(v) => format!("{:.2}", v),
        None => "--:--".to_string(),
    }
}
