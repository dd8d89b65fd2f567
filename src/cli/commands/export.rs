use crate::cli::commands::resolve_employee;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        employee,
        period,
        format,
        file,
        force,
    } = cmd
    {
        let name = resolve_employee(cfg, employee)?;
        let mut pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(&mut pool, &name, format.clone(), file, period, *force)?;
    }
    Ok(())
}
