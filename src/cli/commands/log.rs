use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            warning("Nothing to do: pass --print.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{} | {:<10} | {}", date, operation, message);
        }
    }
    Ok(())
}
