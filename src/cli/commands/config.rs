use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                info(format!("Configuration file: {}", path.display()));
                println!("{content}");
            } else {
                warning("No configuration file found; showing defaults.");
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{yaml}");
            }
            return Ok(());
        }

        if *check {
            return check_config();
        }

        warning("Nothing to do: pass --print or --check.");
    }
    Ok(())
}

/// Verify the config file parses and report fields falling back to defaults.
fn check_config() -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        warning(format!(
            "Configuration file not found at {}; run `crewsight init` first.",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let parsed: Config =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    if parsed.database.is_empty() {
        return Err(AppError::Config("database path is empty".to_string()));
    }
    if parsed.default_employee.is_empty() {
        info("default_employee not set: commands will require --employee.");
    }

    success("Configuration file is valid.");
    Ok(())
}
