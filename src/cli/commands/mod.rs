pub mod activity;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod report;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Resolve the employee name from the flag or the config default.
pub(crate) fn resolve_employee(cfg: &Config, flag: &Option<String>) -> AppResult<String> {
    if let Some(name) = flag {
        return Ok(name.clone());
    }
    if !cfg.default_employee.is_empty() {
        return Ok(cfg.default_employee.clone());
    }
    Err(AppError::NoEmployee)
}
