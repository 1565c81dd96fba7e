//! Department mapper walkthrough.
//!
//! # Responsibility
//! - Exercise every mapper operation end to end and print each value.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `department_cli [DB_PATH]`. Without a path an in-memory database
//! is used. `DEPARTMENT_LOG_DIR` (absolute) enables file logging at
//! `DEPARTMENT_LOG_LEVEL`, or the build-mode default.

use department_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, Department,
    DepartmentRepository, SqliteDepartmentRepository,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "DEPARTMENT_LOG_DIR";
const LOG_LEVEL_ENV: &str = "DEPARTMENT_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=walkthrough module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> Result<(), Box<dyn Error>> {
    let conn = match db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let repo = SqliteDepartmentRepository::new(&conn);

    repo.drop_table()?;
    repo.create_table()?;

    let mut payroll = Department::new("Payroll", "Building A, 5th Floor");
    println!("{payroll}");
    repo.save(&mut payroll)?;
    println!("{payroll}");

    let mut hr = Department::new("Human Resources", "Building C, East Wing");
    println!("{hr}");
    repo.save(&mut hr)?;
    println!("{hr}");

    let mut accounting = repo.create("Accounting", "Building B, 1st Floor")?;
    println!("{accounting}");

    accounting.name = "Corporate Accounting".to_string();
    accounting.location = "Building D, 10th Floor".to_string();
    repo.update(&accounting)?;
    println!("{accounting}");

    // Row is gone, the value keeps its id and fields.
    repo.delete(&hr)?;
    println!("{hr}");

    println!("rows={}", repo.get_all()?.len());
    Ok(())
}
