//! Role Tracker - Main entry point
//!
//! Validates a JSON array of role records, read from the file named by
//! `ROLE_TRACKER_DATA_FILE` or from stdin, and prints one line per rejected
//! record. Exits non-zero if any record is rejected.

use anyhow::{Context, Result};
use role_tracker::{import_from_reader, Config};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the report)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let report = match &config.data_file {
        Some(path) => {
            info!("Reading role records from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            import_from_reader(BufReader::new(file))
        }
        None => {
            info!("Reading role records from stdin");
            import_from_reader(io::stdin().lock())
        }
    };

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to import role records: {}", e);
            return Err(e.into());
        }
    };

    for rejected in &report.rejected {
        println!("record {}: {}", rejected.index, rejected.reason);
    }
    println!(
        "{} accepted, {} rejected",
        report.accepted.len(),
        report.rejected.len()
    );

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
