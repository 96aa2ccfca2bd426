//! Contact Book - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr so they
//! never interleave with the menu.

use anyhow::Result;
use contact_book::{Config, JsonFileRepository, Menu};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first: LOG_LEVEL decides the default filter
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        data_file = %config.data_file.display(),
        export_file = %config.export_file.display(),
        "Starting Contact Book"
    );

    let repository = JsonFileRepository::new(&config.data_file);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let menu = Menu::new(&repository, stdin.lock(), stdout.lock())
        .with_export_file(&config.export_file);

    match menu.run() {
        Ok(store) => {
            info!(contacts = store.len(), "Contact Book shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("Contact Book stopped: {:#}", e);
            Err(e)
        }
    }
}
