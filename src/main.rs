//! Contact Assistant - Main entry point
//!
//! Runs the interactive contact assistant over stdin/stdout.

use anyhow::Result;
use contact_assistant::{Config, Shell};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so replies on stdout stay clean)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days, weekend shift: {}",
        config.birthday_window_days, config.shift_weekend_birthdays
    );

    let mut shell = Shell::new(config);
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
