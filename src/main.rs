//! Contact Book - Main entry point
//!
//! Runs the interactive menu over stdin/stdout. Logs go to stderr so they
//! never interleave with the session.

use anyhow::Result;
use contact_book::{cli, Config, ContactStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins; otherwise LOG_LEVEL from config
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

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

    let mut store = if config.load_seed {
        ContactStore::seeded()?
    } else {
        ContactStore::new()
    };
    info!(contacts = store.len(), "Contact store initialized");

    cli::run_stdio(&mut store)?;

    info!("Contact book shutdown complete");
    Ok(())
}
