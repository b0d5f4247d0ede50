//! Logging setup
//!
//! Two `tracing` layers: the console, filtered by `RUST_LOG`, and the run's
//! log file, which always receives the loader's debug output.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console filter used when `RUST_LOG` is not set
const DEFAULT_CONSOLE_FILTER: &str = "timelog_loader=info,timelog_client=info";

/// Installs the global subscriber
///
/// # Arguments
/// * `log_path` - File that receives the full debug log of this run
pub fn init(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_CONSOLE_FILTER.into());

    let file_filter = Targets::new()
        .with_target("timelog_loader", Level::DEBUG)
        .with_target("timelog_client", Level::DEBUG)
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(file_filter),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
