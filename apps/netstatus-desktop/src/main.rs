//! NetStatus desktop entry point.

mod app;
mod config;
mod shell;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting NetStatus");

    // Load configuration.
    let config = config::Config::load()?;
    tracing::info!(
        dns_host = %config.dns_host,
        http_url = %config.http_url,
        poll_interval_secs = config.poll_interval_secs,
        "configuration loaded"
    );

    // Build and run the tokio runtime.
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(app::run(config))?;

    tracing::info!("NetStatus shut down cleanly");
    Ok(())
}
