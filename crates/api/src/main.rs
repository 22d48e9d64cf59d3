//! Vital-Sign Monitor - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| api::DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&path)
        .with_context(|| format!("loading configuration from {}", path))?;

    init_logging(&config.log_level, config.log_json)?;

    info!("=== Vital-Sign Monitor v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Cycle interval {}ms, history capacity {}",
        config.cycle_interval_ms, config.monitor.history_capacity
    );

    run_server(config).await?;

    Ok(())
}
