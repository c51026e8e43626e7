//! # Social Graph Runtime
//!
//! Entry point for the social graph service.
//!
//! ```text
//! TelemetryConfig::from_env ──→ init_telemetry
//! RuntimeConfig::from_env   ──→ GraphRuntime::new ──→ start
//!                                                      │
//!                                     Ctrl+C ──→ shutdown
//! ```

use anyhow::{Context, Result};
use tracing::info;

use graph_runtime::{GraphRuntime, RuntimeConfig};
use social_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and metrics
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    // Load configuration
    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;

    // Create and start the runtime
    let runtime = GraphRuntime::new(config).context("Failed to build services")?;
    runtime.start();

    // Keep the service running
    info!("Social graph is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown();
    Ok(())
}
