//! # Graph Runtime
//!
//! Owns the service container and drives the startup and shutdown
//! sequence.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Validate limits
//! 3. Open the edge store and wire services
//! 4. Signal ready

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::container::services::{ContainerError, ServiceContainer};
use crate::container::RuntimeConfig;

/// The runtime orchestrating all subsystems.
pub struct GraphRuntime {
    container: Arc<ServiceContainer>,
}

impl GraphRuntime {
    /// Create a runtime with every service initialized.
    pub fn new(config: RuntimeConfig) -> Result<Self, ContainerError> {
        info!("Creating social graph runtime");
        let container = Arc::new(ServiceContainer::build(config)?);
        Ok(Self { container })
    }

    /// Log the effective configuration and signal readiness.
    pub fn start(&self) {
        let config = &self.container.config;
        info!("===========================================");
        info!("  Social Graph Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        match serde_json::to_string(config) {
            Ok(json) => info!(config = %json, "Effective configuration"),
            Err(e) => warn!(error = %e, "Could not render configuration"),
        }
        info!(
            backend = %config.storage.backend,
            data_dir = %config.storage.data_dir.display(),
            "All services initialized and running"
        );
    }

    /// Shut the runtime down, dumping final metrics at debug level.
    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        match social_telemetry::gather_metrics() {
            Ok(text) => debug!(metrics = %text, "Final metrics"),
            Err(e) => warn!(error = %e, "Could not gather final metrics"),
        }
        info!("Shutdown complete");
    }

    /// Get a reference to the service container.
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }
}
