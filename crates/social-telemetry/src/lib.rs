//! # Social Telemetry
//!
//! Logging and metrics for the social graph services.
//!
//! - **Logs**: `tracing` events rendered by `tracing-subscriber`, pretty in
//!   development and JSON in containers
//! - **Metrics**: Prometheus counters and histograms in a global registry,
//!   exposed as text through [`gather_metrics`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use social_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // Transitions and feed queries are now logged and counted
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` / `SG_SERVICE_NAME` | `social-graph` | Service name in logs |
//! | `SG_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SG_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `SG_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `SG_METRICS_PORT` | `9100` | Port the metrics endpoint is served on |
//! | `SG_ENVIRONMENT` | `dev` | Deployment environment |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, record_feed_query, record_transition, register_metrics, FEED_ITEMS_RETURNED,
    FEED_QUERIES, RELATIONSHIP_TRANSITIONS, RELATIONSHIP_TRANSITION_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize metrics and the global log subscriber.
///
/// Returns a guard to be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so the first logged transition is also counted
    register_metrics()?;
    logging::init_logging(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active. Logs a shutdown line on drop.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_registers_metrics_and_refuses_second_subscriber() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        let guard = init_telemetry(config.clone()).unwrap();
        assert_eq!(guard.service_name, "social-graph");

        // Vec metrics appear in the exposition once a label set is used.
        record_transition("delete_follow", "ok", 0.001);
        assert!(gather_metrics()
            .unwrap()
            .contains("sg_relationship_transitions_total"));

        assert!(matches!(
            init_telemetry(config),
            Err(TelemetryError::LoggingInit(_))
        ));
    }
}
