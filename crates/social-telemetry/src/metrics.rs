//! Prometheus metrics for the social graph services.
//!
//! All metrics follow the naming convention: `sg_<area>_<metric>_<unit>`
//!
//! - **Counter**: transitions and feed queries by outcome
//! - **Histogram**: transition latency, feed page sizes

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, Histogram, HistogramOpts, HistogramVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // RELATIONSHIP ENGINE METRICS (sg-02)
    // =========================================================================

    /// Relationship transitions by operation and outcome
    pub static ref RELATIONSHIP_TRANSITIONS: CounterVec = CounterVec::new(
        Opts::new("sg_relationship_transitions_total", "Relationship transitions executed"),
        &["operation", "outcome"]  // outcome: ok/invalid_request/not_found/conflict/internal
    ).expect("metric creation failed");

    /// Transition latency by operation
    pub static ref RELATIONSHIP_TRANSITION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "sg_relationship_transition_duration_seconds",
            "Time spent executing a relationship transition"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid buckets")),
        &["operation"]
    ).expect("metric creation failed");

    // =========================================================================
    // FEED METRICS (sg-03)
    // =========================================================================

    /// Feed queries by outcome
    pub static ref FEED_QUERIES: CounterVec = CounterVec::new(
        Opts::new("sg_feed_queries_total", "Feed queries served"),
        &["outcome"]  // outcome: ok/error
    ).expect("metric creation failed");

    /// Records returned per feed page
    pub static ref FEED_ITEMS_RETURNED: Histogram = Histogram::with_opts(
        HistogramOpts::new("sg_feed_items_returned", "Records returned per feed page")
            .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0])
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already registered metrics are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(RELATIONSHIP_TRANSITIONS.clone()),
        Box::new(RELATIONSHIP_TRANSITION_DURATION.clone()),
        Box::new(FEED_QUERIES.clone()),
        Box::new(FEED_ITEMS_RETURNED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Record one finished relationship transition.
pub fn record_transition(operation: &str, outcome: &str, seconds: f64) {
    RELATIONSHIP_TRANSITIONS
        .with_label_values(&[operation, outcome])
        .inc();
    RELATIONSHIP_TRANSITION_DURATION
        .with_label_values(&[operation])
        .observe(seconds);
}

/// Record one feed query; `items` is `None` when the query failed.
pub fn record_feed_query(items: Option<usize>) {
    match items {
        Some(count) => {
            FEED_QUERIES.with_label_values(&["ok"]).inc();
            FEED_ITEMS_RETURNED.observe(count as f64);
        }
        None => FEED_QUERIES.with_label_values(&["error"]).inc(),
    }
}

/// Encode all metrics in the Prometheus text exposition format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
