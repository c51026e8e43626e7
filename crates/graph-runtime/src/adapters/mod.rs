//! # Runtime Adapters
//!
//! Decorators the runtime places around subsystem services.
//!
//! - `metrics` - Prometheus accounting for every transition and feed query

pub mod metrics;

pub use metrics::{outcome_label, MeteredFeed, MeteredRelationships};
