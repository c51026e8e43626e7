//! # Service Container
//!
//! Central container holding the subsystem services with their adapters
//! wired in.
//!
//! - Edge store opened first; every other service shares it
//! - Relationship engine and feed query wrapped in metered decorators

pub mod config;
pub mod services;

pub use config::{ConfigError, RuntimeConfig, StorageBackend, StorageConfig};
pub use services::{ContainerError, ServiceContainer, SharedEdgeStore};
