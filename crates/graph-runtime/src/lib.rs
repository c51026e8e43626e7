//! # Graph Runtime Library
//!
//! Exposes the runtime's modules for testing. The main entry point is the
//! `main.rs` binary.
//!
//! ## Modular Structure
//!
//! - `container/` - Runtime configuration and the service container
//! - `adapters/` - Metered decorators around subsystem services
//! - `runtime` - Startup and shutdown sequence

pub mod adapters;
pub mod container;
pub mod runtime;

pub use container::{ConfigError, RuntimeConfig, ServiceContainer};
pub use runtime::GraphRuntime;
