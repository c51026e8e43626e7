//! Ports module for the Edge Store
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::EdgeStore;
pub use outbound::{BatchOperation, KeyValueStore};
