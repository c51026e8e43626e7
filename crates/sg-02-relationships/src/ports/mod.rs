//! Ports module for the Relationship Engine
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::RelationshipApi;
pub use outbound::IdentityDirectory;
