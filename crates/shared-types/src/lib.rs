//! # Shared Types Crate
//!
//! Identifiers, external collaborator records and the small vocabulary that
//! every social-graph subsystem shares.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: user, edge and content identifiers are
//!   defined once here so the edge store, relationship engine and feed query
//!   cannot disagree on their representation.
//! - **Read-only collaborators**: `Identity` and `ContentRecord` are owned by
//!   external services. Subsystems only ever read them.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
