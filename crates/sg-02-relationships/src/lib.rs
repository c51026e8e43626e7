//! # SG-02: Relationship Engine
//!
//! Validates and executes every transition of the follow/friendship state
//! machine over the edge store.
//!
//! ## State Machine
//!
//! ```text
//!              request_friendship
//!   (none) ─────────────────────────→ SUBSCRIBER ──approve──→ FRIENDSHIP
//!                                         ↑                       │
//!                                         └────reject / unfriend──┘
//!
//!   FRIENDSHIP ──request_chat──→ chat = REQUESTED
//!   any edge   ──delete_follow──→ (deleted)
//! ```
//!
//! `CANCELED` is terminal and never produced by a transition.
//!
//! ## Architecture
//!
//! - **Domain**: errors, output records, validation rules
//! - **Ports**: Inbound (`RelationshipApi`) and Outbound (`IdentityDirectory`)
//! - **Application**: `RelationshipService` orchestration
//! - **Adapters**: in-memory identity directory
//!
//! ## Atomicity
//!
//! Every operation stages its writes in one `EdgeUnitOfWork` and commits it
//! only after all preconditions hold. A failed operation changes nothing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryIdentityDirectory;
pub use application::service::RelationshipService;
pub use config::RelationshipConfig;
pub use domain::errors::{FailureKind, RelationshipError};
pub use domain::value_objects::FriendshipView;
pub use ports::inbound::RelationshipApi;
pub use ports::outbound::IdentityDirectory;
