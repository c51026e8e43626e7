//! # SG-03: Feed Query
//!
//! Read-only activity feed: content published by everyone the viewer
//! follows, newest first unless asked otherwise.
//!
//! ## Query Plan
//!
//! ```text
//! viewer ──EdgeStore──→ follow targets (SUBSCRIBER | FRIENDSHIP)
//!                            │
//!                            └──ContentQuery──→ page of ContentRecord
//! ```
//!
//! Canceled edges never contribute to a feed. A viewer that follows nobody
//! gets an empty feed without the content service being asked.
//!
//! ## Architecture
//!
//! - **Domain**: `FeedRequest`, errors
//! - **Ports**: Inbound (`FeedApi`) and Outbound (`ContentQuery`)
//! - **Application**: `FeedService`
//! - **Adapters**: in-memory content store

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryContentStore;
pub use application::service::FeedService;
pub use config::FeedConfig;
pub use domain::errors::FeedError;
pub use domain::value_objects::FeedRequest;
pub use ports::inbound::FeedApi;
pub use ports::outbound::ContentQuery;
