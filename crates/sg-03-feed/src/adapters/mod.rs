//! Adapters for the Feed Query

pub mod content_store;

pub use content_store::InMemoryContentStore;
