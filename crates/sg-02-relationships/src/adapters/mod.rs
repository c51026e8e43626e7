//! Adapters module for the Relationship Engine

pub mod identity_directory;

pub use identity_directory::InMemoryIdentityDirectory;
