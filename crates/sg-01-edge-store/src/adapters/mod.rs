//! # Adapters Module
//!
//! - `memory`: in-memory key-value store (tests, single-process runtime)
//! - `codec`: bincode encoding of stored edges
//! - `rocks`: RocksDB key-value store (feature `rocksdb`)

pub mod codec;
pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocks;

pub use codec::BincodeEdgeCodec;
pub use memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use rocks::{RocksDbConfig, RocksDbStore};
