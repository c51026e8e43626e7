//! # Edge Store Subsystem (sg-01)
//!
//! Persists directed relationship edges between users and their state.
//! Every other subsystem reads edges through the [`EdgeStore`] port; only
//! the relationship engine writes them, and it does so exclusively through
//! [`EdgeUnitOfWork`] batches committed atomically.
//!
//! ## Key Layout
//!
//! ```text
//! edge/<edge_id:be64>                                  -> bincode(Edge)
//! pair/<follower:be64><friend:be64><edge_id:be64>       -> []
//! meta/next_edge_id                                    -> be64
//! ```
//!
//! The pair index is ordered by follower first, so "all edges leaving a
//! follower" is a single prefix scan.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | One edge per ordered pair | `KvEdgeStore::commit` (configurable) |
//! | INVARIANT-2 | Atomic transitions | One `atomic_batch_write` per commit |
//! | INVARIANT-3 | Stable edge ids | Ids come from a store-owned sequence, never reused |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain** (`domain/`): `Edge`, state enums, unit of work, errors
//! - **Ports** (`ports/`): `EdgeStore` (inbound), `KeyValueStore` (outbound)
//! - **Adapters** (`adapters/`): in-memory and RocksDB key-value stores, codec
//! - **Service** (`service.rs`): `KvEdgeStore`, the key-value backed store

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{BincodeEdgeCodec, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbStore};
pub use config::EdgeStoreConfig;
pub use domain::{
    ChatState, CommitReceipt, Edge, EdgePair, EdgeState, EdgeStoreError, EdgeUnitOfWork,
    EdgeWrite, KVStoreError, NewEdge, SerializationError,
};
pub use ports::{BatchOperation, EdgeStore, KeyValueStore};
pub use service::KvEdgeStore;
