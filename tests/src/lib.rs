//! # Social Graph Test Suite
//!
//! Cross-subsystem tests: the relationship engine and the feed query wired
//! over one shared edge store.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs     # Shared world builder
//!     ├── flows.rs        # Engine + feed end-to-end flows
//!     ├── concurrency.rs  # Racing transitions
//!     └── persistence.rs  # RocksDB-backed flows (feature `rocksdb`)
//!
//! tests/benches/
//! └── graph_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sg-tests
//! cargo test -p sg-tests --features rocksdb
//! cargo bench -p sg-tests
//! ```

pub mod integration;
