//! # Integration Tests

pub mod fixtures;

mod concurrency;
mod flows;
mod runtime;
#[cfg(feature = "rocksdb")]
mod persistence;
