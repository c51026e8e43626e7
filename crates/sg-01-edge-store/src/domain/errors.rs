//! # Domain Errors
//!
//! Error types for the Edge Store subsystem.

use super::entities::EdgePair;
use shared_types::EdgeId;
use thiserror::Error;

/// Errors that can occur while reading or committing edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeStoreError {
    /// Underlying key-value store failed.
    #[error(transparent)]
    KeyValue(#[from] KVStoreError),

    /// Stored bytes could not be decoded, or an edge could not be encoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Commit would leave two edges on one ordered pair (INVARIANT-1).
    #[error("Duplicate edge for pair {pair}")]
    DuplicatePair { pair: EdgePair },

    /// A staged update or delete names an edge that is not stored.
    #[error("Edge {0} does not exist")]
    MissingEdge(EdgeId),

    /// The pair index points at an edge that cannot be loaded.
    #[error("Corrupt pair index: {0}")]
    CorruptIndex(String),
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Serialization error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}
