//! Error types for the Feed Query

use sg_01_edge_store::EdgeStoreError;
use shared_types::CollaboratorError;
use thiserror::Error;

/// Feed failures. Every input is valid, so only infrastructure can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Could not read the viewer's follow targets
    #[error("Edge store error: {0}")]
    Store(#[from] EdgeStoreError),

    /// Content service failure
    #[error("Content query error: {0}")]
    Content(#[from] CollaboratorError),
}
