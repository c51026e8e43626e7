//! Error types for the Relationship Engine

use sg_01_edge_store::{EdgePair, EdgeStoreError};
use shared_types::{CollaboratorError, UserId};
use thiserror::Error;

/// All errors that can occur in a relationship transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationshipError {
    /// Precondition, ownership or self-reference violation
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced user does not exist
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// No edge for the addressed pair
    #[error("Friendship not found: {pair}")]
    EdgeNotFound { pair: EdgePair },

    /// Unfriend found the forward edge but not its mirror
    #[error("Reverse friendship not found: {pair}")]
    ReverseEdgeNotFound { pair: EdgePair },

    /// An active edge already exists for the pair
    #[error("Already friends: {pair}")]
    Conflict { pair: EdgePair },

    /// Edge store failure
    #[error("Edge store error: {0}")]
    Store(#[from] EdgeStoreError),

    /// Identity directory failure
    #[error("Identity directory error: {0}")]
    Directory(#[from] CollaboratorError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Caller-facing classification of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Bad input: precondition, ownership or self-reference violation.
    InvalidRequest,
    /// Missing resource: user or edge absent.
    NotFound,
    /// Bad input: duplicate active edge.
    Conflict,
    /// Infrastructure failure; not the caller's fault.
    Internal,
}

impl RelationshipError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RelationshipError::InvalidRequest(message.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            RelationshipError::InvalidRequest(_) => FailureKind::InvalidRequest,
            RelationshipError::UserNotFound(_)
            | RelationshipError::EdgeNotFound { .. }
            | RelationshipError::ReverseEdgeNotFound { .. } => FailureKind::NotFound,
            RelationshipError::Conflict { .. } => FailureKind::Conflict,
            // Another writer claimed the pair between our read and commit.
            RelationshipError::Store(EdgeStoreError::DuplicatePair { .. }) => FailureKind::Conflict,
            RelationshipError::Store(_)
            | RelationshipError::Directory(_)
            | RelationshipError::Internal(_) => FailureKind::Internal,
        }
    }

    /// Whether the caller sent something wrong (as opposed to asking for
    /// something missing, or hitting an infrastructure failure).
    pub fn is_bad_input(&self) -> bool {
        matches!(self.kind(), FailureKind::InvalidRequest | FailureKind::Conflict)
    }
}
