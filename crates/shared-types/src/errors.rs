//! # Error Types
//!
//! Errors raised by external collaborators (identity service, content
//! service) and surfaced unchanged through every subsystem that calls them.

use thiserror::Error;

/// Failure talking to an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or did not answer in time.
    #[error("{service} unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    /// The collaborator answered with data that could not be interpreted.
    #[error("{service} returned malformed data: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
}

impl CollaboratorError {
    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        CollaboratorError::Unavailable {
            service,
            message: message.into(),
        }
    }
}
