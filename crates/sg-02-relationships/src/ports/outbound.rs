//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::{CollaboratorError, Identity, UserId};

/// Read-only view of the identity service.
///
/// The engine never creates or mutates identities; it only checks that the
/// users it is asked to connect exist.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Resolve a user, `None` when the id is unknown.
    async fn lookup(&self, id: UserId) -> Result<Option<Identity>, CollaboratorError>;

    /// Whether the user exists.
    async fn exists(&self, id: UserId) -> Result<bool, CollaboratorError> {
        Ok(self.lookup(id).await?.is_some())
    }
}
