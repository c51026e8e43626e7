//! In-memory Identity Directory
//!
//! Implements `IdentityDirectory` over a local map. Used by tests and by the
//! single-process runtime; production deployments point the port at the
//! identity service instead.

use crate::ports::outbound::IdentityDirectory;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{CollaboratorError, Identity, UserId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory identity directory.
#[derive(Default)]
pub struct InMemoryIdentityDirectory {
    users: RwLock<HashMap<UserId, Identity>>,
    unavailable: AtomicBool,
}

impl InMemoryIdentityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with `identities`.
    pub fn with_identities(identities: impl IntoIterator<Item = Identity>) -> Self {
        let directory = Self::new();
        for identity in identities {
            directory.register(identity);
        }
        directory
    }

    /// Add or replace a user.
    pub fn register(&self, identity: Identity) {
        self.users.write().insert(identity.id, identity);
    }

    /// Remove a user, returning it if present.
    pub fn remove(&self, id: UserId) -> Option<Identity> {
        self.users.write().remove(&id)
    }

    /// Simulate an outage: every lookup fails until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn lookup(&self, id: UserId) -> Result<Option<Identity>, CollaboratorError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CollaboratorError::unavailable(
                "identity",
                "directory marked unavailable",
            ));
        }
        Ok(self.users.read().get(&id).cloned())
    }
}
