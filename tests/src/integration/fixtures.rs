//! # Test World
//!
//! One edge store shared by a relationship engine and a feed query, with
//! in-memory identity and content collaborators.

use std::sync::Arc;

use sg_01_edge_store::{Edge, EdgeStore, EdgeStoreError, InMemoryKVStore, KeyValueStore, KvEdgeStore};
use sg_02_relationships::{InMemoryIdentityDirectory, RelationshipService};
use sg_03_feed::{FeedService, InMemoryContentStore};
use shared_types::{Identity, UserId};

/// A fully wired social graph over key-value backend `K`.
pub struct World<K: KeyValueStore> {
    pub store: Arc<KvEdgeStore<K>>,
    pub identities: Arc<InMemoryIdentityDirectory>,
    pub content: Arc<InMemoryContentStore>,
    pub engine: RelationshipService<KvEdgeStore<K>, InMemoryIdentityDirectory>,
    pub feed: FeedService<KvEdgeStore<K>, InMemoryContentStore>,
    users: u64,
}

impl World<InMemoryKVStore> {
    /// In-memory world with users `1..=users` registered.
    pub fn in_memory(users: u64) -> Self {
        Self::over(InMemoryKVStore::new(), users)
    }
}

impl<K: KeyValueStore> World<K> {
    /// World over an existing key-value store with users `1..=users`.
    pub fn over(kv: K, users: u64) -> Self {
        let store = Arc::new(KvEdgeStore::new(kv));
        let identities = Arc::new(InMemoryIdentityDirectory::with_identities(
            (1..=users).map(|i| Identity::new(i, format!("user{}", i), format!("user{}@example.com", i))),
        ));
        let content = Arc::new(InMemoryContentStore::new());

        let engine = RelationshipService::new(Arc::clone(&store), Arc::clone(&identities));
        let feed = FeedService::new(Arc::clone(&store), Arc::clone(&content));

        Self {
            store,
            identities,
            content,
            engine,
            feed,
            users,
        }
    }

    /// Every edge in the store, ordered by id.
    pub fn edges(&self) -> Result<Vec<Edge>, EdgeStoreError> {
        let everyone: Vec<UserId> = (1..=self.users).map(UserId).collect();
        self.store.find_by_followers(&everyone)
    }

    /// The edge `follower → friend`, if any.
    pub fn edge(&self, follower: u64, friend: u64) -> Option<Edge> {
        self.store
            .find_by_pair(UserId(follower), UserId(friend))
            .ok()
            .flatten()
    }
}
