//! In-memory Content Store
//!
//! Holds published records in a local list and answers `ContentQuery`
//! listings over it. Stands in for the content service in tests and in the
//! single-process runtime.

use crate::ports::outbound::ContentQuery;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{
    CollaboratorError, ContentId, ContentRecord, SortOrder, Timestamp, UserId,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory content store.
pub struct InMemoryContentStore {
    records: RwLock<Vec<ContentRecord>>,
    next_id: AtomicU64,
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a text post for `owner`, assigning the next content id.
    pub fn publish(
        &self,
        owner: UserId,
        created_at: Timestamp,
        text: impl Into<String>,
    ) -> ContentRecord {
        let record = ContentRecord {
            id: ContentId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            owner_id: owner,
            created_at,
            description: String::new(),
            text: text.into(),
            image: String::new(),
        };
        self.insert(record.clone());
        record
    }

    /// Store a fully built record as is.
    pub fn insert(&self, record: ContentRecord) {
        self.next_id.fetch_max(record.id.0 + 1, Ordering::SeqCst);
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ContentQuery for InMemoryContentStore {
    async fn list_by_owners(
        &self,
        owner_ids: &[UserId],
        offset: usize,
        limit: usize,
        order: SortOrder,
    ) -> Result<Vec<ContentRecord>, CollaboratorError> {
        let owners: HashSet<UserId> = owner_ids.iter().copied().collect();

        let mut matching: Vec<ContentRecord> = self
            .records
            .read()
            .iter()
            .filter(|record| owners.contains(&record.owner_id))
            .cloned()
            .collect();

        matching.sort_by_key(|record| (record.created_at, record.id));
        if !order.is_ascending() {
            matching.reverse();
        }

        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }
}
