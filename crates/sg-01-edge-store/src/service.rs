//! # Key-Value Edge Store
//!
//! `EdgeStore` implementation over any `KeyValueStore`.
//!
//! ## Commit Flow
//!
//! 1. Take the write lock for the whole commit
//! 2. Replay staged writes against a working view of the touched edges
//! 3. Check the pair uniqueness invariant against the final view
//! 4. Translate the view into one `atomic_batch_write`

use crate::adapters::codec::BincodeEdgeCodec;
use crate::config::EdgeStoreConfig;
use crate::domain::entities::{Edge, EdgePair};
use crate::domain::errors::EdgeStoreError;
use crate::domain::unit_of_work::{CommitReceipt, EdgeUnitOfWork, EdgeWrite};
use crate::ports::inbound::EdgeStore;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use parking_lot::RwLock;
use shared_types::{EdgeId, UserId};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

const EDGE_PREFIX: &[u8] = b"edge/";
const PAIR_PREFIX: &[u8] = b"pair/";
const NEXT_EDGE_ID_KEY: &[u8] = b"meta/next_edge_id";

/// First id handed out by an empty store.
const FIRST_EDGE_ID: u64 = 1;

fn edge_key(id: EdgeId) -> Vec<u8> {
    let mut key = Vec::with_capacity(EDGE_PREFIX.len() + 8);
    key.extend_from_slice(EDGE_PREFIX);
    key.extend_from_slice(&id.0.to_be_bytes());
    key
}

fn follower_prefix(follower: UserId) -> Vec<u8> {
    let mut key = Vec::with_capacity(PAIR_PREFIX.len() + 8);
    key.extend_from_slice(PAIR_PREFIX);
    key.extend_from_slice(&follower.0.to_be_bytes());
    key
}

fn pair_prefix(pair: EdgePair) -> Vec<u8> {
    let mut key = follower_prefix(pair.follower);
    key.extend_from_slice(&pair.friend.0.to_be_bytes());
    key
}

fn pair_key(pair: EdgePair, id: EdgeId) -> Vec<u8> {
    let mut key = pair_prefix(pair);
    key.extend_from_slice(&id.0.to_be_bytes());
    key
}

fn read_be_u64(bytes: &[u8]) -> Option<u64> {
    let raw: [u8; 8] = bytes.try_into().ok()?;
    Some(u64::from_be_bytes(raw))
}

fn id_from_pair_key(key: &[u8]) -> Result<EdgeId, EdgeStoreError> {
    key.len()
        .checked_sub(8)
        .and_then(|start| read_be_u64(&key[start..]))
        .map(EdgeId)
        .ok_or_else(|| EdgeStoreError::CorruptIndex(format!("short pair key: {} bytes", key.len())))
}

/// Edge store backed by a key-value store.
pub struct KvEdgeStore<S: KeyValueStore> {
    kv: RwLock<S>,
    codec: BincodeEdgeCodec,
    config: EdgeStoreConfig,
}

impl<S: KeyValueStore> KvEdgeStore<S> {
    /// Create a store with default config
    pub fn new(kv: S) -> Self {
        Self::with_config(kv, EdgeStoreConfig::default())
    }

    /// Create a store with custom config
    pub fn with_config(kv: S, config: EdgeStoreConfig) -> Self {
        Self {
            kv: RwLock::new(kv),
            codec: BincodeEdgeCodec,
            config,
        }
    }

    pub fn config(&self) -> &EdgeStoreConfig {
        &self.config
    }

    /// Load an edge by id.
    pub fn find_by_id(&self, id: EdgeId) -> Result<Option<Edge>, EdgeStoreError> {
        let kv = self.kv.read();
        self.load_edge(&*kv, id)
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> Result<usize, EdgeStoreError> {
        let kv = self.kv.read();
        Ok(kv.prefix_scan(EDGE_PREFIX)?.len())
    }

    fn load_edge(&self, kv: &S, id: EdgeId) -> Result<Option<Edge>, EdgeStoreError> {
        match kv.get(&edge_key(id))? {
            Some(bytes) => Ok(Some(self.codec.decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn ids_with_prefix(&self, kv: &S, prefix: &[u8]) -> Result<Vec<EdgeId>, EdgeStoreError> {
        kv.prefix_scan(prefix)?
            .into_iter()
            .map(|(key, _)| id_from_pair_key(&key))
            .collect()
    }

    fn load_indexed(&self, kv: &S, id: EdgeId) -> Result<Edge, EdgeStoreError> {
        self.load_edge(kv, id)?
            .ok_or_else(|| EdgeStoreError::CorruptIndex(format!("pair index names missing edge {}", id)))
    }

    fn next_edge_id(&self, kv: &S) -> Result<u64, EdgeStoreError> {
        match kv.get(NEXT_EDGE_ID_KEY)? {
            Some(bytes) => read_be_u64(&bytes).ok_or_else(|| {
                EdgeStoreError::CorruptIndex("edge id sequence is not 8 bytes".to_string())
            }),
            None => Ok(FIRST_EDGE_ID),
        }
    }

    /// Check INVARIANT-1 for every pair a touched edge ends up on.
    fn check_unique_pairs(
        &self,
        kv: &S,
        view: &BTreeMap<EdgeId, Option<Edge>>,
    ) -> Result<(), EdgeStoreError> {
        let final_pairs: BTreeSet<EdgePair> =
            view.values().flatten().map(Edge::pair).collect();

        for pair in final_pairs {
            let untouched = self
                .ids_with_prefix(kv, &pair_prefix(pair))?
                .into_iter()
                .filter(|id| !view.contains_key(id))
                .count();
            let touched = view
                .values()
                .flatten()
                .filter(|edge| edge.pair() == pair)
                .count();

            if untouched + touched > 1 {
                warn!(%pair, "Rejecting commit: duplicate edge for pair");
                return Err(EdgeStoreError::DuplicatePair { pair });
            }
        }

        Ok(())
    }
}

impl<S: KeyValueStore> EdgeStore for KvEdgeStore<S> {
    fn find_by_pair(
        &self,
        follower: UserId,
        friend: UserId,
    ) -> Result<Option<Edge>, EdgeStoreError> {
        let kv = self.kv.read();
        let pair = EdgePair::new(follower, friend);
        // Ids sort ascending inside the pair prefix; the oldest edge wins.
        match self.ids_with_prefix(&*kv, &pair_prefix(pair))?.first() {
            Some(id) => Ok(Some(self.load_indexed(&*kv, *id)?)),
            None => Ok(None),
        }
    }

    fn find_all_by_pair(
        &self,
        follower: UserId,
        friend: UserId,
    ) -> Result<Vec<Edge>, EdgeStoreError> {
        let kv = self.kv.read();
        let pair = EdgePair::new(follower, friend);
        self.ids_with_prefix(&*kv, &pair_prefix(pair))?
            .into_iter()
            .map(|id| self.load_indexed(&*kv, id))
            .collect()
    }

    fn find_by_followers(&self, followers: &[UserId]) -> Result<Vec<Edge>, EdgeStoreError> {
        let kv = self.kv.read();
        let followers: BTreeSet<UserId> = followers.iter().copied().collect();

        let mut edges = Vec::new();
        for follower in followers {
            for id in self.ids_with_prefix(&*kv, &follower_prefix(follower))? {
                edges.push(self.load_indexed(&*kv, id)?);
            }
        }
        edges.sort_by_key(|edge| edge.id);

        debug!(count = edges.len(), "Loaded edges by follower");
        Ok(edges)
    }

    fn commit(&self, unit: EdgeUnitOfWork) -> Result<CommitReceipt, EdgeStoreError> {
        if unit.is_empty() {
            return Ok(CommitReceipt::default());
        }

        let mut kv = self.kv.write();
        let first_id = self.next_edge_id(&*kv)?;
        let mut next_id = first_id;

        // Stored state of every touched edge before this commit.
        let mut originals: HashMap<EdgeId, Option<Edge>> = HashMap::new();
        // Working view after replaying the unit. `None` means deleted.
        let mut view: BTreeMap<EdgeId, Option<Edge>> = BTreeMap::new();
        let mut receipt = CommitReceipt::default();

        for write in unit.into_writes() {
            match write {
                EdgeWrite::Insert(new_edge) => {
                    let id = EdgeId(next_id);
                    next_id += 1;
                    let edge = new_edge.into_edge(id);
                    originals.insert(id, None);
                    view.insert(id, Some(edge.clone()));
                    receipt.inserted.push(edge);
                }
                EdgeWrite::Update(edge) => {
                    let id = edge.id;
                    let current = match view.get(&id) {
                        Some(staged) => staged.clone(),
                        None => {
                            let stored = self.load_edge(&*kv, id)?;
                            originals.insert(id, stored.clone());
                            stored
                        }
                    };
                    if current.is_none() {
                        return Err(EdgeStoreError::MissingEdge(id));
                    }
                    view.insert(id, Some(edge));
                    receipt.updated += 1;
                }
                EdgeWrite::Delete(id) => {
                    let current = match view.get(&id) {
                        Some(staged) => staged.clone(),
                        None => {
                            let stored = self.load_edge(&*kv, id)?;
                            originals.insert(id, stored.clone());
                            stored
                        }
                    };
                    if current.is_none() {
                        return Err(EdgeStoreError::MissingEdge(id));
                    }
                    view.insert(id, None);
                    receipt.deleted += 1;
                }
            }
        }

        if self.config.enforce_unique_pairs {
            self.check_unique_pairs(&*kv, &view)?;
        }

        let mut operations = Vec::new();
        for (id, final_edge) in &view {
            let original = originals.get(id).cloned().flatten();

            if let Some(orig) = &original {
                let moved = final_edge.as_ref().map(Edge::pair) != Some(orig.pair());
                if moved {
                    operations.push(BatchOperation::delete(pair_key(orig.pair(), *id)));
                }
            }

            match final_edge {
                Some(edge) => {
                    operations.push(BatchOperation::put(edge_key(*id), self.codec.encode(edge)?));
                    operations.push(BatchOperation::put(pair_key(edge.pair(), *id), Vec::new()));
                }
                None if original.is_some() => {
                    operations.push(BatchOperation::delete(edge_key(*id)));
                }
                None => {}
            }
        }

        if next_id != first_id {
            operations.push(BatchOperation::put(
                NEXT_EDGE_ID_KEY.to_vec(),
                next_id.to_be_bytes().to_vec(),
            ));
        }

        kv.atomic_batch_write(operations)?;

        debug!(
            inserted = receipt.inserted.len(),
            updated = receipt.updated,
            deleted = receipt.deleted,
            "Edge unit of work committed"
        );
        Ok(receipt)
    }
}
