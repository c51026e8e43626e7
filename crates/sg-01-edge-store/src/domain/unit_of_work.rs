//! Unit of work for edge transitions
//!
//! A transition reads through the store, stages every write here and hands
//! the whole unit to [`EdgeStore::commit`](crate::ports::EdgeStore::commit).
//! Dropping a unit without committing discards it, which is how a failed
//! precondition leaves the store untouched.

use super::entities::{Edge, NewEdge};
use shared_types::EdgeId;

/// A single staged write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeWrite {
    /// Create an edge; the store assigns its id at commit.
    Insert(NewEdge),
    /// Overwrite an existing edge, possibly with new endpoints.
    Update(Edge),
    /// Remove an edge.
    Delete(EdgeId),
}

/// Ordered set of staged writes applied atomically on commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeUnitOfWork {
    writes: Vec<EdgeWrite>,
}

impl EdgeUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge: NewEdge) -> &mut Self {
        self.writes.push(EdgeWrite::Insert(edge));
        self
    }

    pub fn update(&mut self, edge: Edge) -> &mut Self {
        self.writes.push(EdgeWrite::Update(edge));
        self
    }

    pub fn update_all(&mut self, edges: impl IntoIterator<Item = Edge>) -> &mut Self {
        self.writes.extend(edges.into_iter().map(EdgeWrite::Update));
        self
    }

    pub fn delete(&mut self, id: EdgeId) -> &mut Self {
        self.writes.push(EdgeWrite::Delete(id));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn writes(&self) -> &[EdgeWrite] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<EdgeWrite> {
        self.writes
    }
}

/// Result of a successful commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Inserted edges with their assigned ids, in staging order.
    pub inserted: Vec<Edge>,
    /// Number of updates applied.
    pub updated: usize,
    /// Number of deletes applied.
    pub deleted: usize,
}

impl CommitReceipt {
    /// The single inserted edge of a one-insert unit.
    pub fn first_inserted(&self) -> Option<&Edge> {
        self.inserted.first()
    }
}
