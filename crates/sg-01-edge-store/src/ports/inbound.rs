//! Inbound Ports (Driving Ports / API)
//!
//! The query and commit surface used by the relationship engine and the
//! feed query.

use crate::domain::entities::{Edge, EdgeState};
use crate::domain::errors::EdgeStoreError;
use crate::domain::unit_of_work::{CommitReceipt, EdgeUnitOfWork};
use shared_types::UserId;

/// Primary Edge Store API
pub trait EdgeStore: Send + Sync {
    /// Edge for the ordered pair `follower → friend`, if any.
    fn find_by_pair(&self, follower: UserId, friend: UserId)
        -> Result<Option<Edge>, EdgeStoreError>;

    /// Every edge stored for the ordered pair, ordered by id.
    ///
    /// Holds at most one edge unless pair uniqueness is disabled.
    fn find_all_by_pair(&self, follower: UserId, friend: UserId)
        -> Result<Vec<Edge>, EdgeStoreError>;

    /// Every edge whose follower endpoint is one of `followers`, ordered by id.
    fn find_by_followers(&self, followers: &[UserId]) -> Result<Vec<Edge>, EdgeStoreError>;

    /// Apply every staged write atomically.
    ///
    /// Either all writes become visible or none do.
    fn commit(&self, unit: EdgeUnitOfWork) -> Result<CommitReceipt, EdgeStoreError>;

    /// Whether an edge exists for the ordered pair.
    fn exists_by_pair(&self, follower: UserId, friend: UserId) -> Result<bool, EdgeStoreError> {
        Ok(self.find_by_pair(follower, friend)?.is_some())
    }

    /// Whether an edge exists for the ordered pair in any state but `excluded`.
    fn exists_by_pair_state_not(
        &self,
        follower: UserId,
        friend: UserId,
        excluded: EdgeState,
    ) -> Result<bool, EdgeStoreError> {
        Ok(self
            .find_all_by_pair(follower, friend)?
            .iter()
            .any(|edge| edge.state != excluded))
    }

    /// Friend endpoints of edges leaving `follower` whose state is in `states`.
    fn friend_ids_in_states(
        &self,
        follower: UserId,
        states: &[EdgeState],
    ) -> Result<Vec<UserId>, EdgeStoreError> {
        let mut targets: Vec<UserId> = self
            .find_by_followers(&[follower])?
            .into_iter()
            .filter(|edge| edge.is_in(states))
            .map(|edge| edge.friend_id)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        Ok(targets)
    }
}

impl<T: EdgeStore + ?Sized> EdgeStore for std::sync::Arc<T> {
    fn find_by_pair(
        &self,
        follower: UserId,
        friend: UserId,
    ) -> Result<Option<Edge>, EdgeStoreError> {
        (**self).find_by_pair(follower, friend)
    }

    fn find_all_by_pair(
        &self,
        follower: UserId,
        friend: UserId,
    ) -> Result<Vec<Edge>, EdgeStoreError> {
        (**self).find_all_by_pair(follower, friend)
    }

    fn find_by_followers(&self, followers: &[UserId]) -> Result<Vec<Edge>, EdgeStoreError> {
        (**self).find_by_followers(followers)
    }

    fn commit(&self, unit: EdgeUnitOfWork) -> Result<CommitReceipt, EdgeStoreError> {
        (**self).commit(unit)
    }
}
