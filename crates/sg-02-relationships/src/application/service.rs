//! Relationship Service
//!
//! Main service implementing `RelationshipApi`.
//!
//! Every transition follows the same pipeline:
//! 1. Validate input
//! 2. Load the edges it depends on
//! 3. Check ownership and state preconditions
//! 4. Stage writes in one `EdgeUnitOfWork`
//! 5. Commit atomically and map the result to output records

use crate::config::RelationshipConfig;
use crate::domain::errors::RelationshipError;
use crate::domain::invariants::{
    check_batch_candidates, check_batch_size, check_friendship, check_not_self, MSG_APPROVE_STATE,
    MSG_REJECT_STATE,
};
use crate::domain::value_objects::FriendshipView;
use crate::ports::inbound::RelationshipApi;
use crate::ports::outbound::IdentityDirectory;
use async_trait::async_trait;
use sg_01_edge_store::{
    ChatState, Edge, EdgePair, EdgeState, EdgeStore, EdgeUnitOfWork, NewEdge,
};
use shared_types::{Identity, UserId};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Relationship Engine service
pub struct RelationshipService<S, D>
where
    S: EdgeStore,
    D: IdentityDirectory,
{
    config: RelationshipConfig,
    store: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> RelationshipService<S, D>
where
    S: EdgeStore,
    D: IdentityDirectory,
{
    /// Create a new service with default config
    pub fn new(store: Arc<S>, directory: Arc<D>) -> Self {
        Self::with_config(RelationshipConfig::default(), store, directory)
    }

    /// Create a new service with custom config
    pub fn with_config(config: RelationshipConfig, store: Arc<S>, directory: Arc<D>) -> Self {
        Self {
            config,
            store,
            directory,
        }
    }

    pub fn config(&self) -> &RelationshipConfig {
        &self.config
    }

    /// Validated identity lookup.
    async fn require_user(&self, id: UserId) -> Result<Identity, RelationshipError> {
        self.directory
            .lookup(id)
            .await?
            .ok_or(RelationshipError::UserNotFound(id))
    }

    async fn require_existing(&self, id: UserId) -> Result<(), RelationshipError> {
        if !self.directory.exists(id).await? {
            return Err(RelationshipError::UserNotFound(id));
        }
        Ok(())
    }

    fn require_edge(&self, follower: UserId, friend: UserId) -> Result<Edge, RelationshipError> {
        self.store
            .find_by_pair(follower, friend)?
            .ok_or(RelationshipError::EdgeNotFound {
                pair: EdgePair::new(follower, friend),
            })
    }

    /// Load and validate the incoming edges of a bulk approve/reject.
    fn load_batch(
        &self,
        owner: UserId,
        subscriber_ids: &[UserId],
        eligible: &[EdgeState],
        state_message: &str,
    ) -> Result<Vec<Edge>, RelationshipError> {
        check_batch_size(subscriber_ids.len(), self.config.max_batch_size)?;

        let candidates = self.store.find_by_followers(subscriber_ids)?;
        debug!(
            owner = %owner,
            requested = subscriber_ids.len(),
            loaded = candidates.len(),
            "Loaded bulk candidates"
        );

        if let Err(err) = check_batch_candidates(owner, &candidates, eligible, state_message) {
            warn!(owner = %owner, error = %err, "Bulk transition rejected");
            return Err(err);
        }
        Ok(candidates)
    }

    fn reject_eligible_states(&self) -> &'static [EdgeState] {
        if self.config.reject_accepts_friendship {
            &[EdgeState::Subscriber, EdgeState::Friendship]
        } else {
            &[EdgeState::Subscriber]
        }
    }
}

#[async_trait]
impl<S, D> RelationshipApi for RelationshipService<S, D>
where
    S: EdgeStore,
    D: IdentityDirectory,
{
    async fn request_friendship(
        &self,
        caller: UserId,
        target: UserId,
    ) -> Result<FriendshipView, RelationshipError> {
        check_not_self(caller, target)?;
        self.require_existing(caller).await?;
        let friend = self.require_user(target).await?;

        if self
            .store
            .exists_by_pair_state_not(caller, target, EdgeState::Canceled)?
        {
            warn!(caller = %caller, target = %target, "Duplicate follow request");
            return Err(RelationshipError::Conflict {
                pair: EdgePair::new(caller, target),
            });
        }

        // Canceled edges give way to the new request.
        let mut unit = EdgeUnitOfWork::new();
        for canceled in self.store.find_all_by_pair(caller, target)? {
            unit.delete(canceled.id);
        }
        unit.insert(NewEdge::subscription(caller, target));

        let receipt = self.store.commit(unit)?;
        let edge = receipt
            .first_inserted()
            .ok_or_else(|| RelationshipError::Internal("commit returned no edge".to_string()))?;

        info!(edge_id = %edge.id, caller = %caller, target = %target, "Follow request created");
        Ok(FriendshipView::new(edge, friend))
    }

    async fn approve_friendship(
        &self,
        approver: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError> {
        let incoming = self.load_batch(
            approver,
            subscriber_ids,
            &[EdgeState::Subscriber],
            MSG_APPROVE_STATE,
        )?;
        let approver_identity = self.require_user(approver).await?;

        let mut unit = EdgeUnitOfWork::new();

        // Reverse edges approver → subscriber, one per subscriber that
        // actually has an incoming edge.
        let subscribers: BTreeSet<UserId> = incoming.iter().map(|edge| edge.follower_id).collect();
        for subscriber in &subscribers {
            match self.store.find_by_pair(approver, *subscriber)? {
                Some(reverse) => {
                    unit.update(reverse.with_state(EdgeState::Friendship));
                }
                None => {
                    unit.insert(NewEdge::friendship(approver, *subscriber));
                }
            }
        }

        let approved: Vec<Edge> = incoming
            .into_iter()
            .map(|edge| edge.with_state(EdgeState::Friendship))
            .collect();
        unit.update_all(approved.iter().cloned());

        let receipt = self.store.commit(unit)?;

        info!(
            approver = %approver,
            approved = approved.len(),
            reverse_created = receipt.inserted.len(),
            "Friendship requests approved"
        );
        Ok(approved
            .iter()
            .map(|edge| FriendshipView::new(edge, approver_identity.clone()))
            .collect())
    }

    async fn reject_friendship(
        &self,
        owner: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError> {
        let candidates = self.load_batch(
            owner,
            subscriber_ids,
            self.reject_eligible_states(),
            MSG_REJECT_STATE,
        )?;
        let owner_identity = self.require_user(owner).await?;

        let rejected: Vec<Edge> = candidates
            .into_iter()
            .map(|edge| edge.with_state(EdgeState::Subscriber))
            .collect();

        let mut unit = EdgeUnitOfWork::new();
        unit.update_all(rejected.iter().cloned());
        self.store.commit(unit)?;

        info!(owner = %owner, rejected = rejected.len(), "Friendship requests rejected");
        Ok(rejected
            .iter()
            .map(|edge| FriendshipView::new(edge, owner_identity.clone()))
            .collect())
    }

    async fn request_chat(
        &self,
        from: UserId,
        to: UserId,
    ) -> Result<FriendshipView, RelationshipError> {
        let mut edge = self.require_edge(from, to)?;
        check_friendship(&edge)?;
        let friend = self.require_user(to).await?;

        edge.chat = ChatState::Requested;
        let mut unit = EdgeUnitOfWork::new();
        unit.update(edge.clone());
        self.store.commit(unit)?;

        info!(edge_id = %edge.id, from = %from, to = %to, "Chat requested");
        Ok(FriendshipView::new(&edge, friend))
    }

    async fn delete_follow(
        &self,
        follower: UserId,
        target: UserId,
    ) -> Result<(), RelationshipError> {
        let edge = self.require_edge(follower, target)?;

        let mut unit = EdgeUnitOfWork::new();
        unit.delete(edge.id);
        self.store.commit(unit)?;

        info!(edge_id = %edge.id, follower = %follower, target = %target, "Follow removed");
        Ok(())
    }

    async fn unfriend(&self, follower: UserId, target: UserId) -> Result<(), RelationshipError> {
        let forward = self.require_edge(follower, target)?;
        let reverse = self.store.find_by_pair(target, follower)?.ok_or(
            RelationshipError::ReverseEdgeNotFound {
                pair: EdgePair::new(target, follower),
            },
        )?;
        self.require_existing(follower).await?;
        self.require_existing(target).await?;

        // The reverse edge takes over the forward direction as a plain
        // subscription; its id survives the swap.
        let mut demoted = reverse
            .clone()
            .repointed(forward.pair())
            .with_state(EdgeState::Subscriber);
        demoted.chat = ChatState::Closed;

        let mut unit = EdgeUnitOfWork::new();
        unit.delete(forward.id).update(demoted);
        self.store.commit(unit)?;

        info!(
            removed_edge = %forward.id,
            kept_edge = %reverse.id,
            follower = %follower,
            target = %target,
            "Friendship dissolved"
        );
        Ok(())
    }
}
