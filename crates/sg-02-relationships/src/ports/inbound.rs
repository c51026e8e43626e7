//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::RelationshipError;
use crate::domain::value_objects::FriendshipView;
use async_trait::async_trait;
use shared_types::UserId;

/// Primary Relationship Engine API
///
/// Every method is one transition. Failures are all-or-nothing: when a
/// method returns `Err`, no edge was changed.
#[async_trait]
pub trait RelationshipApi: Send + Sync {
    /// Follow `target`, creating a `SUBSCRIBER` edge `caller → target`.
    async fn request_friendship(
        &self,
        caller: UserId,
        target: UserId,
    ) -> Result<FriendshipView, RelationshipError>;

    /// Confirm pending requests addressed to `approver`.
    ///
    /// Each approved subscriber ends with a `FRIENDSHIP` edge in both
    /// directions. Returns the incoming edges.
    async fn approve_friendship(
        &self,
        approver: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError>;

    /// Demote requests or friendships addressed to `owner` back to
    /// `SUBSCRIBER`. Never deletes; the reverse edges are left as they are.
    async fn reject_friendship(
        &self,
        owner: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError>;

    /// Mark the `from → to` friendship as having a chat request.
    async fn request_chat(
        &self,
        from: UserId,
        to: UserId,
    ) -> Result<FriendshipView, RelationshipError>;

    /// Remove the `follower → target` edge. The reverse edge is untouched.
    async fn delete_follow(&self, follower: UserId, target: UserId)
        -> Result<(), RelationshipError>;

    /// Collapse a mutual friendship into a single `follower → target`
    /// subscription.
    ///
    /// The forward edge is deleted and the reverse edge is re-pointed to
    /// read `follower → target` in `SUBSCRIBER` state, keeping its id.
    async fn unfriend(&self, follower: UserId, target: UserId) -> Result<(), RelationshipError>;
}
