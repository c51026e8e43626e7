//! Validation rules guarding each transition
//!
//! Pure functions over loaded edges. The service calls them before staging
//! any write, so a violation never reaches the store.

use super::errors::RelationshipError;
use sg_01_edge_store::{Edge, EdgeState};
use shared_types::UserId;

pub const MSG_SELF_FOLLOW: &str = "You can't follow yourself.";
pub const MSG_NO_REQUESTS: &str = "Friendship requests were not found";
pub const MSG_NOT_OWNER: &str = "You can only change your requests";
pub const MSG_APPROVE_STATE: &str = "Status for friendship incorrect";
pub const MSG_REJECT_STATE: &str = "Status for reject friendship incorrect";
pub const MSG_CHAT_NOT_FRIENDS: &str = "Only friends can open a chat with each other";

/// A user cannot follow themselves.
pub fn check_not_self(caller: UserId, target: UserId) -> Result<(), RelationshipError> {
    if caller == target {
        return Err(RelationshipError::invalid(MSG_SELF_FOLLOW));
    }
    Ok(())
}

/// Batch size limit for approve/reject.
pub fn check_batch_size(len: usize, max: usize) -> Result<(), RelationshipError> {
    if len > max {
        return Err(RelationshipError::invalid(format!(
            "Too many subscribers in one request: {} > {}",
            len, max
        )));
    }
    Ok(())
}

/// Ownership and eligibility of a bulk approve/reject candidate set.
///
/// - the set must not be empty
/// - every edge must be addressed to `owner`
/// - at least one edge must be in one of `eligible` states
pub fn check_batch_candidates(
    owner: UserId,
    candidates: &[Edge],
    eligible: &[EdgeState],
    state_message: &str,
) -> Result<(), RelationshipError> {
    if candidates.is_empty() {
        return Err(RelationshipError::invalid(MSG_NO_REQUESTS));
    }

    if !candidates.iter().all(|edge| edge.friend_id == owner) {
        return Err(RelationshipError::invalid(MSG_NOT_OWNER));
    }

    if !candidates.iter().any(|edge| edge.is_in(eligible)) {
        return Err(RelationshipError::invalid(state_message));
    }

    Ok(())
}

/// Chat can only be requested over a confirmed friendship.
pub fn check_friendship(edge: &Edge) -> Result<(), RelationshipError> {
    if edge.state != EdgeState::Friendship {
        return Err(RelationshipError::invalid(MSG_CHAT_NOT_FRIENDS));
    }
    Ok(())
}
