//! Output records for the Relationship Engine

use serde::{Deserialize, Serialize};
use sg_01_edge_store::{ChatState, Edge, EdgeState};
use shared_types::{EdgeId, Identity, UserId};

/// A relationship edge as returned to callers.
///
/// The target endpoint is resolved to its identity so clients can render
/// the relationship without a second lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipView {
    pub id: EdgeId,
    pub follower_id: UserId,
    pub friend: Identity,
    pub state: EdgeState,
    pub chat: ChatState,
}

impl FriendshipView {
    /// Map an edge whose friend endpoint is `friend`.
    pub fn new(edge: &Edge, friend: Identity) -> Self {
        debug_assert_eq!(edge.friend_id, friend.id);
        Self {
            id: edge.id,
            follower_id: edge.follower_id,
            friend,
            state: edge.state,
            chat: edge.chat,
        }
    }

    pub fn friend_id(&self) -> UserId {
        self.friend.id
    }
}
