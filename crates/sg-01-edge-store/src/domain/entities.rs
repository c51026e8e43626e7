//! Core entities for the Edge Store

use serde::{Deserialize, Serialize};
use shared_types::{EdgeId, UserId};
use std::fmt;

/// Relationship state of a directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeState {
    /// One-way follow, pending confirmation by the target.
    Subscriber,
    /// Confirmed relationship in this direction.
    Friendship,
    /// Terminal. No transition produces it; it only arrives with imported data.
    Canceled,
}

impl EdgeState {
    /// Whether content of the target shows up in the follower's feed.
    pub fn is_following(self) -> bool {
        matches!(self, EdgeState::Subscriber | EdgeState::Friendship)
    }
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeState::Subscriber => write!(f, "SUBSCRIBER"),
            EdgeState::Friendship => write!(f, "FRIENDSHIP"),
            EdgeState::Canceled => write!(f, "CANCELED"),
        }
    }
}

/// Chat sub-state. Only meaningful while the edge is in `Friendship`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChatState {
    #[default]
    Closed,
    Requested,
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatState::Closed => write!(f, "CLOSED"),
            ChatState::Requested => write!(f, "REQUESTED"),
        }
    }
}

/// Ordered endpoint pair of a directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgePair {
    pub follower: UserId,
    pub friend: UserId,
}

impl EdgePair {
    pub fn new(follower: UserId, friend: UserId) -> Self {
        Self { follower, friend }
    }

    /// The same pair pointed the other way.
    pub fn reversed(self) -> Self {
        Self {
            follower: self.friend,
            friend: self.follower,
        }
    }
}

impl fmt::Display for EdgePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.follower, self.friend)
    }
}

/// A directed relationship record, follower → friend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub follower_id: UserId,
    pub friend_id: UserId,
    pub state: EdgeState,
    pub chat: ChatState,
}

impl Edge {
    pub fn pair(&self) -> EdgePair {
        EdgePair::new(self.follower_id, self.friend_id)
    }

    pub fn is_in(&self, states: &[EdgeState]) -> bool {
        states.contains(&self.state)
    }

    /// Same edge with a different state.
    pub fn with_state(mut self, state: EdgeState) -> Self {
        self.state = state;
        self
    }

    /// Same edge re-pointed at another endpoint pair. The id is kept.
    pub fn repointed(mut self, pair: EdgePair) -> Self {
        self.follower_id = pair.follower;
        self.friend_id = pair.friend;
        self
    }
}

/// An edge that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEdge {
    pub follower_id: UserId,
    pub friend_id: UserId,
    pub state: EdgeState,
    pub chat: ChatState,
}

impl NewEdge {
    /// A fresh one-way follow request.
    pub fn subscription(follower_id: UserId, friend_id: UserId) -> Self {
        Self {
            follower_id,
            friend_id,
            state: EdgeState::Subscriber,
            chat: ChatState::Closed,
        }
    }

    /// An edge created directly in the confirmed state.
    pub fn friendship(follower_id: UserId, friend_id: UserId) -> Self {
        Self {
            follower_id,
            friend_id,
            state: EdgeState::Friendship,
            chat: ChatState::Closed,
        }
    }

    pub fn pair(&self) -> EdgePair {
        EdgePair::new(self.follower_id, self.friend_id)
    }

    pub(crate) fn into_edge(self, id: EdgeId) -> Edge {
        Edge {
            id,
            follower_id: self.follower_id,
            friend_id: self.friend_id,
            state: self.state,
            chat: self.chat,
        }
    }
}
