//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identifiers**: `UserId`, `EdgeId`, `ContentId`, `Timestamp`
//! - **Collaborator records**: `Identity`, `ContentRecord`
//! - **Query vocabulary**: `SortOrder`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTIFIERS
// =============================================================================

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Stable numeric identity of a user, issued by the identity service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Opaque identifier of a relationship edge. Assigned by the edge store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a content record owned by the content service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ContentId(pub u64);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CLUSTER B: COLLABORATOR RECORDS
// =============================================================================

/// A user as seen by the social graph.
///
/// Credentials and profile management live in the identity service; only the
/// fields needed to render a relationship are carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl Identity {
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// A post published by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,
    pub owner_id: UserId,
    pub created_at: Timestamp,
    pub description: String,
    pub text: String,
    pub image: String,
}

// =============================================================================
// CLUSTER C: QUERY VOCABULARY
// =============================================================================

/// Direction of a timestamp-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    Ascending,
    /// Newest first. Used whenever the caller's token is not recognised.
    #[default]
    Descending,
}

impl SortOrder {
    /// Parse a caller-supplied sort token.
    ///
    /// Only a case-insensitive `"asc"` selects ascending order; any other
    /// value, including padded tokens like `" asc "`, falls back to descending.
    pub fn parse_lenient(token: &str) -> Self {
        if token.eq_ignore_ascii_case("asc") {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Ascending)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ASC"),
            SortOrder::Descending => write!(f, "DESC"),
        }
    }
}
