//! Configuration for the Edge Store subsystem

use serde::{Deserialize, Serialize};

/// Edge store configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeStoreConfig {
    /// Reject commits that would leave two edges on one ordered
    /// `(follower, friend)` pair.
    pub enforce_unique_pairs: bool,
}

impl Default for EdgeStoreConfig {
    fn default() -> Self {
        Self {
            enforce_unique_pairs: true,
        }
    }
}

impl EdgeStoreConfig {
    /// Permissive mode: duplicate pairs are stored and lookups return the
    /// oldest edge of a pair.
    pub fn permissive() -> Self {
        Self {
            enforce_unique_pairs: false,
        }
    }
}
