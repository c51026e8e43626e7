//! Configuration for the Relationship Engine

use serde::{Deserialize, Serialize};

/// Relationship engine configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelationshipConfig {
    /// Maximum subscriber ids accepted by one approve/reject call
    pub max_batch_size: usize,
    /// Let reject demote confirmed friendships, not only pending requests
    pub reject_accepts_friendship: bool,
}

impl Default for RelationshipConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 500,
            reject_accepts_friendship: true,
        }
    }
}
