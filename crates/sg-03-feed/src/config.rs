//! Configuration for the Feed Query

use serde::{Deserialize, Serialize};

/// Feed query configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Page size when the caller does not ask for one
    pub default_limit: usize,
    /// Largest page a caller can ask for; bigger requests are clamped
    pub max_limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}
