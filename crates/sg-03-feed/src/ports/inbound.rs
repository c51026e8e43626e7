//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::FeedError;
use crate::domain::value_objects::FeedRequest;
use async_trait::async_trait;
use shared_types::{ContentRecord, UserId};

/// Primary Feed Query API
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Content from everyone `viewer` follows or is friends with, ordered
    /// by creation time in `request.order`.
    async fn get_feed(
        &self,
        viewer: UserId,
        request: FeedRequest,
    ) -> Result<Vec<ContentRecord>, FeedError>;
}
