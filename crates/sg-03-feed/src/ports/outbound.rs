//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::{CollaboratorError, ContentRecord, SortOrder, UserId};

/// Listing interface of the content service.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Records owned by any of `owner_ids`, ordered by `created_at` then
    /// `id` in `order`, skipping `offset` records and returning at most
    /// `limit`.
    async fn list_by_owners(
        &self,
        owner_ids: &[UserId],
        offset: usize,
        limit: usize,
        order: SortOrder,
    ) -> Result<Vec<ContentRecord>, CollaboratorError>;
}
