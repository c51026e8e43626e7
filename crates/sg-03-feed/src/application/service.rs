//! Feed Service
//!
//! Resolves the viewer's follow targets from the edge store and delegates
//! the listing to the content service.

use crate::config::FeedConfig;
use crate::domain::errors::FeedError;
use crate::domain::value_objects::FeedRequest;
use crate::ports::inbound::FeedApi;
use crate::ports::outbound::ContentQuery;
use async_trait::async_trait;
use sg_01_edge_store::{EdgeState, EdgeStore};
use shared_types::{ContentRecord, UserId};
use std::sync::Arc;
use tracing::debug;

/// Edge states whose targets appear in a follower's feed.
pub const FEED_STATES: [EdgeState; 2] = [EdgeState::Subscriber, EdgeState::Friendship];

/// Feed Query service
pub struct FeedService<S, C>
where
    S: EdgeStore,
    C: ContentQuery,
{
    config: FeedConfig,
    store: Arc<S>,
    content: Arc<C>,
}

impl<S, C> FeedService<S, C>
where
    S: EdgeStore,
    C: ContentQuery,
{
    pub fn new(store: Arc<S>, content: Arc<C>) -> Self {
        Self::with_config(FeedConfig::default(), store, content)
    }

    pub fn with_config(config: FeedConfig, store: Arc<S>, content: Arc<C>) -> Self {
        Self {
            config,
            store,
            content,
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

#[async_trait]
impl<S, C> FeedApi for FeedService<S, C>
where
    S: EdgeStore,
    C: ContentQuery,
{
    async fn get_feed(
        &self,
        viewer: UserId,
        request: FeedRequest,
    ) -> Result<Vec<ContentRecord>, FeedError> {
        let limit = request.effective_limit(&self.config);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let targets = self.store.friend_ids_in_states(viewer, &FEED_STATES)?;
        if targets.is_empty() {
            debug!(viewer = %viewer, "Viewer follows nobody, empty feed");
            return Ok(Vec::new());
        }

        let records = self
            .content
            .list_by_owners(&targets, request.offset, limit, request.order)
            .await?;

        debug!(
            viewer = %viewer,
            targets = targets.len(),
            offset = request.offset,
            limit,
            order = %request.order,
            returned = records.len(),
            "Feed page served"
        );
        Ok(records)
    }
}
