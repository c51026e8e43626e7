//! Metered service decorators.
//!
//! Wrap a `RelationshipApi` or `FeedApi` and record each call in the
//! Prometheus registry before handing the result back unchanged.

use async_trait::async_trait;
use sg_02_relationships::{FailureKind, FriendshipView, RelationshipApi, RelationshipError};
use sg_03_feed::{FeedApi, FeedError, FeedRequest};
use shared_types::{ContentRecord, UserId};
use social_telemetry::{record_feed_query, record_transition};
use std::time::Instant;

/// Metric label for a transition result.
pub fn outcome_label<T>(result: &Result<T, RelationshipError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(err) => match err.kind() {
            FailureKind::InvalidRequest => "invalid_request",
            FailureKind::NotFound => "not_found",
            FailureKind::Conflict => "conflict",
            FailureKind::Internal => "internal",
        },
    }
}

fn observe<T>(
    operation: &'static str,
    started: Instant,
    result: Result<T, RelationshipError>,
) -> Result<T, RelationshipError> {
    record_transition(
        operation,
        outcome_label(&result),
        started.elapsed().as_secs_f64(),
    );
    if let Err(err) = &result {
        if err.kind() == FailureKind::Internal {
            tracing::error!(operation, error = %err, "Relationship transition failed");
        }
    }
    result
}

/// Relationship engine with per-operation metrics.
pub struct MeteredRelationships<R> {
    inner: R,
}

impl<R: RelationshipApi> MeteredRelationships<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: RelationshipApi> RelationshipApi for MeteredRelationships<R> {
    async fn request_friendship(
        &self,
        caller: UserId,
        target: UserId,
    ) -> Result<FriendshipView, RelationshipError> {
        let started = Instant::now();
        let result = self.inner.request_friendship(caller, target).await;
        observe("request_friendship", started, result)
    }

    async fn approve_friendship(
        &self,
        approver: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError> {
        let started = Instant::now();
        let result = self.inner.approve_friendship(approver, subscriber_ids).await;
        observe("approve_friendship", started, result)
    }

    async fn reject_friendship(
        &self,
        owner: UserId,
        subscriber_ids: &[UserId],
    ) -> Result<Vec<FriendshipView>, RelationshipError> {
        let started = Instant::now();
        let result = self.inner.reject_friendship(owner, subscriber_ids).await;
        observe("reject_friendship", started, result)
    }

    async fn request_chat(
        &self,
        from: UserId,
        to: UserId,
    ) -> Result<FriendshipView, RelationshipError> {
        let started = Instant::now();
        let result = self.inner.request_chat(from, to).await;
        observe("request_chat", started, result)
    }

    async fn delete_follow(
        &self,
        follower: UserId,
        target: UserId,
    ) -> Result<(), RelationshipError> {
        let started = Instant::now();
        let result = self.inner.delete_follow(follower, target).await;
        observe("delete_follow", started, result)
    }

    async fn unfriend(&self, follower: UserId, target: UserId) -> Result<(), RelationshipError> {
        let started = Instant::now();
        let result = self.inner.unfriend(follower, target).await;
        observe("unfriend", started, result)
    }
}

/// Feed query with query and page-size metrics.
pub struct MeteredFeed<F> {
    inner: F,
}

impl<F: FeedApi> MeteredFeed<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<F: FeedApi> FeedApi for MeteredFeed<F> {
    async fn get_feed(
        &self,
        viewer: UserId,
        request: FeedRequest,
    ) -> Result<Vec<ContentRecord>, FeedError> {
        let result = self.inner.get_feed(viewer, request).await;
        match &result {
            Ok(records) => record_feed_query(Some(records.len())),
            Err(err) => {
                tracing::error!(viewer = %viewer, error = %err, "Feed query failed");
                record_feed_query(None);
            }
        }
        result
    }
}
