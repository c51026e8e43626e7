//! # Engine + Feed Flows
//!
//! Relationship transitions driven through the engine, observed through
//! the feed query over the same edge store.
//!
//! ```text
//! [Relationship Engine] ──commit──→ [Edge Store] ←──targets── [Feed Query]
//!                                                                  │
//!                                                       [Content Store]
//! ```

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::World;

    use sg_01_edge_store::{ChatState, EdgeState, EdgeStore, EdgeUnitOfWork, NewEdge};
    use sg_02_relationships::{FailureKind, RelationshipApi};
    use sg_03_feed::{FeedApi, FeedRequest};
    use shared_types::{ContentRecord, SortOrder, UserId};

    fn owners(records: &[ContentRecord]) -> Vec<u64> {
        records.iter().map(|r| r.owner_id.0).collect()
    }

    async fn feed_of<K: sg_01_edge_store::KeyValueStore>(world: &World<K>, viewer: u64) -> Vec<u64> {
        owners(
            &world
                .feed
                .get_feed(UserId(viewer), FeedRequest::default())
                .await
                .unwrap(),
        )
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_friendship_lifecycle_drives_feed_visibility() {
        let world = World::in_memory(2);
        world.content.publish(UserId(1), 10, "alice posts");
        world.content.publish(UserId(2), 20, "bob posts");

        assert!(feed_of(&world, 1).await.is_empty());

        // 1 follows 2: only 1 sees the other's content
        world
            .engine
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap();
        assert_eq!(feed_of(&world, 1).await, vec![2]);
        assert!(feed_of(&world, 2).await.is_empty());

        // 2 approves: mutual visibility
        world
            .engine
            .approve_friendship(UserId(2), &[UserId(1)])
            .await
            .unwrap();
        assert_eq!(feed_of(&world, 1).await, vec![2]);
        assert_eq!(feed_of(&world, 2).await, vec![1]);

        // Chat request does not affect the feed
        let chat = world
            .engine
            .request_chat(UserId(1), UserId(2))
            .await
            .unwrap();
        assert_eq!(chat.chat, ChatState::Requested);

        // 1 unfriends 2: the relationship collapses to 1 → 2
        world.engine.unfriend(UserId(1), UserId(2)).await.unwrap();

        let edges = world.edges().unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].follower_id, UserId(1));
        assert_eq!(edges[0].friend_id, UserId(2));
        assert_eq!(edges[0].state, EdgeState::Subscriber);
        assert_eq!(edges[0].chat, ChatState::Closed);

        assert_eq!(feed_of(&world, 1).await, vec![2]);
        assert!(feed_of(&world, 2).await.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_follower_keeps_feed() {
        let world = World::in_memory(2);
        world.content.publish(UserId(2), 20, "bob posts");

        world
            .engine
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap();
        let rejected = world
            .engine
            .reject_friendship(UserId(2), &[UserId(1)])
            .await
            .unwrap();

        assert_eq!(rejected[0].state, EdgeState::Subscriber);
        assert_eq!(feed_of(&world, 1).await, vec![2]);
    }

    #[tokio::test]
    async fn test_delete_follow_removes_content_from_feed() {
        let world = World::in_memory(3);
        world.content.publish(UserId(2), 20, "bob posts");
        world.content.publish(UserId(3), 30, "carol posts");

        for target in [2, 3] {
            world
                .engine
                .request_friendship(UserId(1), UserId(target))
                .await
                .unwrap();
        }
        assert_eq!(feed_of(&world, 1).await, vec![3, 2]);

        world.engine.delete_follow(UserId(1), UserId(3)).await.unwrap();
        assert_eq!(feed_of(&world, 1).await, vec![2]);
    }

    #[tokio::test]
    async fn test_canceled_edge_hidden_until_request_replaces_it() {
        let world = World::in_memory(2);
        world.content.publish(UserId(2), 20, "bob posts");

        let mut unit = EdgeUnitOfWork::new();
        unit.insert(NewEdge {
            follower_id: UserId(1),
            friend_id: UserId(2),
            state: EdgeState::Canceled,
            chat: ChatState::Closed,
        });
        world.store.commit(unit).unwrap();
        assert!(feed_of(&world, 1).await.is_empty());

        world
            .engine
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap();

        assert_eq!(world.edges().unwrap().len(), 1);
        assert_eq!(feed_of(&world, 1).await, vec![2]);
    }

    // =========================================================================
    // FAILURE ISOLATION
    // =========================================================================

    #[tokio::test]
    async fn test_failed_bulk_approve_changes_nothing() {
        let world = World::in_memory(4);
        world
            .engine
            .request_friendship(UserId(1), UserId(3))
            .await
            .unwrap();
        world
            .engine
            .request_friendship(UserId(2), UserId(4))
            .await
            .unwrap();
        let before = world.edges().unwrap();

        let err = world
            .engine
            .approve_friendship(UserId(3), &[UserId(1), UserId(2)])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::InvalidRequest);
        assert_eq!(world.edges().unwrap(), before);
        assert!(feed_of(&world, 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_unfriend_without_mirror_is_distinct_not_found() {
        let world = World::in_memory(2);
        world
            .engine
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap();

        let err = world
            .engine
            .unfriend(UserId(1), UserId(2))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::NotFound);
        assert!(err.to_string().starts_with("Reverse friendship not found"));
        assert!(world.edge(1, 2).is_some());
    }

    // =========================================================================
    // FEED PAGING
    // =========================================================================

    #[tokio::test]
    async fn test_feed_pages_are_ordered_and_repeatable() {
        let world = World::in_memory(4);
        for target in [2, 3, 4] {
            world
                .engine
                .request_friendship(UserId(1), UserId(target))
                .await
                .unwrap();
        }
        // Interleaved timestamps with a tie between owners 3 and 4
        world.content.publish(UserId(2), 10, "a");
        world.content.publish(UserId(3), 30, "b");
        world.content.publish(UserId(4), 30, "c");
        world.content.publish(UserId(2), 40, "d");
        world.content.publish(UserId(3), 50, "e");

        let all_desc = world
            .feed
            .get_feed(UserId(1), FeedRequest::new(0, 10, SortOrder::Descending))
            .await
            .unwrap();
        let stamps: Vec<(u64, u64)> = all_desc.iter().map(|r| (r.created_at, r.id.0)).collect();
        assert_eq!(stamps, vec![(50, 5), (40, 4), (30, 3), (30, 2), (10, 1)]);

        let page = FeedRequest::new(1, 2, SortOrder::parse_lenient("ASC"));
        let first = world.feed.get_feed(UserId(1), page).await.unwrap();
        let second = world.feed.get_feed(UserId(1), page).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|r| r.id.0).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }
}
