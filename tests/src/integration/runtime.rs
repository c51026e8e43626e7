//! # Runtime Flows
//!
//! The wired runtime built from `SG_*` variables, driven through the
//! container's metered services.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use graph_runtime::{GraphRuntime, RuntimeConfig};
    use sg_01_edge_store::{ChatState, EdgeState, EdgeStore, EdgeUnitOfWork, NewEdge};
    use sg_02_relationships::{FailureKind, RelationshipApi};
    use sg_03_feed::{FeedApi, FeedRequest};
    use shared_types::{Identity, UserId};

    fn runtime_from(vars: &[(&str, &str)]) -> GraphRuntime {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = RuntimeConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        let runtime = GraphRuntime::new(config).unwrap();
        runtime.start();
        runtime
    }

    fn register_users(runtime: &GraphRuntime, users: u64) {
        let container = runtime.container();
        for i in 1..=users {
            container.identities.register(Identity::new(
                i,
                format!("user{}", i),
                format!("user{}@example.com", i),
            ));
        }
    }

    #[tokio::test]
    async fn test_runtime_applies_environment_to_services() {
        let runtime = runtime_from(&[
            ("SG_FEED_DEFAULT_LIMIT", "2"),
            ("SG_REJECT_ACCEPTS_FRIENDSHIP", "false"),
        ]);
        register_users(&runtime, 3);
        let container = runtime.container();
        for t in 1..=3 {
            container
                .content
                .publish(UserId(2), t * 10, format!("post {}", t));
        }

        container
            .relationships
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap();
        container
            .relationships
            .approve_friendship(UserId(2), &[UserId(1)])
            .await
            .unwrap();

        // Default page size comes from SG_FEED_DEFAULT_LIMIT.
        let feed = container
            .feed
            .get_feed(UserId(1), FeedRequest::default())
            .await
            .unwrap();
        assert_eq!(
            feed.iter().map(|r| r.created_at).collect::<Vec<_>>(),
            vec![30, 20]
        );

        // Reject no longer demotes friendships.
        let err = container
            .relationships
            .reject_friendship(UserId(2), &[UserId(1)])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidRequest);
        assert_eq!(
            container
                .edge_store
                .find_by_pair(UserId(1), UserId(2))
                .unwrap()
                .unwrap()
                .state,
            EdgeState::Friendship
        );

        runtime.shutdown();
    }

    #[tokio::test]
    async fn test_permissive_runtime_still_refuses_second_active_request() {
        let runtime = runtime_from(&[("SG_ENFORCE_UNIQUE_PAIRS", "false")]);
        register_users(&runtime, 2);
        let container = runtime.container();

        let mut unit = EdgeUnitOfWork::new();
        unit.insert(NewEdge {
            follower_id: UserId(1),
            friend_id: UserId(2),
            state: EdgeState::Canceled,
            chat: ChatState::Closed,
        });
        unit.insert(NewEdge::subscription(UserId(1), UserId(2)));
        container.edge_store.commit(unit).unwrap();

        let err = container
            .relationships
            .request_friendship(UserId(1), UserId(2))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Conflict);
        assert_eq!(
            container
                .edge_store
                .find_all_by_pair(UserId(1), UserId(2))
                .unwrap()
                .len(),
            2
        );
    }

    #[cfg(feature = "rocksdb")]
    #[tokio::test]
    async fn test_rocksdb_runtime_survives_restart() {
        let dir = tempfile::TempDir::new().unwrap();
        let data_dir = dir.path().to_string_lossy().into_owned();
        let vars = [
            ("SG_STORAGE_BACKEND", "rocksdb"),
            ("SG_DATA_DIR", data_dir.as_str()),
        ];

        {
            let runtime = runtime_from(&vars);
            register_users(&runtime, 2);
            runtime
                .container()
                .relationships
                .request_friendship(UserId(1), UserId(2))
                .await
                .unwrap();
            runtime.shutdown();
        }

        let runtime = runtime_from(&vars);
        let stored = runtime
            .container()
            .edge_store
            .find_by_pair(UserId(1), UserId(2))
            .unwrap()
            .unwrap();
        assert_eq!(stored.state, EdgeState::Subscriber);
        assert!(dir.path().join("edges").exists());
    }
}
