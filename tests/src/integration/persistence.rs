//! # Persistent Flows
//!
//! The same transitions over a RocksDB-backed edge store, including a
//! reopen to check that committed edges and the id sequence survive.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::World;

    use sg_01_edge_store::{EdgeState, RocksDbConfig, RocksDbStore};
    use sg_02_relationships::RelationshipApi;
    use shared_types::UserId;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> RocksDbStore {
        let path = dir.path().join("edges");
        RocksDbStore::open(RocksDbConfig::for_testing(path.to_string_lossy().into_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_edges_survive_reopen() {
        let dir = TempDir::new().unwrap();

        let first_id = {
            let world = World::over(open(&dir), 3);
            world
                .engine
                .request_friendship(UserId(1), UserId(2))
                .await
                .unwrap();
            world
                .engine
                .approve_friendship(UserId(2), &[UserId(1)])
                .await
                .unwrap();
            world.edge(1, 2).unwrap().id
        };

        let world = World::over(open(&dir), 3);
        assert_eq!(world.edge(1, 2).unwrap().id, first_id);
        assert_eq!(world.edge(2, 1).unwrap().state, EdgeState::Friendship);

        // The id sequence continues after the reopen
        let view = world
            .engine
            .request_friendship(UserId(3), UserId(1))
            .await
            .unwrap();
        assert!(world.edges().unwrap().iter().all(|e| e.id <= view.id));
        assert_eq!(world.edges().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unfriend_is_atomic_on_disk() {
        let dir = TempDir::new().unwrap();
        {
            let world = World::over(open(&dir), 2);
            world
                .engine
                .request_friendship(UserId(1), UserId(2))
                .await
                .unwrap();
            world
                .engine
                .approve_friendship(UserId(2), &[UserId(1)])
                .await
                .unwrap();
            world.engine.unfriend(UserId(1), UserId(2)).await.unwrap();
        }

        let world = World::over(open(&dir), 2);
        let edges = world.edges().unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].follower_id, UserId(1));
        assert_eq!(edges[0].state, EdgeState::Subscriber);
    }
}
