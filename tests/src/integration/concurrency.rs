//! # Racing Transitions
//!
//! Transitions read, validate and commit without per-edge locks. The edge
//! store's uniqueness check at commit is what keeps racing writers from
//! duplicating a pair.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::integration::fixtures::World;

    use sg_01_edge_store::EdgeState;
    use sg_02_relationships::{FailureKind, RelationshipApi};
    use shared_types::UserId;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_requests_create_one_edge() {
        let world = Arc::new(World::in_memory(2));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let world = Arc::clone(&world);
                tokio::spawn(async move {
                    world
                        .engine
                        .request_friendship(UserId(1), UserId(2))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert_eq!(err.kind(), FailureKind::Conflict),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(world.edges().unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_followers_all_land() {
        const FOLLOWERS: u64 = 24;
        let world = Arc::new(World::in_memory(FOLLOWERS + 1));
        let celebrity = UserId(FOLLOWERS + 1);

        let handles: Vec<_> = (1..=FOLLOWERS)
            .map(|follower| {
                let world = Arc::clone(&world);
                tokio::spawn(async move {
                    world
                        .engine
                        .request_friendship(UserId(follower), celebrity)
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let followers: Vec<UserId> = (1..=FOLLOWERS).map(UserId).collect();
        let approved = world
            .engine
            .approve_friendship(celebrity, &followers)
            .await
            .unwrap();

        assert_eq!(approved.len() as u64, FOLLOWERS);
        let edges = world.edges().unwrap();
        assert_eq!(edges.len() as u64, FOLLOWERS * 2);
        assert!(edges.iter().all(|e| e.state == EdgeState::Friendship));

        let mut ids: Vec<u64> = edges.iter().map(|e| e.id.0).collect();
        ids.dedup();
        assert_eq!(ids.len() as u64, FOLLOWERS * 2);
    }
}
