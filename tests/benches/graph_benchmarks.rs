//! # Social Graph Benchmarks
//!
//! | Area | Operation | Target |
//! |------|-----------|--------|
//! | sg-01 Edge Store | pair lookup | < 10µs |
//! | sg-01 Edge Store | follower scan | linear in out-degree |
//! | sg-02 Relationships | request + approve | < 100µs |
//! | sg-03 Feed | page over 100 targets | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use sg_01_edge_store::{EdgeStore, EdgeUnitOfWork, InMemoryKVStore, KvEdgeStore, NewEdge};
use sg_02_relationships::{InMemoryIdentityDirectory, RelationshipApi, RelationshipService};
use sg_03_feed::{FeedApi, FeedRequest, FeedService, InMemoryContentStore};
use shared_types::{Identity, SortOrder, UserId};

/// Store where every user `1..=users` follows `out_degree` random others.
fn populated_store(users: u64, out_degree: u64) -> KvEdgeStore<InMemoryKVStore> {
    let store = KvEdgeStore::new(InMemoryKVStore::new());
    let mut rng = rand::thread_rng();
    for follower in 1..=users {
        let mut unit = EdgeUnitOfWork::new();
        let mut targets = std::collections::BTreeSet::new();
        while (targets.len() as u64) < out_degree.min(users - 1) {
            let target = rng.gen_range(1..=users);
            if target != follower {
                targets.insert(target);
            }
        }
        for target in targets {
            unit.insert(NewEdge::subscription(UserId(follower), UserId(target)));
        }
        store.commit(unit).unwrap();
    }
    store
}

// ============================================================================
// SG-01: Edge Store
// ============================================================================

fn bench_edge_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-01-edge-store");
    group.measurement_time(Duration::from_secs(5));

    let store = populated_store(1_000, 20);
    let mut rng = rand::thread_rng();

    group.bench_function("find_by_pair", |b| {
        b.iter(|| {
            let follower = UserId(rng.gen_range(1..=1_000));
            let friend = UserId(rng.gen_range(1..=1_000));
            black_box(store.find_by_pair(follower, friend).unwrap())
        })
    });

    for batch in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("find_by_followers", batch), &batch, |b, &n| {
            let followers: Vec<UserId> = (1..=n as u64).map(UserId).collect();
            b.iter(|| black_box(store.find_by_followers(&followers).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// SG-02: Relationship Engine
// ============================================================================

fn bench_relationships(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-02-relationships");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    group.bench_function("request_approve_unfriend", |b| {
        b.iter_with_setup(
            || {
                let store = Arc::new(KvEdgeStore::new(InMemoryKVStore::new()));
                let directory = Arc::new(InMemoryIdentityDirectory::with_identities([
                    Identity::new(1, "a", "a@example.com"),
                    Identity::new(2, "b", "b@example.com"),
                ]));
                RelationshipService::new(store, directory)
            },
            |engine| {
                runtime.block_on(async {
                    engine.request_friendship(UserId(1), UserId(2)).await.unwrap();
                    engine
                        .approve_friendship(UserId(2), &[UserId(1)])
                        .await
                        .unwrap();
                    engine.unfriend(UserId(1), UserId(2)).await.unwrap();
                })
            },
        )
    });

    group.finish();
}

// ============================================================================
// SG-03: Feed Query
// ============================================================================

fn bench_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-03-feed");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let store = Arc::new(populated_store(500, 100));
    let content = Arc::new(InMemoryContentStore::new());
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        content.publish(UserId(rng.gen_range(1..=500)), rng.gen_range(0..1_000_000), "post");
    }
    let feed = FeedService::new(store, content);

    for order in [SortOrder::Descending, SortOrder::Ascending] {
        group.bench_with_input(BenchmarkId::new("get_feed", order), &order, |b, &order| {
            b.iter(|| {
                runtime.block_on(async {
                    black_box(
                        feed.get_feed(UserId(1), FeedRequest::new(0, 20, order))
                            .await
                            .unwrap(),
                    )
                })
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edge_store, bench_relationships, bench_feed);
criterion_main!(benches);
