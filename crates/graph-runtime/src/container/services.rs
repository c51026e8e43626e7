//! # Service Container
//!
//! Builds the subsystem graph from a validated [`RuntimeConfig`].
//!
//! ## Initialization Order
//!
//! ```text
//! Edge Store (sg-01)          <- backend from StorageConfig
//!     ├── Relationship Engine (sg-02)   + identity directory
//!     └── Feed Query (sg-03)            + content store
//! ```
//!
//! ## Thread Safety
//!
//! - All services are wrapped in `Arc` for shared ownership
//! - The edge store serializes commits internally; services hold no locks

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use sg_01_edge_store::{EdgeStore, InMemoryKVStore, KvEdgeStore};
use sg_02_relationships::{InMemoryIdentityDirectory, RelationshipService};
use sg_03_feed::{FeedService, InMemoryContentStore};

use crate::adapters::{MeteredFeed, MeteredRelationships};
use crate::container::config::{ConfigError, RuntimeConfig, StorageBackend};

/// Edge store shared by every service, whatever its backend.
pub type SharedEdgeStore = Arc<dyn EdgeStore>;

/// Concrete relationship engine as wired by the runtime.
pub type ConcreteRelationships =
    MeteredRelationships<RelationshipService<SharedEdgeStore, InMemoryIdentityDirectory>>;

/// Concrete feed query as wired by the runtime.
pub type ConcreteFeed = MeteredFeed<FeedService<SharedEdgeStore, InMemoryContentStore>>;

/// Container construction errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open edge store: {0}")]
    Storage(String),

    #[error("Storage backend {0} is not compiled into this binary")]
    BackendUnavailable(StorageBackend),
}

/// Central container holding all service instances.
pub struct ServiceContainer {
    /// Edge Store (sg-01)
    pub edge_store: Arc<SharedEdgeStore>,

    /// Relationship Engine (sg-02)
    pub relationships: Arc<ConcreteRelationships>,

    /// Feed Query (sg-03)
    pub feed: Arc<ConcreteFeed>,

    /// Identity directory the engine validates users against.
    pub identities: Arc<InMemoryIdentityDirectory>,

    /// Content the feed lists from.
    pub content: Arc<InMemoryContentStore>,

    /// Runtime configuration (immutable after initialization).
    pub config: RuntimeConfig,
}

impl ServiceContainer {
    /// Validate `config` and build every service.
    #[instrument(name = "container_init", skip(config))]
    pub fn build(config: RuntimeConfig) -> Result<Self, ContainerError> {
        config.validate()?;
        info!(backend = %config.storage.backend, "Initializing social graph services");

        let edge_store: Arc<SharedEdgeStore> = Arc::new(open_edge_store(&config)?);
        let identities = Arc::new(InMemoryIdentityDirectory::new());
        let content = Arc::new(InMemoryContentStore::new());

        let relationships = Arc::new(MeteredRelationships::new(RelationshipService::with_config(
            config.relationships.clone(),
            Arc::clone(&edge_store),
            Arc::clone(&identities),
        )));
        info!(
            max_batch_size = config.relationships.max_batch_size,
            "  [sg-02] Relationship engine initialized"
        );

        let feed = Arc::new(MeteredFeed::new(FeedService::with_config(
            config.feed.clone(),
            Arc::clone(&edge_store),
            Arc::clone(&content),
        )));
        info!(
            default_limit = config.feed.default_limit,
            max_limit = config.feed.max_limit,
            "  [sg-03] Feed query initialized"
        );

        Ok(Self {
            edge_store,
            relationships,
            feed,
            identities,
            content,
            config,
        })
    }
}

fn open_edge_store(config: &RuntimeConfig) -> Result<SharedEdgeStore, ContainerError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("  [sg-01] Edge store initialized (in-memory)");
            Ok(Arc::new(KvEdgeStore::with_config(
                InMemoryKVStore::new(),
                config.edge_store.clone(),
            )))
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            use sg_01_edge_store::{RocksDbConfig, RocksDbStore};

            let path = config.storage.edge_db_path();
            let kv = RocksDbStore::open(RocksDbConfig {
                path: path.to_string_lossy().into_owned(),
                ..RocksDbConfig::default()
            })
            .map_err(|e| ContainerError::Storage(e.to_string()))?;
            info!(path = %path.display(), "  [sg-01] Edge store initialized (rocksdb)");
            Ok(Arc::new(KvEdgeStore::with_config(
                kv,
                config.edge_store.clone(),
            )))
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => Err(ContainerError::BackendUnavailable(StorageBackend::RocksDb)),
    }
}
