//! # Runtime Configuration
//!
//! Unified configuration for every subsystem, read from `SG_*` environment
//! variables on top of per-subsystem defaults.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SG_STORAGE_BACKEND` | `memory` | `memory` or `rocksdb` |
//! | `SG_DATA_DIR` | `./data` | Directory holding the RocksDB edge database |
//! | `SG_ENFORCE_UNIQUE_PAIRS` | `true` | One edge per ordered pair |
//! | `SG_MAX_BATCH_SIZE` | `500` | Max subscriber ids per approve/reject |
//! | `SG_REJECT_ACCEPTS_FRIENDSHIP` | `true` | Reject may demote friendships |
//! | `SG_FEED_DEFAULT_LIMIT` | `20` | Feed page size when none is given |
//! | `SG_FEED_MAX_LIMIT` | `100` | Largest feed page |

use serde::{Deserialize, Serialize};
use sg_01_edge_store::EdgeStoreConfig;
use sg_02_relationships::RelationshipConfig;
use sg_03_feed::FeedConfig;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Edge store configuration.
    pub edge_store: EdgeStoreConfig,
    /// Relationship engine configuration.
    pub relationships: RelationshipConfig,
    /// Feed query configuration.
    pub feed: FeedConfig,
}

/// Where edges live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on restart.
    #[default]
    Memory,
    /// RocksDB under `StorageConfig::data_dir`.
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "rocksdb" | "rocks" => Ok(StorageBackend::RocksDb),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::RocksDb => write!(f, "rocksdb"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection.
    pub backend: StorageBackend,
    /// Data directory for persistent backends.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
        }
    }
}

impl StorageConfig {
    /// Directory of the RocksDB edge database.
    pub fn edge_db_path(&self) -> PathBuf {
        self.data_dir.join("edges")
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// `SG_STORAGE_BACKEND` named no known backend.
    #[error("Unknown storage backend {0:?} (expected memory or rocksdb)")]
    UnknownBackend(String),

    /// A limit that must be positive is zero.
    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    /// The default feed page is larger than the maximum.
    #[error("Feed default limit {default} exceeds max limit {max}")]
    DefaultAboveMax { default: usize, max: usize },
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(backend) = lookup("SG_STORAGE_BACKEND") {
            config.storage.backend = backend.parse()?;
        }
        if let Some(dir) = lookup("SG_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(enforce) = parse_var(&lookup, "SG_ENFORCE_UNIQUE_PAIRS")? {
            config.edge_store.enforce_unique_pairs = enforce;
        }
        if let Some(size) = parse_var(&lookup, "SG_MAX_BATCH_SIZE")? {
            config.relationships.max_batch_size = size;
        }
        if let Some(accepts) = parse_var(&lookup, "SG_REJECT_ACCEPTS_FRIENDSHIP")? {
            config.relationships.reject_accepts_friendship = accepts;
        }
        if let Some(limit) = parse_var(&lookup, "SG_FEED_DEFAULT_LIMIT")? {
            config.feed.default_limit = limit;
        }
        if let Some(limit) = parse_var(&lookup, "SG_FEED_MAX_LIMIT")? {
            config.feed.max_limit = limit;
        }

        Ok(config)
    }

    /// Reject configurations the services cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.relationships.max_batch_size == 0 {
            return Err(ConfigError::ZeroLimit("max_batch_size"));
        }
        if self.feed.default_limit == 0 {
            return Err(ConfigError::ZeroLimit("feed.default_limit"));
        }
        if self.feed.max_limit == 0 {
            return Err(ConfigError::ZeroLimit("feed.max_limit"));
        }
        if self.feed.default_limit > self.feed.max_limit {
            return Err(ConfigError::DefaultAboveMax {
                default: self.feed.default_limit,
                max: self.feed.max_limit,
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}
