//! Persisted per-asset indicator state
//!
//! The store is the only cross-asset shared resource. Keys are disjoint
//! and the scheduler computes each asset exactly once per run, so access
//! is plain read-then-write per asset with no cross-asset locking.

pub mod memory;
pub mod redis;
pub mod tracker;

pub use memory::MemoryStateStore;
pub use self::redis::RedisStateStore;
pub use tracker::StateTracker;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::state::AssetState;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state backend error: {0}")]
    Backend(#[from] ::redis::RedisError),
    #[error("state serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable key-value contract for per-asset state.
///
/// `get` may report absence (first-ever run for an asset); `put`
/// overwrites. Storage technology is an implementation detail behind
/// this trait.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, asset_id: &str) -> Result<Option<AssetState>, StateError>;

    async fn put(&self, asset_id: &str, state: &AssetState) -> Result<(), StateError>;
}
