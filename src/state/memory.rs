//! In-memory state store
//!
//! Used by tests and as a degraded fallback when Redis is unreachable;
//! crossings reset between process restarts in that mode.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StateError, StateStore};
use crate::models::state::AssetState;

#[derive(Default)]
pub struct MemoryStateStore {
    states: RwLock<HashMap<String, AssetState>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, asset_id: &str) -> Result<Option<AssetState>, StateError> {
        Ok(self.states.read().await.get(asset_id).cloned())
    }

    async fn put(&self, asset_id: &str, state: &AssetState) -> Result<(), StateError> {
        self.states
            .write()
            .await
            .insert(asset_id.to_string(), state.clone());
        Ok(())
    }
}
