//! Redis-backed state store
//!
//! One hash keyed by asset id, values as JSON blobs, durable across
//! process restarts.

use async_trait::async_trait;
use ::redis::aio::ConnectionManager;
use ::redis::AsyncCommands;

use super::{StateError, StateStore};
use crate::models::state::AssetState;

const STATES_KEY: &str = "momentrix:asset_states";

pub struct RedisStateStore {
    conn: ConnectionManager,
    key: String,
}

impl RedisStateStore {
    /// Connect using `REDIS_URL` from the environment.
    pub async fn new() -> Result<Self, StateError> {
        Self::with_url(&crate::config::get_redis_url()).await
    }

    pub async fn with_url(url: &str) -> Result<Self, StateError> {
        let client = ::redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self {
            conn,
            key: STATES_KEY.to_string(),
        })
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn get(&self, asset_id: &str) -> Result<Option<AssetState>, StateError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.hget(&self.key, asset_id).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, asset_id: &str, state: &AssetState) -> Result<(), StateError> {
        let json = serde_json::to_string(state)?;
        let mut conn = self.conn.clone();
        let _: () = conn.hset(&self.key, asset_id, json).await?;
        Ok(())
    }
}
