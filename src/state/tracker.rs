//! Bearish-to-bullish crossing detection against persisted state

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::{StateError, StateStore};
use crate::models::state::AssetState;

/// RSI at or below this is bearish; strictly above is bullish.
pub const BULLISH_THRESHOLD: f64 = 50.0;

pub struct StateTracker {
    store: Arc<dyn StateStore>,
}

impl StateTracker {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Compare `new_value` against the persisted prior value and report
    /// whether a bearish-to-bullish crossing occurred.
    ///
    /// Crossing requires a defined prior <= 50 and a defined new value
    /// > 50; an absent prior can never cross, and exactly 50 is bearish
    /// on both sides. State is written iff `new_value` is defined; an
    /// unavailable value leaves the prior record untouched so the next
    /// successful run still sees it.
    pub async fn evaluate(
        &self,
        asset_id: &str,
        new_value: Option<f64>,
    ) -> Result<bool, StateError> {
        let prior = self.store.get(asset_id).await?;

        let crossed = match (prior.as_ref(), new_value) {
            (Some(prev), Some(new)) => prev.value <= BULLISH_THRESHOLD && new > BULLISH_THRESHOLD,
            _ => false,
        };

        if let Some(value) = new_value {
            self.store
                .put(
                    asset_id,
                    &AssetState {
                        value,
                        updated_at: Utc::now(),
                    },
                )
                .await?;
        } else {
            debug!(asset = %asset_id, "no indicator value this run, keeping prior state");
        }

        Ok(crossed)
    }
}
