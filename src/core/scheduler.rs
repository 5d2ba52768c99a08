//! Batch scheduler driving one refresh run across the asset universe
//!
//! Assets are processed in fixed-size batches: concurrent within a batch,
//! strictly sequential across batches with a pause in between. The pause
//! times batch-size requests against the most restrictive provider's rate
//! limit, which is why there is no shared limiter object. A per-asset
//! failure fills that asset's result slot and never aborts the run.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{info, warn};

use super::cancel::CancelToken;
use crate::config::RefreshConfig;
use crate::history::HistoryResolver;
use crate::indicators::momentum::wilder_rsi;
use crate::models::asset::AssetRef;
use crate::models::state::{AssetOutcome, RunResult};
use crate::state::StateTracker;

pub struct BatchScheduler {
    resolver: Arc<HistoryResolver>,
    tracker: Arc<StateTracker>,
    config: RefreshConfig,
    current_run: Mutex<Option<CancelToken>>,
}

impl BatchScheduler {
    pub fn new(resolver: Arc<HistoryResolver>, tracker: Arc<StateTracker>, config: RefreshConfig) -> Self {
        Self {
            resolver,
            tracker,
            config,
            current_run: Mutex::new(None),
        }
    }

    /// Cancel the in-flight run, if any. The run returns its partial
    /// result once the current batch has drained.
    pub async fn cancel(&self) {
        if let Some(token) = self.current_run.lock().await.as_ref() {
            token.cancel();
        }
    }

    /// Refresh the whole universe once. Results are keyed by asset id and
    /// independent of completion order. Starting a new run first signals
    /// cancellation of the previous one.
    pub async fn run(&self, assets: &[AssetRef]) -> RunResult {
        let token = CancelToken::new();
        {
            let mut current = self.current_run.lock().await;
            if let Some(previous) = current.replace(token.clone()) {
                previous.cancel();
            }
        }

        let batch_size = self.config.batch_size.max(1);
        let mut outcomes = HashMap::with_capacity(assets.len());
        let mut complete = true;

        let mut batches = assets.chunks(batch_size).enumerate().peekable();
        while let Some((index, batch)) = batches.next() {
            if token.is_cancelled() {
                complete = false;
                break;
            }

            let results = join_all(batch.iter().map(|asset| self.process_asset(asset))).await;
            for (asset, outcome) in batch.iter().zip(results) {
                outcomes.insert(asset.id.clone(), outcome);
            }

            info!(
                batch = index + 1,
                assets = batch.len(),
                "batch complete"
            );

            if batches.peek().is_some() {
                tokio::select! {
                    _ = token.cancelled() => {
                        complete = false;
                        break;
                    }
                    _ = sleep(self.config.batch_pause) => {}
                }
            }
        }

        if !complete {
            warn!(
                completed = outcomes.len(),
                total = assets.len(),
                "run cancelled, returning partial result"
            );
        }

        RunResult { outcomes, complete }
    }

    async fn process_asset(&self, asset: &AssetRef) -> AssetOutcome {
        let series = match self.resolver.resolve(asset).await {
            Ok(resolved) => resolved,
            Err(unresolved) => {
                warn!(symbol = %asset.symbol, error = %unresolved, "history unresolved");
                return AssetOutcome::failed(unresolved.to_string());
            }
        };

        let rsi = wilder_rsi(&series.series.closes(), self.config.rsi_period);
        match self.tracker.evaluate(&asset.id, rsi).await {
            Ok(crossed) => {
                if crossed {
                    info!(
                        symbol = %asset.symbol,
                        rsi = rsi.unwrap_or_default(),
                        provider = series.provider,
                        "bearish-to-bullish crossing"
                    );
                }
                AssetOutcome {
                    rsi,
                    crossed,
                    error: None,
                }
            }
            Err(e) => {
                warn!(symbol = %asset.symbol, error = %e, "state store error");
                AssetOutcome {
                    rsi,
                    crossed: false,
                    error: Some(format!("state store: {e}")),
                }
            }
        }
    }
}
