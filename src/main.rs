//! Momentrix Refresh Worker
//!
//! Runs one refresh over the configured asset universe and exits, so an
//! external timer (cron, systemd) decides the cadence. Ctrl-C cancels the
//! run cooperatively; completed batches are still reported.

use std::sync::Arc;

use dotenvy::dotenv;
use momentrix::config::{self, RefreshConfig};
use momentrix::core::scheduler::BatchScheduler;
use momentrix::history::HistoryResolver;
use momentrix::logging;
use momentrix::models::asset::AssetRef;
use momentrix::models::state::RunResult;
use momentrix::providers::{
    BinanceAdapter, BitgetAdapter, BybitAdapter, CoinApiAdapter, GateAdapter, ProviderAdapter,
};
use momentrix::state::{MemoryStateStore, RedisStateStore, StateStore, StateTracker};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!("Starting Momentrix Refresh Worker");
    info!(environment = %env, "Environment");

    let refresh = RefreshConfig::from_env();

    let symbols = config::get_symbols();
    if symbols.is_empty() {
        return Err("SYMBOLS must list at least one asset symbol".into());
    }
    let assets: Vec<AssetRef> = symbols.iter().map(AssetRef::from_symbol).collect();
    info!(
        asset_count = assets.len(),
        batch_size = refresh.batch_size,
        period = refresh.rsi_period,
        "Universe loaded"
    );

    // Provider priority order, most permissive rate limits first.
    let timeout = refresh.request_timeout;
    let mut adapters: Vec<Arc<dyn ProviderAdapter>> = vec![
        Arc::new(BybitAdapter::new(timeout)),
        Arc::new(BitgetAdapter::new(timeout)),
        Arc::new(GateAdapter::new(timeout)),
    ];
    if let Some(key) = config::get_coinapi_key() {
        adapters.push(Arc::new(CoinApiAdapter::new(key, timeout)));
    } else {
        info!("COINAPI_KEY not set, skipping CoinAPI adapter");
    }
    adapters.push(Arc::new(BinanceAdapter::new(timeout)));

    info!("Initializing Redis connection...");
    let store: Arc<dyn StateStore> = match RedisStateStore::new().await {
        Ok(store) => {
            info!("Redis connected");
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to Redis");
            warn!("Falling back to in-memory state - crossings reset every invocation");
            Arc::new(MemoryStateStore::new())
        }
    };

    let resolver = Arc::new(HistoryResolver::new(
        adapters,
        refresh.rsi_period,
        refresh.margin_weeks,
    ));
    let tracker = Arc::new(StateTracker::new(store));
    let scheduler = Arc::new(BatchScheduler::new(resolver, tracker, refresh));

    let run_scheduler = scheduler.clone();
    let mut run = tokio::spawn(async move { run_scheduler.run(&assets).await });

    tokio::select! {
        result = &mut run => {
            report(&result?);
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown requested, cancelling refresh...");
            scheduler.cancel().await;
            report(&run.await?);
        }
    }

    Ok(())
}

fn report(result: &RunResult) {
    for asset_id in result.crossed_assets() {
        info!(asset = %asset_id, "crossed into bullish zone this run");
    }
    info!(
        assets = result.outcomes.len(),
        evaluated = result.evaluated_count(),
        failed = result.failed_count(),
        crossings = result.crossed_assets().len(),
        complete = result.complete,
        "Refresh finished"
    );
}
