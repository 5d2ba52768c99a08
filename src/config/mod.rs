//! Environment-based configuration
//!
//! All tunables come from environment variables (loaded from `.env` by the
//! binary) with conservative defaults sized for public exchange rate limits.

use std::env;
use std::time::Duration;

use crate::indicators::momentum::DEFAULT_RSI_PERIOD;

/// Deployment environment name ("production", "sandbox", ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_redis_url() -> String {
    env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// CoinAPI key; the CoinAPI adapter is only registered when this is set.
pub fn get_coinapi_key() -> Option<String> {
    env::var("COINAPI_KEY").ok().filter(|k| !k.trim().is_empty())
}

/// Comma-separated asset symbols supplied by the external ranking step.
pub fn get_symbols() -> Vec<String> {
    env::var("SYMBOLS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

const DEFAULT_MARGIN_WEEKS: usize = 20;
const DEFAULT_BATCH_SIZE: usize = 10;
const DEFAULT_BATCH_PAUSE_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Tunables for one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// RSI lookback period, in weeks.
    pub rsi_period: usize,
    /// Extra weeks requested on top of the period to tolerate gaps.
    pub margin_weeks: usize,
    /// Assets resolved concurrently per batch.
    pub batch_size: usize,
    /// Pause between batches, sized for the most restrictive provider.
    pub batch_pause: Duration,
    /// Per-request timeout applied by every adapter.
    pub request_timeout: Duration,
}

impl RefreshConfig {
    pub fn from_env() -> Self {
        Self {
            rsi_period: env_parse("RSI_PERIOD", DEFAULT_RSI_PERIOD),
            margin_weeks: env_parse("MARGIN_WEEKS", DEFAULT_MARGIN_WEEKS),
            batch_size: env_parse("BATCH_SIZE", DEFAULT_BATCH_SIZE),
            batch_pause: Duration::from_millis(env_parse("BATCH_PAUSE_MS", DEFAULT_BATCH_PAUSE_MS)),
            request_timeout: Duration::from_secs(env_parse(
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            margin_weeks: DEFAULT_MARGIN_WEEKS,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_pause: Duration::from_millis(DEFAULT_BATCH_PAUSE_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
        }
    }
}
