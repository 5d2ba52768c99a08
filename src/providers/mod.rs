//! Upstream market-data adapters
//!
//! Each adapter wraps exactly one exchange HTTP endpoint and maps the
//! asset's display symbol to that exchange's pair code. Expected upstream
//! conditions (unlisted symbol, rate limit, malformed payload, timeout)
//! surface as `ProviderError` values; nothing here escalates, the history
//! resolver simply tries the next adapter in its priority list.

pub mod binance;
pub mod bitget;
pub mod bybit;
pub mod coinapi;
pub mod gate;

pub use binance::BinanceAdapter;
pub use bitget::BitgetAdapter;
pub use bybit::BybitAdapter;
pub use coinapi::CoinApiAdapter;
pub use gate::GateAdapter;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

/// Expected per-call failure of one upstream source.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("symbol not listed: {0}")]
    SymbolNotListed(String),
    #[error("rate limited by upstream")]
    RateLimited,
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream rejected request: {0}")]
    Rejected(String),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// One upstream market-data source.
///
/// `fetch_series` issues a small bounded number of requests, applies its
/// own request timeout, and returns raw (timestamp, price) samples in
/// whatever order the exchange uses; the weekly aggregator normalizes.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError>;
}

/// Shared HTTP status mapping for the exchange adapters.
pub(crate) fn check_status(status: StatusCode, pair: &str) -> Result<(), ProviderError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited);
    }
    if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
        return Err(ProviderError::SymbolNotListed(pair.to_string()));
    }
    if !status.is_success() {
        return Err(ProviderError::Status(status.as_u16()));
    }
    Ok(())
}

/// Parse a millisecond epoch into a UTC timestamp.
pub(crate) fn timestamp_from_millis(millis: i64) -> Result<chrono::DateTime<chrono::Utc>, ProviderError> {
    chrono::DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ProviderError::MalformedPayload(format!("timestamp out of range: {millis}")))
}

/// Reject non-finite or non-positive prices at the boundary.
pub(crate) fn parse_price(raw: &str) -> Result<f64, ProviderError> {
    let price: f64 = raw
        .parse()
        .map_err(|_| ProviderError::MalformedPayload(format!("invalid price: {raw}")))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(ProviderError::MalformedPayload(format!(
            "non-positive price: {raw}"
        )));
    }
    Ok(price)
}
