//! Binance spot weekly klines (`/api/v3/klines`)
//!
//! Binance lists most assets against more than one stable quote, so this
//! adapter tries a short ordered list of quote suffixes and keeps the
//! last failure for diagnostics when none of them resolves.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{check_status, parse_price, timestamp_from_millis, ProviderAdapter, ProviderError};
use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const QUOTE_ASSETS: [&str; 2] = ["USDT", "USDC"];

pub struct BinanceAdapter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BinanceAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), reqwest::Client::new(), timeout)
    }

    pub fn with_base_url(base_url: String, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    async fn fetch_pair(
        &self,
        pair: &str,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit = min_samples.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("symbol", pair),
                ("interval", "1w"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        check_status(response.status(), pair)?;
        let rows: Vec<Vec<Value>> = response.json().await?;

        // Entries are [openTime(ms), "open", "high", "low", "close", ...].
        let mut samples = Vec::with_capacity(rows.len());
        for row in &rows {
            if row.len() < 5 {
                return Err(ProviderError::MalformedPayload(format!(
                    "kline row has {} fields",
                    row.len()
                )));
            }
            let millis = row[0].as_i64().ok_or_else(|| {
                ProviderError::MalformedPayload(format!("invalid open time: {}", row[0]))
            })?;
            let close = row[4].as_str().ok_or_else(|| {
                ProviderError::MalformedPayload(format!("invalid close: {}", row[4]))
            })?;
            samples.push(PriceSample::new(
                timestamp_from_millis(millis)?,
                parse_price(close)?,
            ));
        }
        Ok(samples)
    }
}

#[async_trait]
impl ProviderAdapter for BinanceAdapter {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let symbol = asset.symbol.to_uppercase();
        let mut last_error =
            ProviderError::SymbolNotListed(format!("{symbol} (no quote asset tried)"));

        for quote in QUOTE_ASSETS {
            let pair = format!("{symbol}{quote}");
            match self.fetch_pair(&pair, min_samples).await {
                Ok(samples) if !samples.is_empty() => return Ok(samples),
                Ok(_) => {
                    last_error = ProviderError::MalformedPayload(format!("empty klines for {pair}"));
                }
                Err(e) => {
                    debug!(pair = %pair, error = %e, "binance pair attempt failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
