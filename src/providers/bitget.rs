//! Bitget spot weekly candles (`/api/v2/spot/market/history-candles`)

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{check_status, parse_price, timestamp_from_millis, ProviderAdapter, ProviderError};
use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

const DEFAULT_BASE_URL: &str = "https://api.bitget.com";

pub struct BitgetAdapter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BitgetAdapter {
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
}

#[derive(Debug, Deserialize)]
struct CandlesResponse {
    code: String,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Vec<Vec<String>>,
}

#[async_trait]
impl ProviderAdapter for BitgetAdapter {
    fn name(&self) -> &'static str {
        "bitget"
    }

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let pair = format!("{}USDT", asset.symbol.to_uppercase());
        let url = format!("{}/api/v2/spot/market/history-candles", self.base_url);
        let limit = min_samples.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("symbol", pair.as_str()),
                ("granularity", "1week"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        check_status(response.status(), &pair)?;
        let body: CandlesResponse = response.json().await?;

        // "00000" is Bitget's success code; anything else is an API-level reject.
        if body.code != "00000" {
            debug!(pair = %pair, code = %body.code, msg = %body.msg, "bitget rejected candle request");
            return Err(ProviderError::Rejected(format!("code {}: {}", body.code, body.msg)));
        }

        // Entries are [ts, open, high, low, close, baseVol, usdtVol, quoteVol].
        let mut samples = Vec::with_capacity(body.data.len());
        for row in &body.data {
            if row.len() < 5 {
                return Err(ProviderError::MalformedPayload(format!(
                    "candle row has {} fields",
                    row.len()
                )));
            }
            let millis: i64 = row[0]
                .parse()
                .map_err(|_| ProviderError::MalformedPayload(format!("invalid timestamp: {}", row[0])))?;
            samples.push(PriceSample::new(
                timestamp_from_millis(millis)?,
                parse_price(&row[4])?,
            ));
        }
        Ok(samples)
    }
}
