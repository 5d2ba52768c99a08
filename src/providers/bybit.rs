//! Bybit spot weekly klines (`/v5/market/kline`)

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{check_status, parse_price, timestamp_from_millis, ProviderAdapter, ProviderError};
use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

const DEFAULT_BASE_URL: &str = "https://api.bybit.com";

pub struct BybitAdapter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl BybitAdapter {
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
struct KlineResponse {
    #[serde(rename = "retCode")]
    ret_code: i64,
    #[serde(rename = "retMsg", default)]
    ret_msg: String,
    #[serde(default)]
    result: Option<KlineResult>,
}

#[derive(Debug, Deserialize)]
struct KlineResult {
    #[serde(default)]
    list: Vec<Vec<String>>,
}

#[async_trait]
impl ProviderAdapter for BybitAdapter {
    fn name(&self) -> &'static str {
        "bybit"
    }

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let pair = format!("{}USDT", asset.symbol.to_uppercase());
        let url = format!("{}/v5/market/kline", self.base_url);
        let limit = min_samples.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("category", "spot"),
                ("symbol", pair.as_str()),
                ("interval", "W"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        check_status(response.status(), &pair)?;
        let body: KlineResponse = response.json().await?;

        // Bybit reports unlisted pairs through retCode, not the HTTP status.
        if body.ret_code != 0 {
            debug!(pair = %pair, code = body.ret_code, msg = %body.ret_msg, "bybit rejected kline request");
            return Err(ProviderError::Rejected(format!(
                "retCode {}: {}",
                body.ret_code, body.ret_msg
            )));
        }

        let list = body
            .result
            .map(|r| r.list)
            .ok_or_else(|| ProviderError::MalformedPayload("missing result.list".to_string()))?;

        // Entries are [startTime, open, high, low, close, ...], newest first.
        let mut samples = Vec::with_capacity(list.len());
        for row in &list {
            if row.len() < 5 {
                return Err(ProviderError::MalformedPayload(format!(
                    "kline row has {} fields",
                    row.len()
                )));
            }
            let millis: i64 = row[0]
                .parse()
                .map_err(|_| ProviderError::MalformedPayload(format!("invalid start time: {}", row[0])))?;
            samples.push(PriceSample::new(
                timestamp_from_millis(millis)?,
                parse_price(&row[4])?,
            ));
        }
        Ok(samples)
    }
}
