//! Gate.io spot weekly candlesticks (`/api/v4/spot/candlesticks`)

use std::time::Duration;

use async_trait::async_trait;

use super::{check_status, parse_price, ProviderAdapter, ProviderError};
use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

const DEFAULT_BASE_URL: &str = "https://api.gateio.ws";

pub struct GateAdapter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GateAdapter {
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

#[async_trait]
impl ProviderAdapter for GateAdapter {
    fn name(&self) -> &'static str {
        "gate"
    }

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let pair = format!("{}_USDT", asset.symbol.to_uppercase());
        let url = format!("{}/api/v4/spot/candlesticks", self.base_url);
        let limit = min_samples.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("currency_pair", pair.as_str()),
                ("interval", "1w"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        check_status(response.status(), &pair)?;
        let rows: Vec<Vec<String>> = response.json().await?;

        // Entries are [ts_seconds, quote_volume, close, high, low, open, ...];
        // close sits at index 2 in Gate's layout.
        let mut samples = Vec::with_capacity(rows.len());
        for row in &rows {
            if row.len() < 6 {
                return Err(ProviderError::MalformedPayload(format!(
                    "candlestick row has {} fields",
                    row.len()
                )));
            }
            let secs: i64 = row[0]
                .parse()
                .map_err(|_| ProviderError::MalformedPayload(format!("invalid timestamp: {}", row[0])))?;
            let timestamp = chrono::DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                ProviderError::MalformedPayload(format!("timestamp out of range: {secs}"))
            })?;
            samples.push(PriceSample::new(timestamp, parse_price(&row[2])?));
        }
        Ok(samples)
    }
}
