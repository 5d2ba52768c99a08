//! CoinAPI weekly OHLCV history (`/v1/ohlcv/{symbol}/USD/history`)
//!
//! The only keyed adapter; registered in the chain only when a key is
//! configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{check_status, ProviderAdapter, ProviderError};
use crate::models::asset::AssetRef;
use crate::models::series::PriceSample;

const DEFAULT_BASE_URL: &str = "https://rest.coinapi.io";

pub struct CoinApiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl CoinApiAdapter {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(
            DEFAULT_BASE_URL.to_string(),
            reqwest::Client::new(),
            api_key,
            timeout,
        )
    }

    pub fn with_base_url(
        base_url: String,
        client: reqwest::Client,
        api_key: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OhlcvRow {
    time_period_start: DateTime<Utc>,
    price_close: f64,
}

#[async_trait]
impl ProviderAdapter for CoinApiAdapter {
    fn name(&self) -> &'static str {
        "coinapi"
    }

    async fn fetch_series(
        &self,
        asset: &AssetRef,
        min_samples: usize,
    ) -> Result<Vec<PriceSample>, ProviderError> {
        let market = format!("{}/USD", asset.symbol.to_uppercase());
        let url = format!("{}/v1/ohlcv/{}/history", self.base_url, market);
        let limit = min_samples.to_string();

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("X-CoinAPI-Key", &self.api_key)
            .query(&[("period_id", "1WEEK"), ("limit", limit.as_str())])
            .send()
            .await?;

        check_status(response.status(), &market)?;
        let rows: Vec<OhlcvRow> = response.json().await?;

        let mut samples = Vec::with_capacity(rows.len());
        for row in rows {
            if !row.price_close.is_finite() || row.price_close <= 0.0 {
                return Err(ProviderError::MalformedPayload(format!(
                    "non-positive close: {}",
                    row.price_close
                )));
            }
            samples.push(PriceSample::new(row.time_period_start, row.price_close));
        }
        Ok(samples)
    }
}
