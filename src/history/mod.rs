//! History resolution across the provider priority list
//!
//! Fallback is about data availability only: the first adapter whose raw
//! samples aggregate into a structurally usable weekly series wins, and
//! later adapters are never consulted for that asset.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::indicators::weekly::aggregate_weekly;
use crate::models::asset::AssetRef;
use crate::models::series::WeeklySeries;
use crate::providers::{ProviderAdapter, ProviderError};

/// A usable weekly series plus the adapter that supplied it.
#[derive(Debug)]
pub struct ResolvedSeries {
    pub series: WeeklySeries,
    pub provider: &'static str,
}

/// Why the last attempted adapter did not yield a usable series.
#[derive(Debug, Error)]
pub enum FailureReason {
    #[error("{provider}: {error}")]
    Provider {
        provider: &'static str,
        #[source]
        error: ProviderError,
    },
    #[error("{provider}: only {weeks} weekly closes (need {required})")]
    TooShort {
        provider: &'static str,
        weeks: usize,
        required: usize,
    },
}

/// All adapters exhausted for one asset.
///
/// An expected, common outcome for newly listed or illiquid assets, not
/// an error escalation; the run records it per asset and moves on.
#[derive(Debug, Error)]
#[error("history unresolved for {symbol} (last attempt: {last_failure})")]
pub struct Unresolved {
    pub symbol: String,
    pub last_failure: FailureReason,
}

pub struct HistoryResolver {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    period: usize,
    margin_weeks: usize,
}

impl HistoryResolver {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, period: usize, margin_weeks: usize) -> Self {
        Self {
            adapters,
            period,
            margin_weeks,
        }
    }

    /// Weekly closes required before a series counts as usable.
    fn required_weeks(&self) -> usize {
        self.period + 1
    }

    /// Try adapters in priority order; accept the first whose aggregated
    /// weekly series is long enough for the indicator window.
    pub async fn resolve(&self, asset: &AssetRef) -> Result<ResolvedSeries, Unresolved> {
        let min_samples = self.period + self.margin_weeks;
        let mut last_failure = FailureReason::TooShort {
            provider: "none",
            weeks: 0,
            required: self.required_weeks(),
        };

        for adapter in &self.adapters {
            match adapter.fetch_series(asset, min_samples).await {
                Ok(samples) => {
                    let series = aggregate_weekly(&samples);
                    if series.len() >= self.required_weeks() {
                        debug!(
                            symbol = %asset.symbol,
                            provider = adapter.name(),
                            weeks = series.len(),
                            "resolved weekly history"
                        );
                        return Ok(ResolvedSeries {
                            series,
                            provider: adapter.name(),
                        });
                    }
                    debug!(
                        symbol = %asset.symbol,
                        provider = adapter.name(),
                        weeks = series.len(),
                        required = self.required_weeks(),
                        "weekly history too short, trying next provider"
                    );
                    last_failure = FailureReason::TooShort {
                        provider: adapter.name(),
                        weeks: series.len(),
                        required: self.required_weeks(),
                    };
                }
                Err(error) => {
                    debug!(
                        symbol = %asset.symbol,
                        provider = adapter.name(),
                        error = %error,
                        "provider failed, trying next"
                    );
                    last_failure = FailureReason::Provider {
                        provider: adapter.name(),
                        error,
                    };
                }
            }
        }

        Err(Unresolved {
            symbol: asset.symbol.clone(),
            last_failure,
        })
    }
}
