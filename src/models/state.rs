use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted per-asset record of the last successfully computed RSI.
///
/// Written at most once per run, and only after a successful computation;
/// a failed or unavailable run leaves the previous record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetState {
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

/// Per-asset outcome of one refresh run.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetOutcome {
    /// Latest RSI, or `None` when history was unresolved or too short.
    pub rsi: Option<f64>,
    /// True iff the previous persisted value was <= 50 and the new one > 50.
    pub crossed: bool,
    /// Diagnostic for a failed resolution or state-store error.
    pub error: Option<String>,
}

impl AssetOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            rsi: None,
            crossed: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregated result of one scheduler run, keyed by asset id.
///
/// Always best-effort partial: a cancelled run returns the outcomes of the
/// batches that finished, with `complete` set to false.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub outcomes: HashMap<String, AssetOutcome>,
    pub complete: bool,
}

impl RunResult {
    pub fn crossed_assets(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .outcomes
            .iter()
            .filter(|(_, o)| o.crossed)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn evaluated_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.rsi.is_some()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.error.is_some()).count()
    }
}
