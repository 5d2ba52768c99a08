use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw (timestamp, price) observation from a provider.
///
/// Providers may deliver these in either time direction; chronological
/// ordering is enforced by the weekly aggregator, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PriceSample {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// ISO-8601 calendar week (Monday-start, UTC).
///
/// Ordering is (iso year, week number), so weeks spanning a year boundary
/// sort under the ISO year they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

/// Closing price of one calendar week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyClose {
    pub week: WeekKey,
    pub close: f64,
}

/// Chronologically ascending weekly closes with no duplicate week keys.
///
/// Weeks with no samples are simply absent; callers checking minimum
/// length must tolerate gaps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeeklySeries {
    entries: Vec<WeeklyClose>,
}

impl WeeklySeries {
    /// `entries` must already be ascending by week key, one per key.
    /// The weekly aggregator is the only producer.
    pub(crate) fn new(entries: Vec<WeeklyClose>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WeeklyClose] {
        &self.entries
    }

    /// Close prices in ascending week order, as consumed by the indicator.
    pub fn closes(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.close).collect()
    }
}
