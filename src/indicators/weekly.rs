//! Reduction of raw price samples to one close per ISO calendar week
//!
//! Providers disagree on sample direction (some return newest-first), so
//! the aggregator sorts before bucketing instead of trusting input order.
//! Week boundaries follow ISO-8601: Monday-start weeks, evaluated in UTC,
//! independent of the machine's wall-clock timezone.

use chrono::Datelike;

use crate::models::series::{PriceSample, WeekKey, WeeklyClose, WeeklySeries};

/// Collapse raw samples into ascending weekly closes.
///
/// For samples sharing a week, the chronologically last one is kept as
/// that week's close. Weeks without samples are absent from the output;
/// nothing is forward-filled or interpolated.
pub fn aggregate_weekly(samples: &[PriceSample]) -> WeeklySeries {
    let mut ordered: Vec<&PriceSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.timestamp);

    let mut closes = std::collections::BTreeMap::new();
    for sample in ordered {
        let iso = sample.timestamp.iso_week();
        let key = WeekKey {
            year: iso.year(),
            week: iso.week(),
        };
        closes.insert(key, sample.price);
    }

    WeeklySeries::new(
        closes
            .into_iter()
            .map(|(week, close)| WeeklyClose { week, close })
            .collect(),
    )
}
