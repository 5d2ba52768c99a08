//! Unit tests for the weekly close aggregator

use chrono::{TimeZone, Utc};
use momentrix::indicators::weekly::aggregate_weekly;
use momentrix::models::series::PriceSample;

fn sample(y: i32, m: u32, d: u32, h: u32, price: f64) -> PriceSample {
    PriceSample::new(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(), price)
}

#[test]
fn test_empty_input() {
    assert!(aggregate_weekly(&[]).is_empty());
}

#[test]
fn test_last_sample_in_week_is_the_close() {
    // Wednesday and Friday of the same ISO week: Friday wins.
    let samples = vec![
        sample(2024, 3, 6, 12, 100.0),
        sample(2024, 3, 8, 18, 104.0),
    ];
    let series = aggregate_weekly(&samples);
    assert_eq!(series.len(), 1);
    assert_eq!(series.closes(), vec![104.0]);
}

#[test]
fn test_unsorted_input_is_sorted_first() {
    // Same two samples delivered newest-first: the chronologically last
    // one must still win.
    let samples = vec![
        sample(2024, 3, 8, 18, 104.0),
        sample(2024, 3, 6, 12, 100.0),
    ];
    let series = aggregate_weekly(&samples);
    assert_eq!(series.closes(), vec![104.0]);
}

#[test]
fn test_permutations_yield_identical_series() {
    let a = sample(2024, 1, 2, 0, 10.0);
    let b = sample(2024, 1, 9, 0, 11.0);
    let c = sample(2024, 1, 16, 0, 12.0);
    let d = sample(2024, 1, 17, 0, 12.5);

    let sorted = aggregate_weekly(&[a, b, c, d]);
    let shuffled = aggregate_weekly(&[d, a, c, b]);
    assert_eq!(sorted, shuffled);
    assert_eq!(sorted.closes(), vec![10.0, 11.0, 12.5]);
}

#[test]
fn test_iso_week_boundary_is_monday_utc() {
    // Sunday 2023-01-01 belongs to ISO week 52 of 2022; Monday 2023-01-02
    // opens week 1 of 2023. They must land in different buckets, ordered
    // by ISO year.
    let sunday = sample(2023, 1, 1, 12, 95.0);
    let monday = sample(2023, 1, 2, 0, 97.0);

    let series = aggregate_weekly(&[monday, sunday]);
    assert_eq!(series.len(), 2);

    let entries = series.entries();
    assert_eq!((entries[0].week.year, entries[0].week.week), (2022, 52));
    assert_eq!((entries[1].week.year, entries[1].week.week), (2023, 1));
    assert_eq!(series.closes(), vec![95.0, 97.0]);
}

#[test]
fn test_missing_weeks_are_not_filled() {
    // Weeks 1, 2 and 5 of 2024; weeks 3 and 4 have no samples and must
    // simply be absent, not interpolated.
    let samples = vec![
        sample(2024, 1, 3, 0, 50.0),
        sample(2024, 1, 10, 0, 51.0),
        sample(2024, 1, 31, 0, 55.0),
    ];
    let series = aggregate_weekly(&samples);
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![50.0, 51.0, 55.0]);
}
