//! Unit tests for crossing detection and state lifecycle

use std::sync::Arc;

use chrono::Utc;
use momentrix::models::state::AssetState;
use momentrix::state::{MemoryStateStore, StateStore, StateTracker};

async fn tracker_with_prior(asset_id: &str, value: f64) -> (StateTracker, Arc<MemoryStateStore>) {
    let store = Arc::new(MemoryStateStore::new());
    store
        .put(
            asset_id,
            &AssetState {
                value,
                updated_at: Utc::now(),
            },
        )
        .await
        .expect("memory put");
    (StateTracker::new(store.clone()), store)
}

#[tokio::test]
async fn test_crossing_from_bearish_to_bullish() {
    let (tracker, _) = tracker_with_prior("btc", 45.0).await;
    assert!(tracker.evaluate("btc", Some(60.0)).await.unwrap());
}

#[tokio::test]
async fn test_no_crossing_when_already_bullish() {
    let (tracker, _) = tracker_with_prior("btc", 55.0).await;
    assert!(!tracker.evaluate("btc", Some(60.0)).await.unwrap());
}

#[tokio::test]
async fn test_exactly_50_counts_as_bearish() {
    // 50 is non-bullish on both sides: a prior of exactly 50 can cross,
    // but a new value of exactly 50 cannot.
    let (tracker, _) = tracker_with_prior("btc", 50.0).await;
    assert!(tracker.evaluate("btc", Some(50.1)).await.unwrap());

    let (tracker, _) = tracker_with_prior("eth", 45.0).await;
    assert!(!tracker.evaluate("eth", Some(50.0)).await.unwrap());
}

#[tokio::test]
async fn test_absent_prior_never_crosses() {
    let store = Arc::new(MemoryStateStore::new());
    let tracker = StateTracker::new(store.clone());

    assert!(!tracker.evaluate("new-asset", Some(60.0)).await.unwrap());

    // First run still persists the value for the next run.
    let state = store.get("new-asset").await.unwrap().expect("state written");
    assert_eq!(state.value, 60.0);
}

#[tokio::test]
async fn test_unavailable_value_preserves_prior_state() {
    let (tracker, store) = tracker_with_prior("btc", 45.0).await;
    let before = store.get("btc").await.unwrap().expect("prior state");

    assert!(!tracker.evaluate("btc", None).await.unwrap());

    let after = store.get("btc").await.unwrap().expect("state kept");
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_successful_evaluation_overwrites_state() {
    let (tracker, store) = tracker_with_prior("btc", 45.0).await;
    tracker.evaluate("btc", Some(62.5)).await.unwrap();

    let state = store.get("btc").await.unwrap().expect("state written");
    assert_eq!(state.value, 62.5);
}
