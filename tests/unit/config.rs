//! Unit tests for refresh configuration defaults

use std::time::Duration;

use momentrix::config::RefreshConfig;
use momentrix::indicators::momentum::DEFAULT_RSI_PERIOD;

#[test]
fn test_default_config_matches_documented_values() {
    let config = RefreshConfig::default();
    assert_eq!(config.rsi_period, DEFAULT_RSI_PERIOD);
    assert_eq!(config.margin_weeks, 20);
    assert_eq!(config.batch_size, 10);
    assert_eq!(config.batch_pause, Duration::from_millis(1000));
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}
