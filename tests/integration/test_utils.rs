//! Shared wiremock helpers for the exchange adapter tests
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Week-start timestamps in milliseconds, oldest first, one per ISO week.
/// 2020-01-06 is a Monday.
pub fn week_starts_ms(weeks: usize) -> Vec<i64> {
    const WEEK_MS: i64 = 7 * 24 * 3600 * 1000;
    let start = 1_578_268_800_000; // 2020-01-06T00:00:00Z
    (0..weeks as i64).map(|i| start + i * WEEK_MS).collect()
}

/// Mount a Bybit weekly kline response for `pair` with rising closes.
pub async fn mock_bybit_klines(server: &MockServer, pair: &str, weeks: usize) {
    // Bybit returns newest-first rows of strings.
    let list: Vec<Vec<String>> = week_starts_ms(weeks)
        .into_iter()
        .enumerate()
        .rev()
        .map(|(i, ts)| {
            let close = 100.0 + i as f64;
            vec![
                ts.to_string(),
                close.to_string(),
                (close + 2.0).to_string(),
                (close - 2.0).to_string(),
                close.to_string(),
                "1000".to_string(),
            ]
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/v5/market/kline"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": { "list": list }
        })))
        .mount(server)
        .await;
}

pub async fn mock_bybit_rejected(server: &MockServer, pair: &str) {
    Mock::given(method("GET"))
        .and(path("/v5/market/kline"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 10001,
            "retMsg": "Not supported symbols",
            "result": { "list": [] }
        })))
        .mount(server)
        .await;
}

pub async fn mock_bitget_candles(server: &MockServer, pair: &str, weeks: usize) {
    let data: Vec<Vec<String>> = week_starts_ms(weeks)
        .into_iter()
        .enumerate()
        .map(|(i, ts)| {
            let close = 100.0 + i as f64;
            vec![
                ts.to_string(),
                close.to_string(),
                (close + 2.0).to_string(),
                (close - 2.0).to_string(),
                close.to_string(),
                "1000".to_string(),
                "100000".to_string(),
                "100000".to_string(),
            ]
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v2/spot/market/history-candles"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "00000",
            "msg": "success",
            "data": data
        })))
        .mount(server)
        .await;
}

/// Gate rows are [ts_seconds, quote_volume, close, high, low, open, ...].
pub async fn mock_gate_candlesticks(server: &MockServer, pair: &str, weeks: usize) {
    let rows: Vec<Vec<String>> = week_starts_ms(weeks)
        .into_iter()
        .enumerate()
        .map(|(i, ts)| {
            let close = 100.0 + i as f64;
            vec![
                (ts / 1000).to_string(),
                "100000".to_string(),
                close.to_string(),
                (close + 2.0).to_string(),
                (close - 2.0).to_string(),
                (close - 1.0).to_string(),
                "1000".to_string(),
                "true".to_string(),
            ]
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v4/spot/candlesticks"))
        .and(query_param("currency_pair", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

pub async fn mock_binance_klines(server: &MockServer, pair: &str, weeks: usize) {
    // Binance rows mix numbers and strings: [openTime, "o", "h", "l", "c", ...].
    let rows: Vec<Vec<serde_json::Value>> = week_starts_ms(weeks)
        .into_iter()
        .enumerate()
        .map(|(i, ts)| {
            let close = 100.0 + i as f64;
            vec![
                json!(ts),
                json!(close.to_string()),
                json!((close + 2.0).to_string()),
                json!((close - 2.0).to_string()),
                json!(close.to_string()),
                json!("1000"),
            ]
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

pub async fn mock_binance_unlisted(server: &MockServer, pair: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .and(query_param("symbol", pair))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": -1121,
            "msg": "Invalid symbol."
        })))
        .mount(server)
        .await;
}

pub async fn mock_coinapi_ohlcv(server: &MockServer, symbol: &str, weeks: usize) {
    let rows: Vec<serde_json::Value> = week_starts_ms(weeks)
        .into_iter()
        .enumerate()
        .map(|(i, ts)| {
            let start = chrono::DateTime::from_timestamp_millis(ts).unwrap();
            json!({
                "time_period_start": start.to_rfc3339(),
                "time_period_end": (start + chrono::Duration::weeks(1)).to_rfc3339(),
                "price_open": 100.0 + i as f64,
                "price_close": 100.0 + i as f64,
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/v1/ohlcv/{symbol}/USD/history")))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}
