//! RSI (Relative Strength Index) with Wilder's smoothing
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss
//!
//! Averages are seeded from the first `period` deltas and then smoothed
//! with factor 1/period, one delta at a time. The recurrence is stateful
//! and order-dependent: reordering the input changes the result.

/// Weekly lookback used by the refresh worker.
pub const DEFAULT_RSI_PERIOD: usize = 30;

/// Compute Wilder's RSI over chronologically ascending closes.
///
/// Returns `None` when fewer than `period + 1` closes are available,
/// rather than a misleading value from a short window. A window with no
/// losses yields exactly 100.0, not a division fault.
pub fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() <= period {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let delta = closes[i] - closes[i - 1];
        if delta >= 0.0 {
            gains += delta;
        } else {
            losses -= delta;
        }
    }

    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;

    for i in (period + 1)..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
