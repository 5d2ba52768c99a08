//! Momentrix - weekly RSI momentum tracker
//!
//! Resolves weekly close-price history for a universe of crypto assets
//! through a prioritized chain of exchange adapters, computes Wilder's
//! RSI, and flags assets whose RSI crossed from the bearish zone (<=50)
//! into the bullish zone (>50) since the previous run.

pub mod config;
pub mod core;
pub mod history;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod providers;
pub mod state;
