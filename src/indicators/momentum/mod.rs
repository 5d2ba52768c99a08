pub mod rsi;

pub use rsi::{wilder_rsi, DEFAULT_RSI_PERIOD};
