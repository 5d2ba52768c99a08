pub mod asset;
pub mod series;
pub mod state;
