use serde::{Deserialize, Serialize};

/// Immutable identifier for one tradable asset.
///
/// Produced by the external ranking/filtering step; the core never
/// creates, dedupes, or re-filters assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Canonical identifier, used as the state-store key.
    pub id: String,
    /// Display/trading symbol, e.g. "BTC". Adapters derive pair codes from it.
    pub symbol: String,
}

impl AssetRef {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }

    /// Convenience constructor for universes keyed by symbol alone.
    pub fn from_symbol(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            id: symbol.to_lowercase(),
            symbol,
        }
    }
}
