//! Exchange pair-metadata wire models.

use serde::Deserialize;

/// Response of the exchange's metadata endpoint (the subset consumed
/// when building the tradable set).
#[derive(Debug, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<PairInfo>,
}

/// Reference data for a single trading pair.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    /// Concatenated pair symbol, e.g. `"BTCUSDT"`.
    pub symbol: String,
    pub base_asset: String,
    pub quote_asset: String,
}
