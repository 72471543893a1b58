//! Coin fundamentals: typed coin-detail decode and the normalized
//! record handed to consumers.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Wire shape of the aggregator's coin-detail endpoint (the subset of
/// fields this crate consumes).
#[derive(Debug, Deserialize)]
pub struct CoinDetail {
    pub name: String,
    /// Lowercase ticker on the wire; uppercased during normalization.
    pub symbol: String,
    pub market_cap_rank: u32,
    pub description: LocalizedText,
    pub market_data: MarketData,
}

/// Localized description texts; only English is consumed.
#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub en: String,
}

/// Market statistics nested inside the coin-detail response.
#[derive(Debug, Deserialize)]
pub struct MarketData {
    pub market_cap: CurrencyValue,
    pub circulating_supply: Decimal,
    /// Absent or null for coins without a fixed supply.
    pub total_supply: Option<Decimal>,
}

/// A per-currency quote; only the USD value is consumed.
#[derive(Debug, Deserialize)]
pub struct CurrencyValue {
    pub usd: Decimal,
}

/// Normalized fundamentals record for a single coin.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FundamentalsRecord {
    pub name: String,
    /// Uppercase ticker symbol.
    pub symbol: String,
    pub market_cap: Decimal,
    pub circulating_supply: Decimal,
    pub total_supply: Option<Decimal>,
    /// Market-cap rank, 1 = largest.
    pub rank: u32,
    /// English description cut to the caller's character budget, always
    /// ending in `"..."`.
    pub description: String,
}

impl FundamentalsRecord {
    /// Builds the normalized record from a decoded coin detail.
    ///
    /// `description_budget` is a character (not byte) budget. The
    /// ellipsis suffix is appended whether or not the text was actually
    /// cut, matching the upstream-facing contract of this crate.
    pub fn from_detail(detail: CoinDetail, description_budget: usize) -> Self {
        FundamentalsRecord {
            name: detail.name,
            symbol: detail.symbol.to_uppercase(),
            market_cap: detail.market_data.market_cap.usd,
            circulating_supply: detail.market_data.circulating_supply,
            total_supply: detail.market_data.total_supply,
            rank: detail.market_cap_rank,
            description: truncate_description(&detail.description.en, description_budget),
        }
    }
}

/// Cuts `text` to at most `budget` characters and appends `"..."`.
fn truncate_description(text: &str, budget: usize) -> String {
    let mut cut: String = text.chars().take(budget).collect();
    cut.push_str("...");
    cut
}
