//! Spot-price endpoint wire models for both providers.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Response of the exchange's ticker-price endpoint.
#[derive(Debug, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    /// The price arrives as a decimal string on the wire.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Response of the aggregator's simple-price endpoint: coin id mapped
/// to per-currency quotes.
pub type SimplePriceResponse = HashMap<String, UsdQuote>;

/// A quote restricted to the USD currency this crate requests.
#[derive(Debug, Deserialize)]
pub struct UsdQuote {
    pub usd: Decimal,
}
