//! Tradable coin catalog: markets-page wire model and the merge of the
//! two providers' identifier spaces.
//!
//! The exchange addresses coins by trading-pair ticker, the aggregator
//! by a lowercase slug. [`build_catalog`] intersects the two so every
//! entry can be queried against either provider.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Deserialize;

/// One coin summary from the aggregator's markets endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSummary {
    /// Provider-native slug, e.g. `"bitcoin"`.
    pub id: String,
    /// Lowercase ticker on the wire.
    pub symbol: String,
    pub name: String,
    /// Null upstream for coins without a computed cap.
    pub market_cap: Option<Decimal>,
}

/// One row of the merged catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Uppercase ticker symbol, tradable on the exchange.
    pub symbol: String,
    /// Aggregator slug for fundamentals and price-history lookups.
    pub provider_id: String,
    pub name: String,
    pub market_cap: Decimal,
}

/// Merges the exchange's tradable-symbol set with one aggregator
/// markets page.
///
/// Only tickers present in BOTH sources are kept. When two summaries
/// claim the same ticker, the higher market cap wins; equal caps keep
/// the earlier (better-ranked) entry. A missing upstream cap counts as
/// zero. The result is sorted by descending market cap, ties broken by
/// ascending symbol, so one build always yields the same order.
pub fn build_catalog(
    tradable: &HashSet<String>,
    summaries: Vec<MarketSummary>,
) -> Vec<CatalogEntry> {
    let mut by_symbol: HashMap<String, CatalogEntry> = HashMap::new();
    for summary in summaries {
        let symbol = summary.symbol.to_uppercase();
        let candidate = CatalogEntry {
            symbol: symbol.clone(),
            provider_id: summary.id,
            name: summary.name,
            market_cap: summary.market_cap.unwrap_or_default(),
        };
        match by_symbol.entry(symbol) {
            Entry::Occupied(mut slot) => {
                if candidate.market_cap > slot.get().market_cap {
                    slot.insert(candidate);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
        }
    }

    let mut catalog: Vec<CatalogEntry> = by_symbol
        .into_values()
        .filter(|entry| tradable.contains(&entry.symbol))
        .collect();
    catalog.sort_by(|a, b| {
        b.market_cap
            .cmp(&a.market_cap)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    catalog
}
