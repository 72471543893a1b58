//! Spot price-point model and market-chart normalization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{Result, VantageError};

/// A single point of an aggregator price history, ascending by
/// timestamp with no duplicates within one response.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    /// Price in USD.
    pub price: Decimal,
}

/// Wire shape of the aggregator's market-chart endpoint.
///
/// Each entry of `prices` is an `[epoch_ms, price]` pair.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, Decimal)>,
}

impl MarketChartResponse {
    /// Maps the raw `[epoch_ms, price]` pairs 1:1 into [`PricePoint`]s.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Parse`] if a timestamp is outside the
    /// representable instant range.
    pub fn into_points(self) -> Result<Vec<PricePoint>> {
        self.prices
            .into_iter()
            .map(|(ms, price)| {
                let timestamp = DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                    VantageError::Parse(format!("market chart timestamp out of range: {ms}"))
                })?;
                Ok(PricePoint { timestamp, price })
            })
            .collect()
    }
}
