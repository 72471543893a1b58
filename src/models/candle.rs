//! OHLC candlestick model and kline-row normalization.
//!
//! The exchange's klines endpoint returns each candle as a fixed-order
//! heterogeneous JSON array (timestamps as integer epoch-milliseconds,
//! every other numeric field as a decimal string). [`Candle::from_kline_row`]
//! maps that wire shape into a fully typed record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{Result, VantageError};

/// Number of fields in a provider-native kline row.
///
/// Open time, OHLC, volume, close time, quote volume, trade count,
/// taker-buy base/quote, plus one unused trailing field.
pub const KLINE_FIELDS: usize = 12;

/// A single OHLCV candlestick bar, most recent last in any sequence
/// returned by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Start timestamp of this candle's time window.
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    /// Volume in the base asset.
    pub volume: Decimal,
    /// End timestamp of this candle's time window.
    pub close_time: DateTime<Utc>,
    /// Volume in the quote asset.
    pub quote_volume: Decimal,
    pub trade_count: u64,
    /// Base-asset volume from taker buy orders.
    pub taker_buy_base: Decimal,
    /// Quote-asset volume from taker buy orders.
    pub taker_buy_quote: Decimal,
}

impl Candle {
    /// Normalizes one provider-native kline row.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Parse`] if the row is not an array of at
    /// least [`KLINE_FIELDS`] elements or any field has the wrong type.
    pub fn from_kline_row(row: &Value) -> Result<Self> {
        let fields = row
            .as_array()
            .ok_or_else(|| VantageError::Parse(format!("kline row is not an array: {row}")))?;
        if fields.len() < KLINE_FIELDS {
            return Err(VantageError::Parse(format!(
                "kline row has {} fields, expected {KLINE_FIELDS}",
                fields.len()
            )));
        }

        Ok(Candle {
            open_time: instant_field(&fields[0], "open_time")?,
            open: decimal_field(&fields[1], "open")?,
            high: decimal_field(&fields[2], "high")?,
            low: decimal_field(&fields[3], "low")?,
            close: decimal_field(&fields[4], "close")?,
            volume: decimal_field(&fields[5], "volume")?,
            close_time: instant_field(&fields[6], "close_time")?,
            quote_volume: decimal_field(&fields[7], "quote_volume")?,
            trade_count: fields[8].as_u64().ok_or_else(|| {
                VantageError::Parse(format!("kline trade_count is not an integer: {}", fields[8]))
            })?,
            taker_buy_base: decimal_field(&fields[9], "taker_buy_base")?,
            taker_buy_quote: decimal_field(&fields[10], "taker_buy_quote")?,
        })
    }

    /// Normalizes a whole klines response, preserving provider order
    /// (ascending by open time).
    pub fn from_kline_rows(rows: &[Value]) -> Result<Vec<Self>> {
        rows.iter().map(Self::from_kline_row).collect()
    }
}

/// Parses a numeric field that arrives either as a decimal string or a
/// bare JSON number.
fn decimal_field(value: &Value, name: &str) -> Result<Decimal> {
    let parsed = match value {
        Value::String(s) => s.parse::<Decimal>().ok(),
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| VantageError::Parse(format!("kline {name} is not numeric: {value}")))
}

/// Converts an integer epoch-milliseconds field to an instant.
fn instant_field(value: &Value, name: &str) -> Result<DateTime<Utc>> {
    value
        .as_i64()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(|| {
            VantageError::Parse(format!("kline {name} is not an epoch-ms timestamp: {value}"))
        })
}
