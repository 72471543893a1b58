//! Exchange REST client: spot price, klines, and tradable pairs.
//!
//! Thin fetch layer over the exchange's public endpoints. URL building
//! and status checking happen here; normalization of kline rows lives
//! in [`crate::models::candle`].

use std::collections::HashSet;
use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::config::ExchangeConfig;
use crate::error::{Result, VantageError};
use crate::http::{decode, get_json};
use crate::models::instrument::ExchangeInfo;
use crate::models::ticker::TickerPrice;

/// Provider-imposed maximum number of klines per request.
pub const MAX_KLINE_LIMIT: u16 = 1000;

/// Quote asset defining the tradable-pairs universe.
const QUOTE_ASSET: &str = "USDT";

/// Candle intervals accepted by the klines endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KlineInterval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    FourHours,
    OneDay,
    OneWeek,
}

impl KlineInterval {
    /// Returns the wire-format interval name expected by the exchange.
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::OneMinute => "1m",
            KlineInterval::FiveMinutes => "5m",
            KlineInterval::FifteenMinutes => "15m",
            KlineInterval::OneHour => "1h",
            KlineInterval::FourHours => "4h",
            KlineInterval::OneDay => "1d",
            KlineInterval::OneWeek => "1w",
        }
    }
}

impl std::str::FromStr for KlineInterval {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1m" => Ok(KlineInterval::OneMinute),
            "5m" => Ok(KlineInterval::FiveMinutes),
            "15m" => Ok(KlineInterval::FifteenMinutes),
            "1h" => Ok(KlineInterval::OneHour),
            "4h" => Ok(KlineInterval::FourHours),
            "1d" => Ok(KlineInterval::OneDay),
            "1w" => Ok(KlineInterval::OneWeek),
            other => Err(VantageError::Parse(format!(
                "unknown kline interval {other:?}"
            ))),
        }
    }
}

/// Client for the exchange's public REST API.
pub struct ExchangeClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExchangeClient {
    /// Builds a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Http`] if the underlying client cannot
    /// be constructed.
    pub fn new(config: &ExchangeConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ExchangeClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the latest spot price for a trading pair (e.g. `BTCUSDT`).
    ///
    /// The pair symbol is uppercased before the request.
    pub async fn fetch_price(&self, pair_symbol: &str) -> Result<Decimal> {
        let url = format!("{}/ticker/price", self.base_url);
        let pair = pair_symbol.to_uppercase();
        let value = get_json(&self.http, &url, &[("symbol", pair.as_str())]).await?;
        let ticker: TickerPrice = decode(value, "ticker price")?;
        debug!(symbol = %ticker.symbol, price = %ticker.price, "fetched spot price");
        Ok(ticker.price)
    }

    /// Fetches raw kline rows for a trading pair, ascending by open
    /// time, most recent last.
    ///
    /// `limit` is clamped to [`MAX_KLINE_LIMIT`]. Rows are returned in
    /// provider-native array form; see
    /// [`Candle::from_kline_rows`](crate::models::Candle::from_kline_rows).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::EmptyResult`] when the provider answers
    /// with zero rows.
    pub async fn fetch_klines(
        &self,
        pair_symbol: &str,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<Value>> {
        let url = format!("{}/klines", self.base_url);
        let pair = pair_symbol.to_uppercase();
        let limit = limit.min(MAX_KLINE_LIMIT).to_string();
        let query = [
            ("symbol", pair.as_str()),
            ("interval", interval.as_str()),
            ("limit", limit.as_str()),
        ];
        let value = get_json(&self.http, &url, &query).await?;
        let rows: Vec<Value> = decode(value, "klines")?;
        if rows.is_empty() {
            return Err(VantageError::EmptyResult(format!(
                "no {} klines for {pair}",
                interval.as_str()
            )));
        }
        debug!(symbol = %pair, rows = rows.len(), "fetched klines");
        Ok(rows)
    }

    /// Fetches the set of base assets tradable against [`QUOTE_ASSET`],
    /// de-duplicated and uppercase.
    pub async fn fetch_tradable_pairs(&self) -> Result<HashSet<String>> {
        let url = format!("{}/exchangeInfo", self.base_url);
        let value = get_json(&self.http, &url, &[]).await?;
        let info: ExchangeInfo = decode(value, "exchange info")?;
        let bases: HashSet<String> = info
            .symbols
            .into_iter()
            .filter(|pair| pair.quote_asset == QUOTE_ASSET)
            .map(|pair| pair.base_asset.to_uppercase())
            .collect();
        debug!(count = bases.len(), "fetched tradable base assets");
        Ok(bases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_wire_names_round_trip() {
        for interval in [
            KlineInterval::OneMinute,
            KlineInterval::FiveMinutes,
            KlineInterval::FifteenMinutes,
            KlineInterval::OneHour,
            KlineInterval::FourHours,
            KlineInterval::OneDay,
            KlineInterval::OneWeek,
        ] {
            assert_eq!(interval.as_str().parse::<KlineInterval>().unwrap(), interval);
        }
    }

    #[test]
    fn unknown_interval_is_a_parse_error() {
        let err = "3h".parse::<KlineInterval>().unwrap_err();
        assert!(matches!(err, VantageError::Parse(_)));
    }
}
