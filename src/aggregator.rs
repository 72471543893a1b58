//! Aggregator REST client: simple price, price history, coin detail,
//! and the markets listing.
//!
//! The aggregator addresses coins by lowercase slug id (e.g.
//! `"bitcoin"`), not by exchange ticker; [`crate::models::catalog`]
//! bridges the two identifier spaces.

use std::time::Duration;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::AggregatorConfig;
use crate::error::{Result, VantageError};
use crate::http::{decode, get_json};
use crate::models::catalog::MarketSummary;
use crate::models::fundamentals::CoinDetail;
use crate::models::price::{MarketChartResponse, PricePoint};
use crate::models::ticker::SimplePriceResponse;

/// Client for the aggregator's public REST API.
pub struct AggregatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl AggregatorClient {
    /// Builds a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Http`] if the underlying client cannot
    /// be constructed.
    pub fn new(config: &AggregatorConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AggregatorClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the current USD price for a coin slug.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Parse`] if the response does not contain
    /// the requested id (the aggregator answers `{}` for unknown ids).
    pub async fn fetch_price(&self, coin_id: &str) -> Result<Decimal> {
        let url = format!("{}/simple/price", self.base_url);
        let query = [("ids", coin_id), ("vs_currencies", "usd")];
        let value = get_json(&self.http, &url, &query).await?;
        let mut prices: SimplePriceResponse = decode(value, "simple price")?;
        let quote = prices
            .remove(coin_id)
            .ok_or_else(|| VantageError::Parse(format!("no price for coin id {coin_id:?}")))?;
        debug!(id = coin_id, price = %quote.usd, "fetched aggregator price");
        Ok(quote.usd)
    }

    /// Fetches `days` of daily USD price history, ascending by
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::EmptyResult`] when the provider answers
    /// with zero points.
    pub async fn fetch_market_chart(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>> {
        let url = format!("{}/coins/{coin_id}/market_chart", self.base_url);
        let days = days.to_string();
        let query = [
            ("vs_currency", "usd"),
            ("days", days.as_str()),
            ("interval", "daily"),
        ];
        let value = get_json(&self.http, &url, &query).await?;
        let chart: MarketChartResponse = decode(value, "market chart")?;
        let points = chart.into_points()?;
        if points.is_empty() {
            return Err(VantageError::EmptyResult(format!(
                "no price history for {coin_id}"
            )));
        }
        debug!(id = coin_id, points = points.len(), "fetched price history");
        Ok(points)
    }

    /// Fetches the full coin-detail object for a slug.
    pub async fn fetch_coin_detail(&self, coin_id: &str) -> Result<CoinDetail> {
        let url = format!("{}/coins/{coin_id}", self.base_url);
        let value = get_json(&self.http, &url, &[]).await?;
        decode(value, "coin detail")
    }

    /// Fetches one page of coin summaries ordered by descending market
    /// cap.
    pub async fn fetch_markets_page(&self, page: u32, per_page: u32) -> Result<Vec<MarketSummary>> {
        let url = format!("{}/coins/markets", self.base_url);
        let page = page.to_string();
        let per_page = per_page.to_string();
        let query = [
            ("vs_currency", "usd"),
            ("order", "market_cap_desc"),
            ("per_page", per_page.as_str()),
            ("page", page.as_str()),
        ];
        let value = get_json(&self.http, &url, &query).await?;
        let summaries: Vec<MarketSummary> = decode(value, "markets page")?;
        debug!(count = summaries.len(), "fetched markets page");
        Ok(summaries)
    }
}
