//! Consumer facade over both provider clients.
//!
//! [`MarketService`] is the surface the agent and UI layers call:
//! stateless between calls, no caching, no retries. Errors bubble to
//! the caller, which owns presentation and backoff policy.

use rust_decimal::Decimal;

use crate::aggregator::AggregatorClient;
use crate::config::AppConfig;
use crate::error::Result;
use crate::exchange::{ExchangeClient, KlineInterval};
use crate::models::catalog::{CatalogEntry, build_catalog};
use crate::models::{Candle, FundamentalsRecord, PricePoint};

/// Character budget for fundamentals descriptions served to UIs.
pub const DESCRIPTION_BUDGET: usize = 250;

/// Aggregated market-data access for one exchange and one aggregator.
pub struct MarketService {
    exchange: ExchangeClient,
    aggregator: AggregatorClient,
    catalog_page_size: u32,
}

impl MarketService {
    /// Builds both provider clients from the loaded configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(MarketService {
            exchange: ExchangeClient::new(&config.exchange, config.http.timeout)?,
            aggregator: AggregatorClient::new(&config.aggregator, config.http.timeout)?,
            catalog_page_size: config.aggregator.catalog_page_size,
        })
    }

    /// Latest exchange spot price for a trading pair (e.g. `BTCUSDT`).
    pub async fn get_price(&self, pair_symbol: &str) -> Result<Decimal> {
        self.exchange.fetch_price(pair_symbol).await
    }

    /// Latest aggregator USD quote for a coin slug (e.g. `bitcoin`).
    pub async fn get_aggregator_price(&self, coin_id: &str) -> Result<Decimal> {
        self.aggregator.fetch_price(coin_id).await
    }

    /// Normalized candles for a trading pair, ascending, most recent
    /// last, at most `limit` rows.
    pub async fn get_candles(
        &self,
        pair_symbol: &str,
        interval: KlineInterval,
        limit: u16,
    ) -> Result<Vec<Candle>> {
        let rows = self.exchange.fetch_klines(pair_symbol, interval, limit).await?;
        Candle::from_kline_rows(&rows)
    }

    /// Daily USD price history for a coin slug, ascending.
    pub async fn get_price_history(&self, coin_id: &str, days: u32) -> Result<Vec<PricePoint>> {
        self.aggregator.fetch_market_chart(coin_id, days).await
    }

    /// Fundamentals for a coin slug with the default description
    /// budget ([`DESCRIPTION_BUDGET`] characters).
    pub async fn get_fundamentals(&self, coin_id: &str) -> Result<FundamentalsRecord> {
        self.fundamentals_with_budget(coin_id, DESCRIPTION_BUDGET).await
    }

    /// Fundamentals with an explicit description character budget.
    pub async fn fundamentals_with_budget(
        &self,
        coin_id: &str,
        budget: usize,
    ) -> Result<FundamentalsRecord> {
        let detail = self.aggregator.fetch_coin_detail(coin_id).await?;
        Ok(FundamentalsRecord::from_detail(detail, budget))
    }

    /// Merged catalog of coins tradable on the exchange and listed by
    /// the aggregator, sorted by descending market cap.
    ///
    /// Depth is bounded by the configured markets page size; only the
    /// first page is fetched.
    pub async fn get_tradable_catalog(&self) -> Result<Vec<CatalogEntry>> {
        let tradable = self.exchange.fetch_tradable_pairs().await?;
        let summaries = self
            .aggregator
            .fetch_markets_page(1, self.catalog_page_size)
            .await?;
        Ok(build_catalog(&tradable, summaries))
    }
}
