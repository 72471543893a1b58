use tracing::info;

use vantage::agent::{self, ToolRequest};
use vantage::config::fetch_config;
use vantage::exchange::KlineInterval;
use vantage::indicators::{self, RSI_PERIOD, SMA_PERIOD};
use vantage::{MarketService, VantageError};

#[tokio::main]
async fn main() -> Result<(), VantageError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let config = fetch_config()?;
    let service = MarketService::new(&config)?;

    let price = service.get_price("BTCUSDT").await?;
    info!(%price, "BTCUSDT spot price");

    let reference = service.get_aggregator_price("bitcoin").await?;
    info!(%reference, "bitcoin aggregator quote");

    let candles = service
        .get_candles("BTCUSDT", KlineInterval::OneHour, 50)
        .await?;
    if let Some(value) = indicators::rsi(&candles, RSI_PERIOD).last().copied().flatten() {
        info!(rsi = %value.round_dp(2), "hourly RSI");
    }
    if let Some(mean) = indicators::simple_moving_average(&candles, SMA_PERIOD)
        .last()
        .copied()
        .flatten()
    {
        info!(sma = %mean.round_dp(2), "hourly moving average");
    }
    if let Some(levels) = indicators::support_resistance(&candles) {
        info!(support = %levels.support, resistance = %levels.resistance, "hourly levels");
    }

    let reply = agent::dispatch(
        &service,
        ToolRequest::FetchFundamentals {
            coin_id: "bitcoin".to_string(),
        },
    )
    .await;
    info!(reply = %serde_json::to_string(&reply)?, "fundamentals tool reply");

    let catalog = service.get_tradable_catalog().await?;
    for entry in catalog.iter().take(5) {
        info!(symbol = %entry.symbol, market_cap = %entry.market_cap, "top of catalog");
    }

    Ok(())
}
