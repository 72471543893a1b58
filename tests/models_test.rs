//! Decode and normalization tests for provider wire models, driven by
//! fixture payloads captured from the public endpoints.

use rust_decimal_macros::dec;
use serde_json::Value;

use vantage::indicators;
use vantage::models::candle::Candle;
use vantage::models::catalog::MarketSummary;
use vantage::models::fundamentals::{CoinDetail, FundamentalsRecord};
use vantage::models::instrument::ExchangeInfo;
use vantage::models::price::MarketChartResponse;
use vantage::models::ticker::{SimplePriceResponse, TickerPrice};

const KLINES_JSON: &str = include_str!("fixtures/klines.json");
const EXCHANGE_INFO_JSON: &str = include_str!("fixtures/exchange_info.json");
const COIN_DETAIL_JSON: &str = include_str!("fixtures/coin_detail.json");
const MARKETS_JSON: &str = include_str!("fixtures/markets.json");
const SIMPLE_PRICE_JSON: &str = include_str!("fixtures/simple_price.json");
const MARKET_CHART_JSON: &str = include_str!("fixtures/market_chart.json");

fn fixture_candles() -> Vec<Candle> {
    let rows: Vec<Value> = serde_json::from_str(KLINES_JSON).expect("Failed to parse klines JSON");
    Candle::from_kline_rows(&rows).expect("Failed to normalize kline rows")
}

#[test]
fn test_ticker_price_deserializes() {
    let json = r#"{"symbol": "BTCUSDT", "price": "64023.12000000"}"#;
    let ticker: TickerPrice = serde_json::from_str(json).expect("Failed to deserialize ticker");

    assert_eq!(ticker.symbol, "BTCUSDT");
    assert_eq!(ticker.price, dec!(64023.12000000));
}

#[test]
fn test_kline_rows_normalize_field_by_field() {
    let candles = fixture_candles();
    assert_eq!(candles.len(), 3);

    let first = &candles[0];
    assert_eq!(first.open_time.timestamp_millis(), 1_700_000_000_000);
    assert_eq!(first.open, dec!(10.00));
    assert_eq!(first.high, dec!(12.50));
    assert_eq!(first.low, dec!(9.80));
    assert_eq!(first.close, dec!(10.00));
    assert_eq!(first.volume, dec!(1500.25));
    assert_eq!(first.close_time.timestamp_millis(), 1_700_003_599_999);
    assert_eq!(first.quote_volume, dec!(15002.50));
    assert_eq!(first.trade_count, 320);
    assert_eq!(first.taker_buy_base, dec!(750.10));
    assert_eq!(first.taker_buy_quote, dec!(7501.00));
}

#[test]
fn test_kline_rows_keep_ascending_order() {
    let candles = fixture_candles();
    assert!(candles.windows(2).all(|w| w[0].open_time < w[1].open_time));

    let closes: Vec<_> = candles.iter().map(|c| c.close).collect();
    assert_eq!(closes, vec![dec!(10.00), dec!(12.00), dec!(11.00)]);
}

#[test]
fn test_normalized_fixture_yields_golden_rsi() {
    // Closes [10, 12, 11] with period 2: avg gain 1, avg loss 0.5,
    // RS = 2, RSI = 100 - 100/3.
    let candles = fixture_candles();
    let out = indicators::rsi(&candles, 2);

    assert_eq!(out.len(), 3);
    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert_eq!(out[2].unwrap().round_dp(2), dec!(66.67));
}

#[test]
fn test_exchange_info_deserializes() {
    let info: ExchangeInfo =
        serde_json::from_str(EXCHANGE_INFO_JSON).expect("Failed to deserialize exchange info");

    assert_eq!(info.symbols.len(), 3);
    assert_eq!(info.symbols[0].symbol, "BTCUSDT");
    assert_eq!(info.symbols[0].base_asset, "BTC");
    assert_eq!(info.symbols[0].quote_asset, "USDT");
    assert_eq!(info.symbols[2].quote_asset, "BTC");
}

#[test]
fn test_coin_detail_normalizes_to_fundamentals() {
    let detail: CoinDetail =
        serde_json::from_str(COIN_DETAIL_JSON).expect("Failed to deserialize coin detail");
    let record = FundamentalsRecord::from_detail(detail, 250);

    assert_eq!(record.name, "Bitcoin");
    assert_eq!(record.symbol, "BTC");
    assert_eq!(record.market_cap, dec!(820140532109));
    assert_eq!(record.circulating_supply, dec!(19600000));
    assert_eq!(record.total_supply, Some(dec!(21000000)));
    assert_eq!(record.rank, 1);
    assert!(record.description.starts_with("Bitcoin is the first"));
    assert!(record.description.ends_with("..."));
    assert!(record.description.chars().count() <= 253);
}

#[test]
fn test_markets_page_deserializes_with_null_cap() {
    let summaries: Vec<MarketSummary> =
        serde_json::from_str(MARKETS_JSON).expect("Failed to deserialize markets page");

    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[0].id, "bitcoin");
    assert_eq!(summaries[0].symbol, "btc");
    assert_eq!(summaries[0].name, "Bitcoin");
    assert_eq!(summaries[0].market_cap, Some(dec!(820140532109)));
    assert_eq!(summaries[3].id, "test-shadow-coin");
    assert_eq!(summaries[3].market_cap, None);
}

#[test]
fn test_simple_price_deserializes() {
    let prices: SimplePriceResponse =
        serde_json::from_str(SIMPLE_PRICE_JSON).expect("Failed to deserialize simple price");

    assert_eq!(prices["bitcoin"].usd, dec!(64023.12));
}

#[test]
fn test_market_chart_normalizes_to_price_points() {
    let chart: MarketChartResponse =
        serde_json::from_str(MARKET_CHART_JSON).expect("Failed to deserialize market chart");
    let points = chart.into_points().expect("Failed to normalize price points");

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].timestamp.timestamp_millis(), 1_699_920_000_000);
    assert_eq!(points[0].price, dec!(63100.55));
    assert_eq!(points[2].price, dec!(64023.12));
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}
