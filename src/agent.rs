//! Agent-facing tool layer.
//!
//! Exposes the market-data surface as tagged JSON tool calls so a
//! language-model orchestrator can drive it over any JSON channel
//! (stdin/stdout pipes, HTTP, a queue). Replies are plain text shaped
//! for direct inclusion in a model context; provider errors are
//! rendered into [`ToolResponse::Error`] rather than propagated.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VantageError};
use crate::exchange::KlineInterval;
use crate::indicators;
use crate::service::MarketService;

/// Character budget for fundamentals descriptions in agent replies.
pub const TOOL_DESCRIPTION_BUDGET: usize = 500;

/// Candle window behind the `fetch_technical` tool.
const TECHNICAL_INTERVAL: KlineInterval = KlineInterval::OneHour;
const TECHNICAL_LIMIT: u16 = 50;

/// Catalog rows shown by `list_catalog` when no limit is given.
const CATALOG_PREVIEW: usize = 10;

/// A tool invocation from the agent orchestrator.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolRequest {
    /// Real-time exchange price for a trading pair like `BTCUSDT`.
    FetchPrice { symbol: String },
    /// Fundamental data for an aggregator coin slug like `bitcoin`.
    FetchFundamentals { coin_id: String },
    /// RSI and support/resistance over recent hourly candles.
    FetchTechnical { symbol: String },
    /// Top tradable coins by market cap.
    ListCatalog {
        #[serde(default)]
        limit: Option<usize>,
    },
}

/// Reply sent back to the agent orchestrator.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolResponse {
    Result { text: String },
    Error { message: String },
}

/// Executes a tool request against the market service.
pub async fn dispatch(service: &MarketService, request: ToolRequest) -> ToolResponse {
    let outcome = match request {
        ToolRequest::FetchPrice { symbol } => fetch_price(service, &symbol).await,
        ToolRequest::FetchFundamentals { coin_id } => fetch_fundamentals(service, &coin_id).await,
        ToolRequest::FetchTechnical { symbol } => fetch_technical(service, &symbol).await,
        ToolRequest::ListCatalog { limit } => list_catalog(service, limit).await,
    };
    match outcome {
        Ok(text) => ToolResponse::Result { text },
        Err(e) => ToolResponse::Error {
            message: e.to_string(),
        },
    }
}

async fn fetch_price(service: &MarketService, symbol: &str) -> Result<String> {
    let price = service.get_price(symbol).await?;
    Ok(price.to_string())
}

async fn fetch_fundamentals(service: &MarketService, coin_id: &str) -> Result<String> {
    let record = service
        .fundamentals_with_budget(coin_id, TOOL_DESCRIPTION_BUDGET)
        .await?;
    Ok(serde_json::to_string_pretty(&record)?)
}

async fn fetch_technical(service: &MarketService, symbol: &str) -> Result<String> {
    let candles = service
        .get_candles(symbol, TECHNICAL_INTERVAL, TECHNICAL_LIMIT)
        .await?;

    let latest_rsi = indicators::rsi(&candles, indicators::RSI_PERIOD)
        .last()
        .copied()
        .flatten()
        .ok_or_else(|| {
            VantageError::EmptyResult(format!("not enough candles to compute RSI for {symbol}"))
        })?;
    let levels = indicators::support_resistance(&candles).ok_or_else(|| {
        VantageError::EmptyResult(format!("not enough candles to compute levels for {symbol}"))
    })?;

    Ok(format!(
        "RSI: {}, Support: {}, Resistance: {}",
        latest_rsi.round_dp(2),
        levels.support,
        levels.resistance
    ))
}

async fn list_catalog(service: &MarketService, limit: Option<usize>) -> Result<String> {
    let catalog = service.get_tradable_catalog().await?;
    let lines: Vec<String> = catalog
        .iter()
        .take(limit.unwrap_or(CATALOG_PREVIEW))
        .map(|entry| {
            format!(
                "{} ({}): market cap {}",
                entry.symbol, entry.name, entry.market_cap
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_fetch_price_request() {
        let request: ToolRequest =
            serde_json::from_str(r#"{"type": "fetch_price", "symbol": "BTCUSDT"}"#).unwrap();
        assert!(matches!(request, ToolRequest::FetchPrice { symbol } if symbol == "BTCUSDT"));
    }

    #[test]
    fn deserializes_list_catalog_without_limit() {
        let request: ToolRequest = serde_json::from_str(r#"{"type": "list_catalog"}"#).unwrap();
        assert!(matches!(request, ToolRequest::ListCatalog { limit: None }));
    }

    #[test]
    fn rejects_unknown_tool() {
        let result = serde_json::from_str::<ToolRequest>(r#"{"type": "place_order"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_result_response_with_tag() {
        let response = ToolResponse::Result {
            text: "RSI: 55.10, Support: 100.00, Resistance: 120.00".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "result");
        assert!(value["text"].as_str().unwrap().starts_with("RSI:"));
    }

    #[test]
    fn serializes_error_response_with_tag() {
        let response = ToolResponse::Error {
            message: "empty result: no price history for dogecoin".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "error");
    }
}
