//! Application configuration loaded from environment variables.
//!
//! Both upstream providers are public REST APIs, so no credentials are
//! involved. The following variables are recognized, all optional:
//! - `VANTAGE_EXCHANGE_URL` — exchange REST base URL
//! - `VANTAGE_AGGREGATOR_URL` — aggregator REST base URL
//! - `VANTAGE_HTTP_TIMEOUT_SECS` — per-request timeout in seconds
//! - `VANTAGE_CATALOG_PAGE_SIZE` — coins requested per markets page

use std::time::Duration;

/// Default exchange REST base URL.
const DEFAULT_EXCHANGE_URL: &str = "https://api.binance.com/api/v3";

/// Default aggregator REST base URL.
const DEFAULT_AGGREGATOR_URL: &str = "https://api.coingecko.com/api/v3";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default (and provider-maximum) markets page size.
const DEFAULT_CATALOG_PAGE_SIZE: u32 = 250;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub exchange: ExchangeConfig,
    pub aggregator: AggregatorConfig,
    pub http: HttpConfig,
}

/// Exchange-specific configuration values.
#[derive(Debug)]
pub struct ExchangeConfig {
    pub base_url: String,
}

/// Aggregator-specific configuration values.
#[derive(Debug)]
pub struct AggregatorConfig {
    pub base_url: String,
    /// Coins requested from the markets endpoint when building the
    /// catalog. Only the first page is ever fetched, so this bounds
    /// catalog depth (1..=250).
    pub catalog_page_size: u32,
}

/// HTTP client configuration shared by both providers.
#[derive(Debug)]
pub struct HttpConfig {
    pub timeout: Duration,
}

/// Loads the application configuration from environment variables.
///
/// Base URLs default to the public Binance and CoinGecko endpoints.
/// The request timeout defaults to 10 seconds and is always applied to
/// the HTTP client rather than relying on transport defaults.
///
/// # Errors
///
/// Returns [`VantageError::Config`](crate::VantageError::Config) if a
/// numeric variable is set but does not parse, or is out of range.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let exchange_url =
        non_empty_var("VANTAGE_EXCHANGE_URL").unwrap_or_else(|| DEFAULT_EXCHANGE_URL.to_string());
    let aggregator_url = non_empty_var("VANTAGE_AGGREGATOR_URL")
        .unwrap_or_else(|| DEFAULT_AGGREGATOR_URL.to_string());

    let timeout_secs = match non_empty_var("VANTAGE_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw.parse::<u64>().ok().filter(|&t| t > 0).ok_or_else(|| {
            crate::VantageError::Config(format!(
                "VANTAGE_HTTP_TIMEOUT_SECS must be a positive integer, got {raw:?}"
            ))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let catalog_page_size = match non_empty_var("VANTAGE_CATALOG_PAGE_SIZE") {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|&n| (1..=DEFAULT_CATALOG_PAGE_SIZE).contains(&n))
            .ok_or_else(|| {
                crate::VantageError::Config(format!(
                    "VANTAGE_CATALOG_PAGE_SIZE must be in 1..={DEFAULT_CATALOG_PAGE_SIZE}, got {raw:?}"
                ))
            })?,
        None => DEFAULT_CATALOG_PAGE_SIZE,
    };

    Ok(AppConfig {
        exchange: ExchangeConfig {
            base_url: exchange_url,
        },
        aggregator: AggregatorConfig {
            base_url: aggregator_url,
            catalog_page_size,
        },
        http: HttpConfig {
            timeout: Duration::from_secs(timeout_secs),
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
