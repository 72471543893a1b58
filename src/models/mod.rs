//! Typed wire models and normalized records for both providers.
//!
//! Each provider endpoint gets its own module: wire shapes are decoded
//! fallibly into these types, and normalization into the uniform
//! records ([`candle::Candle`], [`price::PricePoint`],
//! [`fundamentals::FundamentalsRecord`], [`catalog::CatalogEntry`])
//! happens here rather than in the fetch layer.

pub mod candle;
pub mod catalog;
pub mod fundamentals;
pub mod instrument;
pub mod price;
pub mod ticker;

pub use candle::Candle;
pub use catalog::CatalogEntry;
pub use fundamentals::FundamentalsRecord;
pub use price::PricePoint;
