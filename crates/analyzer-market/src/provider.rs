//! Market data provider trait definition

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A provider's current-price snapshot for a symbol
///
/// Every field except the symbol is optional: providers differ in what
/// metadata they expose, and an absent price triggers the historical
/// fallback in the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Symbol the snapshot was requested for
    pub symbol: String,
    /// Direct current price, if the provider exposes one
    pub price: Option<f64>,
    /// Long company name, if known
    pub company_name: Option<String>,
    /// ISO currency code, if known
    pub currency: Option<String>,
}

/// Trait for market data providers
///
/// Implementations issue read-only network calls; no caching or retries
/// happen at this layer. The fetcher injects a provider at construction
/// time so tests can substitute a fake with canned data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get the current quote snapshot for a symbol
    async fn get_quote(&self, symbol: &str) -> Result<QuoteSnapshot>;

    /// Get the most recent trading-period close prices for a symbol
    ///
    /// Ordered oldest to newest; may be empty when the provider has no
    /// history for the symbol.
    async fn get_recent_closes(&self, symbol: &str) -> Result<Vec<f64>>;

    /// Get the provider name (e.g., "yahoo")
    fn name(&self) -> &str;
}
