//! Yahoo Finance provider implementation

use crate::error::{MarketError, Result};
use crate::provider::{MarketDataProvider, QuoteSnapshot};
use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::debug;
use yahoo_finance_api as yahoo;

/// How far back the historical-close fallback looks
const RECENT_HISTORY_DAYS: i64 = 5;

/// Yahoo Finance market data client
///
/// Requires no API key. The Rust Yahoo client exposes no company-name
/// metadata, so snapshots carry `None` there and the fetcher falls back
/// to the ticker text.
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    fn connector(symbol: &str) -> Result<yahoo::YahooConnector> {
        yahoo::YahooConnector::new().map_err(|e| classify(symbol, &e))
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn get_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        let provider = Self::connector(symbol)?;

        let response = provider
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| classify(symbol, &e))?;

        // An empty quote set is not an error here; the fetcher falls back
        // to historical closes when no direct price is available.
        let price = match response.last_quote() {
            Ok(quote) => Some(quote.close),
            Err(e) => {
                debug!(symbol, error = %e, "no direct quote available");
                None
            },
        };

        Ok(QuoteSnapshot {
            symbol: symbol.to_string(),
            price,
            company_name: None,
            currency: None,
        })
    }

    async fn get_recent_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        let provider = Self::connector(symbol)?;

        let end = OffsetDateTime::now_utc();
        let start = end - time::Duration::days(RECENT_HISTORY_DAYS);

        let response = provider
            .get_quote_history(symbol, start, end)
            .await
            .map_err(|e| classify(symbol, &e))?;

        let closes = match response.quotes() {
            Ok(quotes) => quotes.iter().map(|q| q.close).collect(),
            // No quotes in range reads as empty history, not a failure
            Err(e) => {
                debug!(symbol, error = %e, "no historical quotes available");
                Vec::new()
            },
        };

        Ok(closes)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a Yahoo client error to the provider error taxonomy
///
/// The Yahoo client wraps its HTTP layer, so timeouts are only visible
/// in the error text.
fn classify(symbol: &str, err: &yahoo::YahooError) -> MarketError {
    let text = err.to_string();
    if text.to_lowercase().contains("timed out") || text.to_lowercase().contains("timeout") {
        MarketError::Timeout(symbol.to_string())
    } else {
        MarketError::Api {
            symbol: symbol.to_string(),
            reason: text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_quote() {
        let client = YahooFinanceClient::new();
        let snapshot = client.get_quote("AAPL").await.expect("quote");

        assert_eq!(snapshot.symbol, "AAPL");
        assert!(snapshot.price.is_some_and(|p| p > 0.0));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_recent_closes() {
        let client = YahooFinanceClient::new();
        let closes = client.get_recent_closes("AAPL").await.expect("history");

        assert!(!closes.is_empty());
        assert!(closes.iter().all(|c| *c > 0.0));
    }
}
