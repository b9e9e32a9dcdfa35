//! Price fetching with two-tier retrieval

use analyzer_core::{AnalyzerError, PriceRecord, Result, Ticker};
use analyzer_market::{MarketDataProvider, MarketError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fetches the current price for a validated ticker
///
/// Retrieval is two-tier: the provider's direct quote price when present,
/// otherwise the most recent historical close. Issues one or two
/// read-only provider calls per fetch; no caching, no retries.
pub struct PriceFetcher {
    provider: Arc<dyn MarketDataProvider>,
}

impl PriceFetcher {
    /// Create a fetcher over the given market data provider
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the current price record for a ticker
    #[instrument(skip(self), fields(ticker = %ticker))]
    pub async fn fetch(&self, ticker: &Ticker) -> Result<PriceRecord> {
        // Malformed tickers are rejected before any network call
        if !ticker.is_valid() {
            return Err(AnalyzerError::StockNotFound(format!(
                "invalid ticker format: {ticker}"
            )));
        }

        info!("fetching stock price");

        let snapshot = self
            .provider
            .get_quote(ticker.as_str())
            .await
            .map_err(|e| classify(ticker, &e))?;

        let price = match snapshot.price {
            Some(price) => price,
            None => {
                // No direct price; fall back to the latest historical close
                let closes = self
                    .provider
                    .get_recent_closes(ticker.as_str())
                    .await
                    .map_err(|e| classify(ticker, &e))?;

                match closes.last() {
                    Some(close) => *close,
                    None => {
                        return Err(AnalyzerError::StockNotFound(format!(
                            "stock not found: {ticker}"
                        )));
                    },
                }
            },
        };

        let record = PriceRecord::new(
            ticker.clone(),
            snapshot.company_name,
            price,
            snapshot.currency,
        );

        info!(price = record.price, currency = %record.currency, "fetched stock price");
        Ok(record)
    }
}

/// Classify a provider failure into the analyzer taxonomy
fn classify(ticker: &Ticker, err: &MarketError) -> AnalyzerError {
    match err {
        MarketError::Timeout(_) => {
            AnalyzerError::RateLimited(format!("request timeout for {ticker}"))
        },
        MarketError::Api { .. } => AnalyzerError::StockNotFound(format!(
            "failed to fetch stock data for {ticker}: {err}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_market::QuoteSnapshot;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned market data provider for fetcher tests
    struct FakeProvider {
        quote_price: Option<f64>,
        closes: Vec<f64>,
        fail_with_timeout: bool,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn with_quote(price: f64) -> Self {
            Self {
                quote_price: Some(price),
                closes: Vec::new(),
                fail_with_timeout: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_history_only(closes: Vec<f64>) -> Self {
            Self {
                quote_price: None,
                closes,
                fail_with_timeout: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn timing_out() -> Self {
            Self {
                quote_price: None,
                closes: Vec::new(),
                fail_with_timeout: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn get_quote(&self, symbol: &str) -> analyzer_market::Result<QuoteSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_with_timeout {
                return Err(MarketError::Timeout(symbol.to_string()));
            }
            Ok(QuoteSnapshot {
                symbol: symbol.to_string(),
                price: self.quote_price,
                company_name: None,
                currency: None,
            })
        }

        async fn get_recent_closes(&self, symbol: &str) -> analyzer_market::Result<Vec<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_with_timeout {
                return Err(MarketError::Timeout(symbol.to_string()));
            }
            Ok(self.closes.clone())
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    #[tokio::test]
    async fn test_invalid_ticker_rejected_before_network() {
        let provider = Arc::new(FakeProvider::with_quote(250.45));
        let fetcher = PriceFetcher::new(Arc::clone(&provider) as Arc<dyn MarketDataProvider>);

        for bad in ["tsla", "ABCDEF", "UNKNOWN", ""] {
            let err = fetcher.fetch(&Ticker::new(bad)).await.expect_err("should fail");
            assert_eq!(err.class(), "stock_not_found", "ticker: {bad:?}");
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_direct_quote_price_used() {
        let provider = Arc::new(FakeProvider::with_quote(250.45));
        let fetcher = PriceFetcher::new(Arc::clone(&provider) as Arc<dyn MarketDataProvider>);

        let record = fetcher.fetch(&Ticker::new("TSLA")).await.expect("fetch");
        assert_eq!(record.price, 250.45);
        assert_eq!(record.company_name, "TSLA");
        assert_eq!(record.currency, "USD");
        assert_eq!(record.change, "+0.00%");
        // Direct path needs a single provider call
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_falls_back_to_latest_close() {
        let provider = Arc::new(FakeProvider::with_history_only(vec![240.0, 245.5, 248.9]));
        let fetcher = PriceFetcher::new(Arc::clone(&provider) as Arc<dyn MarketDataProvider>);

        let record = fetcher.fetch(&Ticker::new("TSLA")).await.expect("fetch");
        assert_eq!(record.price, 248.9);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_quote_and_history_is_not_found() {
        let provider = Arc::new(FakeProvider::with_history_only(Vec::new()));
        let fetcher = PriceFetcher::new(provider as Arc<dyn MarketDataProvider>);

        let err = fetcher.fetch(&Ticker::new("ZZZZZ")).await.expect_err("should fail");
        assert_eq!(err.class(), "stock_not_found");
        assert!(err.to_string().contains("stock not found: ZZZZZ"));
    }

    #[tokio::test]
    async fn test_timeout_is_rate_limited() {
        let provider = Arc::new(FakeProvider::timing_out());
        let fetcher = PriceFetcher::new(Arc::clone(&provider) as Arc<dyn MarketDataProvider>);

        let err = fetcher.fetch(&Ticker::new("TSLA")).await.expect_err("should fail");
        assert_eq!(err.class(), "rate_limited");
        assert!(err.to_string().contains("request timeout for TSLA"));
        // A single failure is terminal; no retry happens
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
