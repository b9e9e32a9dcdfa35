//! Query pipeline: resolve, validate, fetch, format
//!
//! A query moves through Resolving, Fetching and Formatting and ends in
//! one of two terminal states, carried by [`QueryOutcome`]: `Done` with
//! the formatted answer, or `Failed` with the classified error. The
//! pipeline never retries; re-prompting is the interactive caller's job.

use crate::fetcher::PriceFetcher;
use crate::formatter::format_price;
use crate::resolver::TickerResolver;
use analyzer_core::AnalyzerError;
use analyzer_market::MarketDataProvider;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Terminal state of a query
#[derive(Debug)]
pub enum QueryOutcome {
    /// Query answered; carries the formatted response
    Done(String),
    /// Query failed; carries the classified error
    Failed(AnalyzerError),
}

impl QueryOutcome {
    /// Whether the query completed successfully
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// The query-to-response pipeline
///
/// Composes a resolution strategy and a market data provider, both
/// injected at construction so tests run against fakes. Each call to
/// [`QueryPipeline::run`] is an independent sequential chain with no
/// state shared across queries.
pub struct QueryPipeline {
    resolver: Arc<dyn TickerResolver>,
    fetcher: PriceFetcher,
}

impl QueryPipeline {
    /// Create a pipeline from a resolution strategy and a data provider
    pub fn new(resolver: Arc<dyn TickerResolver>, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            resolver,
            fetcher: PriceFetcher::new(provider),
        }
    }

    /// Run one query to its terminal state
    #[instrument(skip(self, query), fields(resolver = self.resolver.name()))]
    pub async fn run(&self, query: &str) -> QueryOutcome {
        // Resolving
        let ticker = match self.resolver.resolve(query).await {
            Ok(ticker) if ticker.is_unknown() => {
                return QueryOutcome::Failed(AnalyzerError::NoTickerFound);
            },
            Ok(ticker) => ticker,
            Err(err) => return QueryOutcome::Failed(err),
        };
        info!(ticker = %ticker, "resolved ticker");

        // Fetching
        let record = match self.fetcher.fetch(&ticker).await {
            Ok(record) => record,
            Err(err) => return QueryOutcome::Failed(err),
        };

        // Formatting
        QueryOutcome::Done(format_price(&record))
    }

    /// Answer one query with a user-facing string
    ///
    /// The outer boundary of the pipeline: callers always get a string,
    /// either the formatted answer or a "Sorry, ..." message. The error
    /// classification is logged but never propagated.
    pub async fn respond(&self, query: &str) -> String {
        match self.run(query).await {
            QueryOutcome::Done(answer) => answer,
            QueryOutcome::Failed(err) => {
                error!(class = err.class(), error = %err, "query failed");
                failure_message(&err)
            },
        }
    }
}

/// User-facing failure message per error class
pub fn failure_message(err: &AnalyzerError) -> String {
    match err {
        AnalyzerError::NoTickerFound => {
            "Sorry, I couldn't identify a stock ticker in your question.".to_string()
        },
        AnalyzerError::ExtractionFailed(_) => {
            "Sorry, I couldn't work out which stock you meant.".to_string()
        },
        AnalyzerError::StockNotFound(_) => {
            "Sorry, I couldn't find price data for that stock.".to_string()
        },
        AnalyzerError::RateLimited(_) => {
            "Sorry, the market data service is busy right now. Please try again shortly."
                .to_string()
        },
        AnalyzerError::ConfigurationInvalid(_) | AnalyzerError::Other(_) => {
            "Sorry, something went wrong while answering your question.".to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::PatternTickerResolver;
    use analyzer_market::{MarketError, QuoteSnapshot};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned market data provider for end-to-end pipeline tests
    struct FakeProvider {
        price: Option<f64>,
        company_name: Option<String>,
        currency: Option<String>,
        timeout: bool,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn quoting(price: f64, name: &str, currency: &str) -> Self {
            Self {
                price: Some(price),
                company_name: Some(name.to_string()),
                currency: Some(currency.to_string()),
                timeout: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn timing_out() -> Self {
            Self {
                price: None,
                company_name: None,
                currency: None,
                timeout: true,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn get_quote(&self, symbol: &str) -> analyzer_market::Result<QuoteSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.timeout {
                return Err(MarketError::Timeout(symbol.to_string()));
            }
            Ok(QuoteSnapshot {
                symbol: symbol.to_string(),
                price: self.price,
                company_name: self.company_name.clone(),
                currency: self.currency.clone(),
            })
        }

        async fn get_recent_closes(&self, symbol: &str) -> analyzer_market::Result<Vec<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.timeout {
                return Err(MarketError::Timeout(symbol.to_string()));
            }
            Ok(Vec::new())
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn pipeline(provider: Arc<FakeProvider>) -> QueryPipeline {
        QueryPipeline::new(
            Arc::new(PatternTickerResolver::new()),
            provider as Arc<dyn MarketDataProvider>,
        )
    }

    #[tokio::test]
    async fn test_tesla_query_end_to_end() {
        let pipeline = pipeline(Arc::new(FakeProvider::quoting(250.45, "Tesla Inc", "USD")));

        match pipeline.run("What's the price of Tesla?").await {
            QueryOutcome::Done(answer) => {
                assert_eq!(answer, "Tesla Inc (TSLA): $250.45 USD (+0.00%)");
            },
            QueryOutcome::Failed(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_no_ticker() {
        let pipeline = pipeline(Arc::new(FakeProvider::quoting(250.45, "Tesla Inc", "USD")));

        match pipeline.run("").await {
            QueryOutcome::Failed(err) => assert_eq!(err.class(), "no_ticker_found"),
            QueryOutcome::Done(answer) => panic!("unexpected answer: {answer}"),
        }

        let message = pipeline.respond("").await;
        assert!(message.contains("couldn't identify a stock ticker"), "{message}");
    }

    #[tokio::test]
    async fn test_unresolvable_query_is_no_ticker() {
        let provider = Arc::new(FakeProvider::quoting(1.0, "X", "USD"));
        let pipeline = pipeline(Arc::clone(&provider));

        match pipeline.run("INVALID123").await {
            QueryOutcome::Failed(err) => assert_eq!(err.class(), "no_ticker_found"),
            QueryOutcome::Done(answer) => panic!("unexpected answer: {answer}"),
        }
        // Failed resolution never reaches the provider
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_timeout_is_rate_limited_no_retry() {
        let provider = Arc::new(FakeProvider::timing_out());
        let pipeline = pipeline(Arc::clone(&provider));

        match pipeline.run("What's the price of Tesla?").await {
            QueryOutcome::Failed(err) => assert_eq!(err.class(), "rate_limited"),
            QueryOutcome::Done(answer) => panic!("unexpected answer: {answer}"),
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        let message = pipeline.respond("What's the price of Tesla?").await;
        assert!(message.starts_with("Sorry,"), "{message}");
    }

    #[tokio::test]
    async fn test_respond_success_passthrough() {
        let pipeline = pipeline(Arc::new(FakeProvider::quoting(299.999, "Tesla Inc", "USD")));
        let answer = pipeline.respond("tesla price please").await;
        assert_eq!(answer, "Tesla Inc (TSLA): $300.00 USD (+0.00%)");
    }
}
