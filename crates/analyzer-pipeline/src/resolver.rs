//! Ticker resolution strategies
//!
//! Two interchangeable implementations of [`TickerResolver`] turn free
//! text into a ticker: a pattern-based resolver (company-name table plus
//! symbol regex) and an LLM-delegated resolver. The strategy is picked at
//! pipeline construction time.

use analyzer_core::{AnalyzerError, Result, Ticker};
use analyzer_llm::{CompletionRequest, LlmProvider, Message};
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Trait for ticker resolution strategies
#[async_trait]
pub trait TickerResolver: Send + Sync {
    /// Resolve a free-text query to a ticker
    ///
    /// Returns the `UNKNOWN` sentinel when no ticker can be identified;
    /// only the LLM-delegated strategy fails with a classified error.
    async fn resolve(&self, query: &str) -> Result<Ticker>;

    /// Get the resolver name (e.g., "pattern", "llm")
    fn name(&self) -> &str;
}

/// Known company names and their tickers, scanned in order
const COMPANY_TICKERS: &[(&str, &str)] = &[
    ("tesla", "TSLA"),
    ("apple", "AAPL"),
    ("microsoft", "MSFT"),
    ("amazon", "AMZN"),
    ("google", "GOOGL"),
    ("meta", "META"),
    ("nvidia", "NVDA"),
];

static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{1,5})\b").unwrap_or_else(|e| panic!("invalid symbol regex: {e}"))
});

/// Pattern-based ticker resolver
///
/// Checks a static company-name table first (case-insensitive substring
/// match, first match wins), then scans the original-case query for a
/// 1-5 letter uppercase token. Never fails; unresolvable queries yield
/// the `UNKNOWN` sentinel.
pub struct PatternTickerResolver {
    companies: &'static [(&'static str, &'static str)],
}

impl PatternTickerResolver {
    /// Create a resolver over the default company table
    pub fn new() -> Self {
        Self {
            companies: COMPANY_TICKERS,
        }
    }
}

impl Default for PatternTickerResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TickerResolver for PatternTickerResolver {
    async fn resolve(&self, query: &str) -> Result<Ticker> {
        if query.trim().is_empty() {
            return Ok(Ticker::unknown());
        }

        let query_lower = query.to_lowercase();
        for (company, ticker) in self.companies {
            if query_lower.contains(company) {
                debug!(company = *company, ticker = *ticker, "matched company name");
                return Ok(Ticker::new(*ticker));
            }
        }

        // Symbol scan runs on the original case so lowercase words never
        // read as tickers.
        if let Some(m) = SYMBOL_RE.captures(query).and_then(|c| c.get(1)) {
            let candidate = Ticker::new(m.as_str());
            if candidate.is_valid() {
                debug!(ticker = %candidate, "matched symbol token");
                return Ok(candidate);
            }
        }

        Ok(Ticker::unknown())
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "You extract stock ticker symbols from user questions. \
Reply with only the ticker symbol (1-5 uppercase letters) of the company the user is asking \
about, or UNKNOWN if no company or ticker is mentioned. Do not add any other text.";

/// LLM-delegated ticker resolver
///
/// Sends the query to a text-completion provider with a fixed extraction
/// instruction and validates the trimmed, uppercased reply. Unlike the
/// pattern resolver this strategy fails loudly: an empty query or an
/// unusable completion is a classified extraction error, never a silent
/// `UNKNOWN`.
pub struct LlmTickerResolver {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl LlmTickerResolver {
    /// Create a resolver delegating to the given provider and model
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TickerResolver for LlmTickerResolver {
    async fn resolve(&self, query: &str) -> Result<Ticker> {
        if query.trim().is_empty() {
            return Err(AnalyzerError::ExtractionFailed(
                "empty query".to_string(),
            ));
        }

        let request = CompletionRequest::builder(self.model.as_str())
            .system(EXTRACTION_INSTRUCTIONS)
            .add_message(Message::user(query))
            .max_tokens(16)
            .temperature(0.0)
            .build();

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| AnalyzerError::ExtractionFailed(e.to_string()))?;

        let symbol = response.text.trim().to_uppercase();
        debug!(symbol, "LLM extraction output");

        let ticker = Ticker::new(symbol);
        if !ticker.is_valid() {
            return Err(AnalyzerError::ExtractionFailed(format!(
                "unusable extraction output: {ticker}"
            )));
        }

        Ok(ticker)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
