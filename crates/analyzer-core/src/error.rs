//! Error types for stock query operations

use thiserror::Error;

/// Stock analyzer specific errors
///
/// Every failure the pipeline can surface to a caller falls into one of
/// these classes. The classification is preserved end to end so callers
/// and tests can distinguish "no ticker in the query" from "provider had
/// no data" from "provider throttled us".
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// No ticker symbol could be identified in the query
    #[error("no ticker found in query")]
    NoTickerFound,

    /// LLM-assisted extraction failed or returned unusable output
    #[error("ticker extraction failed: {0}")]
    ExtractionFailed(String),

    /// Ticker is malformed or the provider has no data for it
    #[error("stock not found: {0}")]
    StockNotFound(String),

    /// Provider timed out or throttled the request
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Missing or invalid external-service configuration
    #[error("configuration error: {0}")]
    ConfigurationInvalid(String),

    /// Unclassified failure caught at the outermost boundary
    #[error("{0}")]
    Other(String),
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Short class label, stable across message changes
    ///
    /// Used for logging and assertions; the `Display` impl carries the
    /// human-readable detail.
    pub fn class(&self) -> &'static str {
        match self {
            Self::NoTickerFound => "no_ticker_found",
            Self::ExtractionFailed(_) => "extraction_failed",
            Self::StockNotFound(_) => "stock_not_found",
            Self::RateLimited(_) => "rate_limited",
            Self::ConfigurationInvalid(_) => "configuration_invalid",
            Self::Other(_) => "other",
        }
    }
}
