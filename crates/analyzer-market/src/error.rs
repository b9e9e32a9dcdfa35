//! Error types for market data operations

use thiserror::Error;

/// Result type for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Errors raised by a market data provider
///
/// The fetcher classifies these further: `Timeout` becomes a rate-limit
/// failure, everything else becomes stock-not-found.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Provider request timed out
    #[error("request timeout for {0}")]
    Timeout(String),

    /// Provider request failed
    #[error("provider error for {symbol}: {reason}")]
    Api {
        symbol: String,
        reason: String,
    },
}
