//! Ticker symbol type and validation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value returned when resolution cannot identify a symbol
pub const UNKNOWN_TICKER: &str = "UNKNOWN";

/// A stock ticker symbol
///
/// Holds either a candidate symbol (1-5 uppercase ASCII letters) or the
/// `UNKNOWN` sentinel. Produced by a resolver, consumed once by the
/// fetcher, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Wrap a raw candidate symbol without validating it
    ///
    /// Validity is checked by consumers via [`Ticker::is_valid`]; the
    /// fetcher rejects invalid symbols before touching the network.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The sentinel ticker for failed resolution
    pub fn unknown() -> Self {
        Self(UNKNOWN_TICKER.to_string())
    }

    /// Whether this is the `UNKNOWN` sentinel
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_TICKER
    }

    /// Whether this ticker is a syntactically valid symbol
    pub fn is_valid(&self) -> bool {
        is_valid_symbol(&self.0)
    }

    /// The symbol text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Ticker {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

/// Validate ticker symbol format
///
/// True iff the symbol is 1-5 uppercase ASCII letters and not the
/// `UNKNOWN` sentinel. Pure, no side effects.
pub fn is_valid_symbol(symbol: &str) -> bool {
    if symbol.is_empty() || symbol == UNKNOWN_TICKER {
        return false;
    }
    symbol.len() <= 5 && symbol.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_symbols() {
        for symbol in ["A", "TSLA", "GOOGL", "MSFT", "NVDA"] {
            assert!(is_valid_symbol(symbol), "{symbol} should be valid");
        }
    }

    #[test]
    fn test_invalid_symbols() {
        for symbol in ["", "UNKNOWN", "tsla", "TSLA1", "ABCDEF", "T-SLA", "TS LA", "123"] {
            assert!(!is_valid_symbol(symbol), "{symbol} should be invalid");
        }
    }

    #[test]
    fn test_unknown_sentinel() {
        let ticker = Ticker::unknown();
        assert!(ticker.is_unknown());
        assert!(!ticker.is_valid());
        assert_eq!(ticker.as_str(), "UNKNOWN");
    }

    #[test]
    fn test_ticker_display() {
        let ticker = Ticker::new("AAPL");
        assert_eq!(ticker.to_string(), "AAPL");
        assert!(ticker.is_valid());
    }
}
