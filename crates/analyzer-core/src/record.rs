//! Fetched price record

use crate::ticker::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder change figure until real change computation lands
///
/// TODO: compute change from the previous close once product decides the
/// reference period.
pub const PLACEHOLDER_CHANGE: &str = "+0.00%";

/// Default currency when the provider omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// A fetched stock price snapshot
///
/// Immutable after construction; one record is created per fetch and
/// never cached or reused across queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Validated ticker symbol
    pub ticker: Ticker,
    /// Company name, falling back to the ticker text when unavailable
    pub company_name: String,
    /// Current price, positive
    pub price: f64,
    /// ISO currency code
    pub currency: String,
    /// Instant the fetch completed
    pub timestamp: DateTime<Utc>,
    /// Formatted percentage change, currently always the placeholder
    pub change: String,
}

impl PriceRecord {
    /// Build a record from provider data, applying defaults
    pub fn new(
        ticker: Ticker,
        company_name: Option<String>,
        price: f64,
        currency: Option<String>,
    ) -> Self {
        let company_name = company_name.unwrap_or_else(|| ticker.as_str().to_string());
        Self {
            ticker,
            company_name,
            price,
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            timestamp: Utc::now(),
            change: PLACEHOLDER_CHANGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let record = PriceRecord::new(Ticker::new("TSLA"), None, 250.45, None);
        assert_eq!(record.company_name, "TSLA");
        assert_eq!(record.currency, "USD");
        assert_eq!(record.change, "+0.00%");
    }

    #[test]
    fn test_provider_metadata_kept() {
        let record = PriceRecord::new(
            Ticker::new("TSLA"),
            Some("Tesla Inc".to_string()),
            250.45,
            Some("USD".to_string()),
        );
        assert_eq!(record.company_name, "Tesla Inc");
        assert_eq!(record.price, 250.45);
    }
}
