//! Market data capability for the stock analyzer
//!
//! Defines the [`MarketDataProvider`] trait the fetcher consumes, the
//! [`QuoteSnapshot`] value providers return, and a Yahoo Finance
//! implementation built on `yahoo_finance_api`.

pub mod error;
pub mod provider;
pub mod yahoo;

pub use error::{MarketError, Result};
pub use provider::{MarketDataProvider, QuoteSnapshot};
pub use yahoo::YahooFinanceClient;
