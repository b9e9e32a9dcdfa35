//! Core domain types for the stock analyzer
//!
//! This crate defines the fundamental types shared across the analyzer
//! workspace: the [`Ticker`] symbol type with its validation predicate,
//! the [`PriceRecord`] value produced by a fetch, and the error taxonomy
//! every pipeline failure is classified into.

pub mod error;
pub mod record;
pub mod ticker;

pub use error::{AnalyzerError, Result};
pub use record::{DEFAULT_CURRENCY, PLACEHOLDER_CHANGE, PriceRecord};
pub use ticker::{Ticker, UNKNOWN_TICKER, is_valid_symbol};
