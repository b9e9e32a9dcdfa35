//! Query-to-response pipeline for natural-language stock price queries
//!
//! This crate composes the analyzer's core decision logic:
//!
//! - [`TickerResolver`] strategies mapping free text to a ticker
//!   (pattern-based or LLM-delegated, chosen at construction)
//! - [`PriceFetcher`] with two-tier retrieval and error classification
//! - [`format_price`] rendering a fetched record into the answer line
//! - [`QueryPipeline`] wiring resolve, validate, fetch and format into
//!   one sequential chain per query
//!
//! External services (LLM, market data) are injected behind traits so
//! the whole pipeline runs against fakes in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use analyzer_market::YahooFinanceClient;
//! use analyzer_pipeline::{PatternTickerResolver, QueryPipeline};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = QueryPipeline::new(
//!         Arc::new(PatternTickerResolver::new()),
//!         Arc::new(YahooFinanceClient::new()),
//!     );
//!
//!     let answer = pipeline.respond("What's the price of Tesla?").await;
//!     println!("{answer}");
//! }
//! ```

pub mod config;
pub mod fetcher;
pub mod formatter;
pub mod pipeline;
pub mod resolver;

pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, ResolverMode};
pub use fetcher::PriceFetcher;
pub use formatter::format_price;
pub use pipeline::{QueryOutcome, QueryPipeline, failure_message};
pub use resolver::{LlmTickerResolver, PatternTickerResolver, TickerResolver};
