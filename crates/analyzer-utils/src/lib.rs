//! Shared utilities for the stock analyzer workspace

pub mod logging;

pub use logging::init_tracing;
