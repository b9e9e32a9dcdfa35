//! Configuration for the stock analyzer

use analyzer_core::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ticker resolution strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolverMode {
    /// Static company table plus symbol regex (default, no credentials)
    Pattern,
    /// LLM-delegated extraction (requires API credentials)
    Llm,
}

impl Default for ResolverMode {
    fn default() -> Self {
        Self::Pattern
    }
}

/// Configuration for the analyzer
///
/// Credential problems are detected here at startup, never per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Resolution strategy
    pub resolver_mode: ResolverMode,

    /// LLM endpoint base URL (optional; provider default when absent)
    pub llm_endpoint: Option<String>,

    /// LLM API key (required in LLM mode)
    pub llm_api_key: Option<String>,

    /// LLM model or deployment name
    pub llm_model: String,

    /// Request timeout for external calls
    pub request_timeout: Duration,

    /// Log level filter when RUST_LOG is unset
    pub log_level: String,

    /// Verbose diagnostics
    pub debug: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            resolver_mode: ResolverMode::Pattern,
            llm_endpoint: None,
            llm_api_key: None,
            llm_model: "o3-mini".to_string(),
            request_timeout: Duration::from_secs(30),
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Load configuration from `ANALYZER_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            resolver_mode: defaults.resolver_mode,
            llm_endpoint: std::env::var("ANALYZER_LLM_ENDPOINT").ok(),
            llm_api_key: std::env::var("ANALYZER_LLM_API_KEY").ok(),
            llm_model: std::env::var("ANALYZER_LLM_MODEL").unwrap_or(defaults.llm_model),
            request_timeout: std::env::var("ANALYZER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.request_timeout, Duration::from_secs),
            log_level: std::env::var("ANALYZER_LOG_LEVEL").unwrap_or(defaults.log_level),
            debug: std::env::var("ANALYZER_DEBUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.debug),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.resolver_mode == ResolverMode::Llm && self.llm_api_key.is_none() {
            return Err(AnalyzerError::ConfigurationInvalid(
                "LLM API key required when using LLM resolution".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(AnalyzerError::ConfigurationInvalid(
                "request_timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AnalyzerConfig
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    resolver_mode: Option<ResolverMode>,
    llm_endpoint: Option<String>,
    llm_api_key: Option<String>,
    llm_model: Option<String>,
    request_timeout: Option<Duration>,
    log_level: Option<String>,
    debug: Option<bool>,
}

impl AnalyzerConfigBuilder {
    /// Set the resolution strategy
    pub fn resolver_mode(mut self, mode: ResolverMode) -> Self {
        self.resolver_mode = Some(mode);
        self
    }

    /// Set the LLM endpoint base URL
    pub fn llm_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.llm_endpoint = Some(endpoint.into());
        self
    }

    /// Set the LLM API key
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.llm_api_key = Some(key.into());
        self
    }

    /// Set the LLM model or deployment name
    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = Some(model.into());
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the fallback log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable verbose diagnostics
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();

        let config = AnalyzerConfig {
            resolver_mode: self.resolver_mode.unwrap_or(defaults.resolver_mode),
            llm_endpoint: self.llm_endpoint,
            llm_api_key: self.llm_api_key,
            llm_model: self.llm_model.unwrap_or(defaults.llm_model),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            debug: self.debug.unwrap_or(defaults.debug),
        };

        config.validate()?;
        Ok(config)
    }
}
