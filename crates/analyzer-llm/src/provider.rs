//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for text-completion providers
///
/// Implementations of this trait provide access to different LLM services
/// (e.g., OpenAI, Azure OpenAI, local OpenAI-compatible deployments). The
/// pipeline never talks to a concrete service directly; it is handed a
/// provider at construction time so tests can substitute a fake.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion from the LLM
    ///
    /// One awaitable round trip with no partial results observable before
    /// completion. No latency bound is guaranteed.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
