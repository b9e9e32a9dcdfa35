//! Text-completion capability for the stock analyzer
//!
//! This crate provides a provider-agnostic abstraction for interacting
//! with Large Language Models. It includes:
//!
//! - Message and completion request/response types
//! - The [`LlmProvider`] trait consumed by the pipeline
//! - An OpenAI-compatible HTTP provider (covers Azure OpenAI and local
//!   deployments via a configurable base URL)

pub mod completion;
pub mod error;
pub mod provider;
pub mod providers;

pub use completion::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, Message, Role, TokenUsage,
};
pub use error::{LlmError, Result};
pub use provider::LlmProvider;
pub use providers::{OpenAiConfig, OpenAiProvider};
