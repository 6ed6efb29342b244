//! LlmProvider trait definition.
//!
//! This is the seam between the chat service and whatever backend
//! actually performs inference. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition). Implementations live in quill-infra (e.g.
//! `OpenRouterProvider`); tests use an in-process mock.

use quill_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for model-invocation backends.
///
/// One outstanding call at a time; no streaming or cancellation contract
/// is imposed here. A caller that needs a deadline wraps `complete` in
/// its own timeout.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
