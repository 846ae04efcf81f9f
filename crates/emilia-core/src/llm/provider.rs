//! LlmProvider trait definition.
//!
//! The one abstraction the reply generator calls through. Implementations
//! live in emilia-infra (e.g., `GroqProvider`).

use emilia_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM completion backends.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
