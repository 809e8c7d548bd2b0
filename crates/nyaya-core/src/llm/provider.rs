//! LlmProvider trait definition.
//!
//! This is the seam between the chat logic and the external LLM API.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! concrete implementation lives in nyaya-infra.

use nyaya_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion provider backends.
///
/// Two operations: one completion per call (no retry, no streaming),
/// and a minimal model listing used as a credential liveness check.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Exactly one outbound network call per invocation.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;

    /// List available model identifiers.
    ///
    /// The credential validator treats any successful response,
    /// regardless of content, as proof the key is accepted.
    fn list_models(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, LlmError>> + Send;
}
