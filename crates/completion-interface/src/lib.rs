//! Shared contract for the chat-style text-completion collaborator.
//!
//! Translation and summarization both speak this interface with different
//! instructions, so the batching layer stays provider-agnostic.

use std::future::Future;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// One outbound completion request: a system instruction describing the
/// expected output discipline, plus the payload to transform.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
}

/// One reply: the raw free-form text and the provider's reported token usage.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Completion {
    pub text: String,
    pub total_tokens: u64,
}

/// Blocking request/response completion client. Callers submit sequentially;
/// replies are consumed strictly in request order.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<Completion, Error>> + Send;
}

impl<T: CompletionClient> CompletionClient for &T {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<Completion, Error>> + Send {
        (**self).complete(request)
    }
}
