use bisub_completion_interface::{ChatRequest, Completion, CompletionClient};
use bisub_http::HttpClient;

use crate::error::Error;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Chat-completions client over the OpenAI wire format. Requests are sent
/// with `temperature: 0` so numbered-line replies stay as deterministic as
/// the provider allows.
pub struct ChatOpenAiClient<C> {
    http: C,
    model: String,
}

impl<C: HttpClient> ChatOpenAiClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send(&self, system: &str, user: &str) -> Result<Completion, Error> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: 0.0,
        };
        let body = serde_json::to_vec(&request)?;
        let bytes = self
            .http
            .post_json(CHAT_COMPLETIONS_PATH, body)
            .await
            .map_err(Error::Http)?;
        let response: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        let choice = response.choices.into_iter().next().ok_or(Error::EmptyChoices)?;
        Ok(Completion {
            text: choice.message.content,
            total_tokens: response.usage.total_tokens,
        })
    }
}

impl<C: HttpClient> CompletionClient for ChatOpenAiClient<C> {
    async fn complete(
        &self,
        request: &ChatRequest,
    ) -> Result<Completion, bisub_completion_interface::Error> {
        let completion = self.send(&request.system, &request.user).await?;
        Ok(completion)
    }
}
