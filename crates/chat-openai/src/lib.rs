mod client;
mod error;
mod types;

pub use client::{CHAT_COMPLETIONS_PATH, ChatOpenAiClient, DEFAULT_CHAT_MODEL};
pub use error::Error;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Usage};
