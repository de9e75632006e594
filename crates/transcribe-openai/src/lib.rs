mod client;
mod error;
mod types;

pub use client::{DEFAULT_TRANSCRIBE_MODEL, TRANSCRIPTIONS_PATH, TranscribeOpenAiClient};
pub use error::Error;
pub use types::{TranscriptionResponse, TranscriptionSegment};
