use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transcription failed: {0}")]
    Transcribe(#[from] bisub_transcribe_openai::Error),

    #[error(transparent)]
    Translate(#[from] bisub_translate::Error),

    #[error("expected {expected} audio chunks, got {got}")]
    ChunkCountMismatch { expected: usize, got: usize },
}
