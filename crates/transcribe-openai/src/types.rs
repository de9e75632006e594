/// One recognized utterance span, in seconds local to the submitted chunk.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptionSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// `verbose_json` transcription reply. The service returns more metadata
/// (language, avg_logprob, ...) than the pipeline consumes; unknown fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TranscriptionResponse {
    pub duration: f64,
    pub segments: Vec<TranscriptionSegment>,
}
