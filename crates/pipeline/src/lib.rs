//! # Bilingual subtitle pipeline
//!
//! One run turns chunked audio into time-aligned bilingual subtitle
//! artifacts: transcription → overlap reconciliation → sentence assembly →
//! batched translation → numbered-reply realignment → SRT/CSV payloads,
//! with an optional iterative summary. Data flows in a single pass; the
//! only loop is the summarizer's one consolidating re-summarization.
//!
//! A run owns all of its state. Collaborator calls are awaited one at a
//! time in source order, so batch replies always line up positionally with
//! the sentence track. A failed collaborator call aborts the whole run with
//! no partial artifacts; only numbered-reply misalignment is recovered
//! in-flight (see the `translate` crate).

mod error;

pub use error::Error;

use std::time::Duration;

use bisub_completion_interface::CompletionClient;
use bisub_http::HttpClient;
use bisub_subtitle::{Cue, render_csv, render_srt};
use bisub_transcribe_openai::TranscribeOpenAiClient;
use bisub_transcript::{AssemblerConfig, ChunkPlan, SegmentStore, Sentence, SentenceAssembler};
use bisub_translate::{
    DEFAULT_BATCH_SIZE, DEFAULT_MIN_INTERVAL, DEFAULT_SUMMARY_BATCH_LINES, DEFAULT_SUMMARY_RATIO,
    RequestPacer, Summarizer, TRANSLATION_INSTRUCTION, Translator, realign,
};

/// One audio chunk ready for upload, produced by the external splitter.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    pub file_name: String,
    pub audio: Vec<u8>,
}

/// Summary pass knobs; absent means no summary is produced.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub ratio: f64,
    pub batch_lines: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_SUMMARY_RATIO,
            batch_lines: DEFAULT_SUMMARY_BATCH_LINES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub assembler: AssemblerConfig,
    pub batch_size: usize,
    /// System instruction for the translation requests.
    pub translation_instruction: String,
    /// Minimum interval enforced by the request pacers.
    pub pacing_interval: Duration,
    pub summary: Option<SummaryOptions>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            assembler: AssemblerConfig::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            translation_instruction: TRANSLATION_INSTRUCTION.to_string(),
            pacing_interval: DEFAULT_MIN_INTERVAL,
            summary: None,
        }
    }
}

/// Everything a run hands to the packaging layer. Source and target tracks
/// share boundary timestamps; `translations.len() == sentences.len()` always
/// holds.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub sentences: Vec<Sentence>,
    pub translations: Vec<String>,
    pub source_srt: String,
    pub source_csv: String,
    pub target_srt: String,
    pub target_csv: String,
    pub summary: Option<String>,
    pub total_duration: f64,
    pub translation_tokens: u64,
    pub summary_tokens: u64,
}

pub struct Pipeline<H, C> {
    transcriber: TranscribeOpenAiClient<H>,
    completions: C,
    config: PipelineConfig,
}

impl<H: HttpClient, C: CompletionClient> Pipeline<H, C> {
    pub fn new(transcriber: TranscribeOpenAiClient<H>, completions: C) -> Self {
        Self {
            transcriber,
            completions,
            config: PipelineConfig::default(),
        }
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute one full run. `vocabulary_hint` biases recognition toward
    /// domain terms; chunks must arrive in recording order matching `plan`.
    pub async fn run(
        &self,
        plan: ChunkPlan,
        chunks: Vec<AudioChunk>,
        vocabulary_hint: &str,
    ) -> Result<RunArtifacts, Error> {
        if chunks.len() != plan.split_count {
            return Err(Error::ChunkCountMismatch {
                expected: plan.split_count,
                got: chunks.len(),
            });
        }

        let mut store = SegmentStore::new(plan);
        let mut total_duration = 0.0;
        for chunk in chunks {
            tracing::info!(file = %chunk.file_name, "transcribing chunk");
            let response = self
                .transcriber
                .transcribe(&chunk.file_name, chunk.audio, vocabulary_hint)
                .await?;
            total_duration += response.duration;
            store.push_chunk(
                response
                    .segments
                    .into_iter()
                    .map(|s| (s.start, s.end, s.text)),
            );
        }

        let segments = store.into_segments();
        let assembler = SentenceAssembler::with_config(self.config.assembler.clone());
        let sentences = assembler.assemble(&segments);
        tracing::info!(
            segments = segments.len(),
            sentences = sentences.len(),
            "assembled sentence track"
        );

        let lines: Vec<String> = sentences.iter().map(|s| s.text.clone()).collect();
        let (translation_tokens, replies) = Translator::new(&self.completions)
            .batch_size(self.config.batch_size)
            .instruction(self.config.translation_instruction.clone())
            .pacer(RequestPacer::new(self.config.pacing_interval))
            .translate(&lines)
            .await?;
        let translations = realign(&replies, lines.len());

        let (summary_tokens, summary) = match self.config.summary {
            Some(options) => {
                let (tokens, text) = Summarizer::new(&self.completions)
                    .ratio(options.ratio)
                    .batch_lines(options.batch_lines)
                    .pacer(RequestPacer::new(self.config.pacing_interval))
                    .summarize(&translations)
                    .await?;
                (tokens, Some(text))
            }
            None => (0, None),
        };

        let source_cues: Vec<Cue> = sentences
            .iter()
            .map(|s| Cue::new(s.start, s.end, s.text.clone()))
            .collect();
        let target_cues: Vec<Cue> = sentences
            .iter()
            .zip(&translations)
            .map(|(s, text)| Cue::new(s.start, s.end, text.clone()))
            .collect();

        Ok(RunArtifacts {
            source_srt: render_srt(&source_cues),
            source_csv: render_csv(&source_cues),
            target_srt: render_srt(&target_cues),
            target_csv: render_csv(&target_cues),
            sentences,
            translations,
            summary,
            total_duration,
            translation_tokens,
            summary_tokens,
        })
    }
}
