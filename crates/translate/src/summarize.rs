use bisub_completion_interface::{ChatRequest, CompletionClient};

use crate::error::Error;
use crate::pacer::RequestPacer;

pub const DEFAULT_SUMMARY_RATIO: f64 = 0.1;
pub const DEFAULT_SUMMARY_BATCH_LINES: usize = 100;

/// Compresses the translated lines with the same batching and pacing
/// discipline as translation, trading per-sentence alignment for brevity:
/// partial summaries are concatenated, and when more than one batch was
/// needed, one consolidating pass re-summarizes the whole accumulator down
/// to the target ratio.
pub struct Summarizer<C> {
    client: C,
    pacer: RequestPacer,
    ratio: f64,
    batch_lines: usize,
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            pacer: RequestPacer::default(),
            ratio: DEFAULT_SUMMARY_RATIO,
            batch_lines: DEFAULT_SUMMARY_BATCH_LINES,
        }
    }

    /// Target length as a fraction of the input, clamped to 0.1..=1.0.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio.clamp(0.1, 1.0);
        self
    }

    /// Lines per partial-summary batch. A zero value is treated as 1.
    pub fn batch_lines(mut self, batch_lines: usize) -> Self {
        self.batch_lines = batch_lines.max(1);
        self
    }

    pub fn pacer(mut self, pacer: RequestPacer) -> Self {
        self.pacer = pacer;
        self
    }

    fn instruction(&self) -> String {
        format!(
            "Summarize the following text to {}% length. Use we for the first person.\n",
            (self.ratio * 100.0) as u32
        )
    }

    pub async fn summarize(mut self, lines: &[String]) -> Result<(u64, String), Error> {
        let instruction = self.instruction();
        let mut total_tokens = 0;
        let mut summary = String::new();
        let mut batch_count = 0;

        for block in lines.chunks(self.batch_lines) {
            self.pacer.acquire().await;
            tracing::info!(batch = batch_count, lines = block.len(), "summarizing batch");

            let completion = self
                .client
                .complete(&ChatRequest {
                    system: instruction.clone(),
                    user: block.join("\n"),
                })
                .await
                .map_err(Error::Completion)?;

            total_tokens += completion.total_tokens;
            summary.push_str(&completion.text);
            batch_count += 1;
        }

        if batch_count > 1 {
            self.pacer.acquire().await;
            tracing::info!("consolidating partial summaries");

            let completion = self
                .client
                .complete(&ChatRequest {
                    system: instruction,
                    user: summary,
                })
                .await
                .map_err(Error::Completion)?;

            total_tokens += completion.total_tokens;
            summary = completion.text;
        }

        Ok((total_tokens, summary))
    }
}
