use bisub_completion_interface::{ChatRequest, CompletionClient};

use crate::batch::{DEFAULT_BATCH_SIZE, pack};
use crate::error::Error;
use crate::pacer::RequestPacer;

pub const TRANSLATION_INSTRUCTION: &str = "The following Japanese text is segmented to lines by \\n. Translate it in brief English line by line. Use we for the first person.\n";

/// Raw replies of one translation run, tagged with the batch size (`law`)
/// the payloads were packed with. The realigner needs both.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReplies {
    pub law: usize,
    pub replies: Vec<String>,
}

/// Drives numbered batches through the completion client strictly in source
/// order, pacing each send and accumulating reported token usage. Any
/// transport or schema failure aborts the run; there is no retry.
pub struct Translator<C> {
    client: C,
    pacer: RequestPacer,
    instruction: String,
    batch_size: usize,
}

impl<C: CompletionClient> Translator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            pacer: RequestPacer::default(),
            instruction: TRANSLATION_INSTRUCTION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sentences per request payload. A zero value is treated as 1.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn pacer(mut self, pacer: RequestPacer) -> Self {
        self.pacer = pacer;
        self
    }

    pub async fn translate(mut self, lines: &[String]) -> Result<(u64, BatchReplies), Error> {
        let mut total_tokens = 0;
        let mut replies = Vec::new();

        for batch in pack(lines, self.batch_size) {
            self.pacer.acquire().await;
            tracing::info!(batch = batch.index, lines = batch.len, "translating batch");

            let completion = self
                .client
                .complete(&ChatRequest {
                    system: self.instruction.clone(),
                    user: batch.payload,
                })
                .await
                .map_err(Error::Completion)?;

            total_tokens += completion.total_tokens;
            replies.push(ensure_trailing_newline(completion.text));
        }

        Ok((
            total_tokens,
            BatchReplies {
                law: self.batch_size,
                replies,
            },
        ))
    }
}

/// Replies are concatenated downstream by batch order; a missing final
/// newline would glue one reply's last line to the next reply's first
/// number.
fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
