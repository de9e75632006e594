//! Sentence assembly.
//!
//! Recognition segments are fragments, not sentences: a sentence may span
//! several fragments and a fragment may contain the end of one sentence and
//! the start of the next. The assembler scans fragments in order, closing a
//! sentence at the rightmost sentence-final punctuation mark in a fragment
//! and carrying the remainder into the next sentence. A buffer that grows
//! past the length threshold without ever seeing punctuation is force-closed
//! so no subtitle line runs unreasonably long.

use crate::types::{Segment, Sentence};

pub const DEFAULT_TERMINATORS: &[char] = &['。', '！', '？'];
pub const DEFAULT_MAX_RUN_CHARS: usize = 50;

/// Terminator set is configurable so the engine works across locales
/// without code changes.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    pub terminators: Vec<char>,
    pub max_run_chars: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
            max_run_chars: DEFAULT_MAX_RUN_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentenceAssembler {
    config: AssemblerConfig,
}

impl SentenceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Merge fragments into sentences.
    ///
    /// A sentence's start time is the start of the fragment that opened its
    /// buffer; its end time is the end of the fragment that closed it. Text
    /// left in the buffer after the last fragment never received a
    /// terminator and has no forward timing, so it is dropped.
    pub fn assemble(&self, segments: &[Segment]) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut buffer = String::new();
        let mut start = 0.0;
        let mut open = false;

        for segment in segments {
            if !open {
                start = segment.start;
                open = true;
            }

            match self.rightmost_terminator(&segment.text) {
                Some(split) => {
                    buffer.push_str(&segment.text[..split]);
                    sentences.push(Sentence {
                        start,
                        end: segment.end,
                        text: std::mem::take(&mut buffer),
                    });
                    // Remainder belongs to the next sentence, whose start
                    // time is captured from the next fragment.
                    buffer.push_str(&segment.text[split..]);
                    open = false;
                }
                None => {
                    buffer.push_str(&segment.text);
                    if buffer.chars().count() > self.config.max_run_chars {
                        if let Some(&terminator) = self.config.terminators.first() {
                            buffer.push(terminator);
                        }
                        sentences.push(Sentence {
                            start,
                            end: segment.end,
                            text: std::mem::take(&mut buffer),
                        });
                        open = false;
                    }
                }
            }
        }

        sentences
    }

    /// Byte offset just past the rightmost terminator in `text`, if any.
    fn rightmost_terminator(&self, text: &str) -> Option<usize> {
        text.char_indices()
            .filter(|(_, c)| self.config.terminators.contains(c))
            .next_back()
            .map(|(i, c)| i + c.len_utf8())
    }
}
