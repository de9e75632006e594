//! # Batched Translation & Realignment
//!
//! Sentences travel to the completion service packed into numbered text
//! blocks and come back as free-form numbered text. This crate owns both
//! directions of that fragile string protocol:
//!
//! **Pack** — [`batch::pack`] groups sentences into numbered request
//! payloads of a fixed batch size.
//!
//! **Pace** — [`RequestPacer`] caps sustained request throughput with a
//! sliding window over the last three send times. Bursts of three pass
//! unthrottled; the fourth request waits until the window reopens.
//!
//! **Realign** — [`realign::realign`] parses the numbered replies back into
//! a list whose length exactly equals the sentence count, padding missing
//! entries with empty strings and merging surplus ones into the final slot.
//! Misalignment is recovered, never fatal; transport and schema failures
//! abort the run.
//!
//! **Summarize** — [`Summarizer`] reuses the batching/pacing discipline to
//! compress the translated lines, consolidating partial summaries with one
//! extra pass when more than one batch was needed.

pub mod batch;
pub mod pacer;
pub mod realign;
pub mod summarize;
mod translator;

mod error;

pub use batch::{DEFAULT_BATCH_SIZE, NumberedBatch, pack};
pub use error::Error;
pub use pacer::{DEFAULT_MIN_INTERVAL, RequestPacer};
pub use realign::realign;
pub use summarize::{DEFAULT_SUMMARY_BATCH_LINES, DEFAULT_SUMMARY_RATIO, Summarizer};
pub use translator::{BatchReplies, TRANSLATION_INSTRUCTION, Translator};
