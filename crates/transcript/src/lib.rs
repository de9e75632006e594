//! # Chunked-Recognition Transcript Engine
//!
//! Turns per-chunk speech-recognition segments into a clean, chronological
//! sentence track.
//!
//! ## Pipeline
//!
//! **Collect** — [`SegmentStore`] rebases each chunk's local timings onto the
//! global clock using the chunk plan's nominal duration.
//!
//! **Reconcile** — [`reconcile::reconcile`] removes the duplicated content
//! that chunk overlap produces: each chunk is truncated where it crosses into
//! the overlap window, the next chunk's head duplicate is dropped when the
//! timings agree, identical adjacent texts are collapsed, and residual timing
//! gaps are closed so segment end times meet the next segment's start.
//!
//! **Assemble** — [`SentenceAssembler`] merges consecutive fragments into
//! full sentences at sentence-final punctuation, with a length-based forced
//! split for long punctuation-less runs.

pub mod reconcile;
pub mod sentence;
pub mod store;
pub mod types;

pub use reconcile::reconcile;
pub use sentence::{AssemblerConfig, SentenceAssembler};
pub use store::SegmentStore;
pub use types::{ChunkPlan, DEFAULT_MAX_CHUNK_MEGABYTES, DEFAULT_OVERLAP_SECS, Segment, Sentence};
