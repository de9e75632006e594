/// Seconds by which adjacent chunks intentionally overlap, so no utterance is
/// lost at a chunk boundary. Reconciled away before sentence assembly.
pub const DEFAULT_OVERLAP_SECS: f64 = 20.0;

/// Upload size ceiling per chunk, in megabytes, used to derive the split
/// count for a recording.
pub const DEFAULT_MAX_CHUNK_MEGABYTES: f64 = 24.0;

/// How a recording was split for recognition: `split_count` chunks of
/// `nominal_duration` seconds each, every chunk extended by `overlap`
/// seconds past its nominal span (except as limited by source length).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChunkPlan {
    pub split_count: usize,
    pub nominal_duration: f64,
    pub overlap: f64,
}

impl ChunkPlan {
    /// Plan for an unsplit recording. Reconciliation is a no-op under it.
    pub fn single(duration: f64) -> Self {
        Self {
            split_count: 1,
            nominal_duration: duration,
            overlap: DEFAULT_OVERLAP_SECS,
        }
    }

    /// Derive the split from file size: one chunk per started
    /// `max_megabytes`, each spanning an equal share of the duration.
    pub fn from_file_size(size_megabytes: f64, duration: f64, max_megabytes: f64) -> Self {
        let split_count = (size_megabytes / max_megabytes).floor() as usize + 1;
        Self {
            split_count,
            nominal_duration: duration / split_count as f64,
            overlap: DEFAULT_OVERLAP_SECS,
        }
    }

    /// Global start time of a chunk's local clock.
    pub fn chunk_offset(&self, index: usize) -> f64 {
        self.nominal_duration * index as f64
    }
}

/// One recognized utterance span on the global clock.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A punctuation-bounded unit of transcript, the atomic unit translated and
/// subtitled. Within a track, each sentence's end time equals the next
/// sentence's start time; the final sentence's end time is authoritative.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sentence {
    pub start: f64,
    pub end: f64,
    pub text: String,
}
