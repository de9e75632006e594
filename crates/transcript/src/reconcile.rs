//! Overlap reconciliation.
//!
//! Chunks are cut with a shared overlap window, so the recognition service
//! hears the seam twice and returns duplicated segments around every chunk
//! boundary. Reconciliation keeps exactly one copy of the seam content:
//! each chunk is truncated at its first segment past the nominal-duration
//! boundary, and the next chunk's head segment is dropped when its timing
//! says it is the same utterance.

use crate::types::{ChunkPlan, Segment};

/// Two segments closer than this across a chunk seam are the same utterance.
const HEAD_DUPLICATE_TOLERANCE: f64 = 2.0;

/// Reconcile per-chunk segment lists (already on the global clock) into one
/// flat chronological track. A single-chunk run is returned unchanged.
pub fn reconcile(plan: &ChunkPlan, mut chunks: Vec<Vec<Segment>>) -> Vec<Segment> {
    if chunks.len() < 2 {
        return chunks.pop().unwrap_or_default();
    }

    for i in 0..chunks.len() - 1 {
        let boundary = plan.chunk_offset(i + 1);
        let Some(cut) = chunks[i].iter().position(|s| s.start > boundary) else {
            continue;
        };
        let cut_start = chunks[i][cut].start;
        chunks[i].truncate(cut);

        // The truncated segment re-appears as the next chunk's head. Confirm
        // via the next chunk's second segment before dropping it; a chunk
        // with fewer than two segments is left alone.
        if let Some(second) = chunks[i + 1].get(1) {
            if (cut_start - second.start).abs() < HEAD_DUPLICATE_TOLERANCE {
                chunks[i + 1].remove(0);
            }
        }
    }

    let flat = chunks.into_iter().flatten().collect();
    close_gaps(collapse_repeats(flat))
}

/// Collapse immediately adjacent segments with identical text into one,
/// keeping the first's start and the last's end.
fn collapse_repeats(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match out.last_mut() {
            Some(last) if last.text == segment.text => last.end = segment.end,
            _ => out.push(segment),
        }
    }
    out
}

/// Close residual timing gaps/overlaps from chunking: every segment ends
/// where the next one starts. The final segment keeps its own end time.
fn close_gaps(mut segments: Vec<Segment>) -> Vec<Segment> {
    for i in 0..segments.len().saturating_sub(1) {
        segments[i].end = segments[i + 1].start;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(start: f64, end: f64, text: &str) -> Segment {
        Segment::new(start, end, text)
    }

    fn plan(split_count: usize, nominal_duration: f64) -> ChunkPlan {
        ChunkPlan {
            split_count,
            nominal_duration,
            overlap: 20.0,
        }
    }

    #[test]
    fn single_chunk_is_untouched() {
        let input = vec![
            seg(0.0, 5.0, "a"),
            seg(7.0, 9.0, "a"),
            seg(9.0, 12.0, "b"),
        ];
        let output = reconcile(&plan(1, 600.0), vec![input.clone()]);
        assert_eq!(output, input);
    }

    #[test]
    fn no_chunks_yield_empty_track() {
        assert!(reconcile(&plan(1, 600.0), vec![]).is_empty());
    }

    #[test]
    fn truncates_chunk_at_overlap_boundary() {
        // Chunk 0 runs past the 100s boundary into the overlap window.
        let chunk0 = vec![
            seg(95.0, 99.0, "before"),
            seg(101.0, 104.0, "overlap a"),
            seg(104.0, 108.0, "overlap b"),
        ];
        // Head duplicate confirmed: chunk 1's second segment starts within
        // 2s of the truncated segment.
        let chunk1 = vec![seg(100.2, 102.4, "overlap head"), seg(102.4, 106.0, "next")];

        let output = reconcile(&plan(2, 100.0), vec![chunk0, chunk1]);
        let texts: Vec<_> = output.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["before", "next"]);
    }

    #[test]
    fn keeps_head_when_timing_disagrees() {
        let chunk0 = vec![seg(95.0, 99.0, "before"), seg(101.0, 104.0, "overlap a")];
        let chunk1 = vec![seg(100.2, 102.4, "head"), seg(107.0, 110.0, "late")];

        let output = reconcile(&plan(2, 100.0), vec![chunk0, chunk1]);
        let texts: Vec<_> = output.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["before", "head", "late"]);
    }

    #[test]
    fn short_next_chunk_passes_through() {
        let chunk0 = vec![seg(95.0, 99.0, "before"), seg(101.0, 104.0, "overlap")];
        let chunk1 = vec![seg(100.5, 103.0, "only")];

        let output = reconcile(&plan(2, 100.0), vec![chunk0, chunk1]);
        let texts: Vec<_> = output.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["before", "only"]);
    }

    #[test]
    fn adjacent_identical_texts_collapse_into_one() {
        let chunk0 = vec![seg(0.0, 2.0, "same"), seg(2.0, 4.0, "same")];
        let chunk1 = vec![seg(100.0, 101.0, "other"), seg(101.0, 102.0, "tail")];

        let output = reconcile(&plan(2, 100.0), vec![chunk0, chunk1]);
        assert_eq!(output[0].text, "same");
        assert_relative_eq!(output[0].start, 0.0);
        // Collapse keeps the last copy's end, then gap closure snaps it to
        // the next segment's start.
        assert_relative_eq!(output[0].end, 100.0);
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn end_times_meet_next_start_after_reconcile() {
        let chunk0 = vec![seg(0.0, 3.5, "a"), seg(4.0, 9.0, "b")];
        let chunk1 = vec![seg(100.0, 103.0, "c"), seg(104.0, 106.0, "d")];

        let output = reconcile(&plan(2, 100.0), vec![chunk0, chunk1]);
        for pair in output.windows(2) {
            assert_relative_eq!(pair[0].end, pair[1].start);
        }
        // Final segment's own end time is authoritative.
        assert_relative_eq!(output.last().unwrap().end, 106.0);
    }
}
