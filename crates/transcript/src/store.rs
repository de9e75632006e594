use crate::reconcile::reconcile;
use crate::types::{ChunkPlan, Segment};

/// Collects per-chunk recognition segments, rebasing each chunk's local
/// timings onto the global clock as they arrive. Owned by a single pipeline
/// run; chunks must be pushed in recording order.
#[derive(Debug)]
pub struct SegmentStore {
    plan: ChunkPlan,
    chunks: Vec<Vec<Segment>>,
}

impl SegmentStore {
    pub fn new(plan: ChunkPlan) -> Self {
        Self {
            plan,
            chunks: Vec::with_capacity(plan.split_count),
        }
    }

    pub fn plan(&self) -> &ChunkPlan {
        &self.plan
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Record one chunk's segments, given in chunk-local seconds.
    pub fn push_chunk(&mut self, segments: impl IntoIterator<Item = (f64, f64, String)>) {
        let offset = self.plan.chunk_offset(self.chunks.len());
        let rebased = segments
            .into_iter()
            .map(|(start, end, text)| Segment::new(start + offset, end + offset, text))
            .collect();
        self.chunks.push(rebased);
    }

    /// Reconcile chunk overlap and produce the flat global segment track.
    pub fn into_segments(self) -> Vec<Segment> {
        reconcile(&self.plan, self.chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chunk_timings_are_rebased_by_nominal_duration() {
        let plan = ChunkPlan {
            split_count: 2,
            nominal_duration: 100.0,
            overlap: 20.0,
        };
        let mut store = SegmentStore::new(plan);
        store.push_chunk([(0.0, 4.0, "a".to_string())]);
        store.push_chunk([(1.5, 6.0, "b".to_string())]);

        let segments = store.into_segments();
        assert_relative_eq!(segments[0].start, 0.0);
        assert_relative_eq!(segments[1].start, 101.5);
        assert_relative_eq!(segments[1].end, 106.0);
    }
}
