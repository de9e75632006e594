use std::collections::VecDeque;

use tokio::time::{Duration, Instant, sleep};

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(61);

/// Requests tracked by the sliding window: this many may pass before the
/// window's age is checked.
const WINDOW: usize = 3;

/// Cooperative throughput throttle: at most [`WINDOW`] requests per
/// `min_interval`, enforced by sleeping before the send. Holds its own
/// window state, so separate runs never interfere; it assumes sequential
/// submission from a single task and is not a failure-recovery mechanism.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    sent: VecDeque<Instant>,
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            sent: VecDeque::with_capacity(WINDOW),
        }
    }

    /// Wait until a send slot is open, then record the send instant.
    pub async fn acquire(&mut self) {
        if self.sent.len() == WINDOW {
            if let Some(&anchor) = self.sent.front() {
                let ready = anchor + self.min_interval;
                let now = Instant::now();
                if ready > now {
                    tracing::info!(wait_secs = (ready - now).as_secs(), "pacing request");
                    sleep(ready - now).await;
                }
            }
            self.sent.pop_front();
        }
        self.sent.push_back(Instant::now());
    }
}
