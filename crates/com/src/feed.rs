use {
    axum::body::Bytes,
    control::FrameSink,
    std::{
        sync::{Arc, Mutex},
        time::{Duration, Instant},
    },
};

// frames keep flowing this long after the last request for one
const DEMAND_WINDOW: Duration = Duration::from_secs(5);

#[derive(Default)]
struct FeedState {
    latest: Option<Bytes>,
    // bumped on every push, 0 while empty
    sequence: u64,
    last_request: Option<Instant>,
}

/// Latest-frame store shared by the control loop and the server.
///
/// Frames are only requested from the loop while a snapshot or stream
/// client asked for one within the last few seconds.
#[derive(Clone, Default)]
pub struct FrameFeed {
    state: Arc<Mutex<FeedState>>,
}

impl FrameFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest frame, and register demand for the next ones.
    pub fn snapshot(&self) -> Option<Bytes> {
        self.next_after(0).map(|(_, frame)| frame)
    }

    /// Latest frame with its sequence number if it is newer than `seen`.
    /// Registers demand either way.
    pub fn next_after(&self, seen: u64) -> Option<(u64, Bytes)> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.last_request = Some(Instant::now());
        if state.sequence <= seen {
            return None;
        }
        state.latest.clone().map(|frame| (state.sequence, frame))
    }

    fn has_demand(&self, now: Instant) -> bool {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .last_request
            .map(|at| now.saturating_duration_since(at) < DEMAND_WINDOW)
            .unwrap_or(false)
    }
}

impl FrameSink for FrameFeed {
    fn wants_frame(&self) -> bool {
        self.has_demand(Instant::now())
    }

    fn push(&mut self, frame: &[u8]) {
        let copy = Bytes::copy_from_slice(frame);
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.latest = Some(copy);
        state.sequence += 1;
    }
}
