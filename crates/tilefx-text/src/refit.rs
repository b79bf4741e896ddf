#![forbid(unsafe_code)]

//! Resize refit coalescing.
//!
//! A window resize arrives as a burst of events; refitting every live
//! label on each one is wasted work. The scheduler pushes one deadline
//! 150ms past the latest event, so a burst collapses to a single
//! recomputation once the resize goes quiet.

/// Quiet period after the last resize event before refitting fires.
pub const REFIT_COALESCE_MS: u64 = 150;

/// Coalesces resize activity into single refit passes.
#[derive(Debug, Clone, Default)]
pub struct RefitScheduler {
    deadline: Option<u64>,
}

impl RefitScheduler {
    /// A scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resize event at `now_ms`, pushing the pending deadline.
    pub fn note_resize(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + REFIT_COALESCE_MS);
    }

    /// Whether a refit pass is due at `now_ms`. Consumes the deadline, so
    /// one burst fires exactly once.
    pub fn due(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The pending deadline, if resize activity is being coalesced.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadline
    }
}
