#![forbid(unsafe_code)]

//! Wall-clock milliseconds for hosts.
//!
//! The engine itself is clock-agnostic; everything takes `now_ms: u64`.
//! Hosts that do have a wall clock derive those timestamps here.

use web_time::Instant;

/// Monotonic milliseconds since the clock was created.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock started.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
