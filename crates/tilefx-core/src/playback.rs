#![forbid(unsafe_code)]

//! Playback timing for registered animation descriptors.
//!
//! A descriptor (registered once in the keyframe store) is inert until a
//! span plays it with a [`Playback`]. All tile effects loop indefinitely,
//! so there is no iteration count here; a playback runs until the span
//! halts it.

/// How a span is styled outside the descriptor's active interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// No styling outside the active interval.
    #[default]
    None,
    /// The first stop applies during the start delay.
    Backwards,
}

/// Timing for playing a named descriptor on a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    /// Length of one loop in milliseconds.
    pub duration_ms: u64,
    /// Delay before the first loop begins, in milliseconds.
    pub delay_ms: u64,
    /// Styling outside the active interval.
    pub fill: FillMode,
}

impl Playback {
    /// A looping playback with the given cycle length and no delay.
    #[must_use]
    pub const fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            fill: FillMode::None,
        }
    }

    /// Set the start delay (builder pattern).
    #[must_use]
    pub const fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the fill mode (builder pattern).
    #[must_use]
    pub const fn fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_delay_and_fill() {
        let p = Playback::new(2000).delay(310).fill(FillMode::Backwards);
        assert_eq!(p.duration_ms, 2000);
        assert_eq!(p.delay_ms, 310);
        assert_eq!(p.fill, FillMode::Backwards);
    }
}
