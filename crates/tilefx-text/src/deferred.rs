#![forbid(unsafe_code)]

//! Deferred first fit.
//!
//! A freshly inserted label cannot be measured in the frame that created
//! it: layout has not settled, and one frame later it still may not have.
//! The first fit therefore waits two frame pumps before measuring. The
//! host pumps every pending [`DeferredFit`] once per frame and drops it
//! when it completes.

use tilefx_core::{SharedTarget, TextProbe};

use crate::fitter::TextFitter;

/// Frames to wait before the first measurement.
const SETTLE_FRAMES: u8 = 2;

/// A label fit waiting for layout to settle.
pub struct DeferredFit {
    target: SharedTarget,
    text: String,
    frames_left: u8,
}

impl std::fmt::Debug for DeferredFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredFit")
            .field("text", &self.text)
            .field("frames_left", &self.frames_left)
            .finish()
    }
}

impl DeferredFit {
    /// Schedule a fit of `text` on `target`.
    #[must_use]
    pub fn new(target: SharedTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            frames_left: SETTLE_FRAMES,
        }
    }

    /// Pump one frame. Measures and fits on the frame the settle window
    /// closes, returning the solved size; `None` on earlier frames and
    /// after completion.
    pub fn frame<P: TextProbe>(&mut self, fitter: &TextFitter<P>) -> Option<f32> {
        match self.frames_left {
            0 => None,
            1 => {
                self.frames_left = 0;
                fitter.fit(&mut *self.target.borrow_mut(), &self.text)
            }
            _ => {
                self.frames_left -= 1;
                None
            }
        }
    }

    /// Whether the fit has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.frames_left > 0
    }

    /// The text this fit will measure.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
