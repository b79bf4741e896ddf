#![forbid(unsafe_code)]

//! The tile-label solver.
//!
//! One geometric step, no iteration: probe every word at a fixed large
//! reference size, then scale so the widest word occupies 80% of the tile
//! width. The laid-out width is used, never the animated or
//! scale-transformed width, so a tile mid-pop still fits correctly.

use tilefx_core::{RenderTarget, TextProbe};

/// Reference size words are probed at; the solver is purely geometric, so
/// any fixed large value works. Matches the probe contract.
pub const PROBE_SIZE_PX: f32 = 100.0;

/// Lower clamp on the solved size.
pub const MIN_TILE_TEXT_PX: f32 = 6.0;

/// Upper clamp as a fraction of tile width. Scales across screen sizes
/// without referencing stylesheet sizes, which are unreliable for targets
/// measured in the same frame they were inserted.
pub const MAX_TILE_FRACTION: f32 = 0.38;

/// Fraction of the tile width budgeted for the widest word.
const WIDTH_BUDGET: f32 = 0.8;

/// Solves tile-label font sizes against a [`TextProbe`].
#[derive(Debug, Clone)]
pub struct TextFitter<P> {
    probe: P,
}

impl<P: TextProbe> TextFitter<P> {
    /// A fitter measuring with `probe`.
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Fit `text` on `target`, writing and returning the solved size.
    ///
    /// Returns `None` without touching the target when the target has no
    /// laid-out width yet or the text has no measurable word.
    pub fn fit(&self, target: &mut dyn RenderTarget, text: &str) -> Option<f32> {
        let width = target.layout_size().width;
        if width <= 0.0 {
            return None;
        }

        let font = target.font();
        let max_width = text
            .split_whitespace()
            .map(|word| self.probe.measure_width(word, &font, PROBE_SIZE_PX))
            .fold(0.0f32, f32::max);
        if max_width <= 0.0 {
            return None;
        }

        // Size at which the widest word fills exactly the width budget.
        let target_size = PROBE_SIZE_PX * (WIDTH_BUDGET * width) / max_width;
        let size = target_size
            .min(MAX_TILE_FRACTION * width)
            .max(MIN_TILE_TEXT_PX)
            .floor();

        tracing::debug!(
            target: "tilefx.fit",
            tile_width = width,
            max_word_width = max_width,
            size,
            "tile label fitted"
        );
        target.set_font_size(Some(size));
        Some(size)
    }
}
