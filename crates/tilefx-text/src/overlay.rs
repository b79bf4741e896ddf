#![forbid(unsafe_code)]

//! The board-overlay solver.
//!
//! The overlay text block wraps, so a single probe measurement cannot
//! predict its rendered extent. Instead the solver resets to the baseline
//! size and steps down 1px at a time, re-measuring the rendered block
//! after each step, until the block fits the visible overlay area or the
//! floor is reached.

use tilefx_core::RenderTarget;

/// Fraction of the container width available to the text block.
pub const OVERLAY_WIDTH_FRACTION: f32 = 0.90;

/// Fraction of the container height available to the text block.
pub const OVERLAY_HEIGHT_FRACTION: f32 = 0.85;

/// Baseline size used when the target reports none.
pub const OVERLAY_FALLBACK_PX: f32 = 72.0;

/// Smallest size the solver will apply. The loop stops here even if the
/// text still overflows.
pub const OVERLAY_FLOOR_PX: f32 = 8.0;

/// Shrink `text` until its rendered block fits the visible area of
/// `container`, returning the applied size.
///
/// Returns `None` without touching the text target when the container has
/// no laid-out extent.
pub fn fit_overlay(container: &dyn RenderTarget, text: &mut dyn RenderTarget) -> Option<f32> {
    let bounds = container.layout_size();
    if bounds.is_degenerate() {
        return None;
    }
    let max_width = bounds.width * OVERLAY_WIDTH_FRACTION;
    let max_height = bounds.height * OVERLAY_HEIGHT_FRACTION;

    // Always start from the same stylesheet baseline.
    text.set_font_size(None);
    let mut size = text.font_size().unwrap_or(OVERLAY_FALLBACK_PX);

    loop {
        text.set_font_size(Some(size));
        let rendered = text.content_size();
        let fits = rendered.width <= max_width && rendered.height <= max_height;
        if fits || size <= OVERLAY_FLOOR_PX {
            if !fits {
                tracing::debug!(
                    target: "tilefx.fit",
                    size,
                    "overlay text still overflows at the floor"
                );
            }
            return Some(size);
        }
        size -= 1.0;
    }
}
