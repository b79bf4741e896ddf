#![forbid(unsafe_code)]

//! The render-target boundary.
//!
//! Everything the engine needs from its visual surface is expressed here:
//! geometry reads, style writes, and playback of named animation
//! descriptors. The traits are deliberately narrow (no node creation, no
//! event wiring, no layout control) so a host adapter stays thin and the
//! engine stays testable against fakes.
//!
//! # Invariants
//!
//! 1. Style writes are idempotent: re-applying the same value is a no-op at
//!    this boundary.
//! 2. `layout_size` and `content_size` report zero dimensions until the
//!    surface has laid the target out; callers skip measurement then.
//! 3. `halt` releases any descriptor playback the span currently owns and
//!    resets its transform. Halting an idle span is a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use crate::font::{FontOverride, FontSpec};
use crate::geometry::{Anchor, Size};
use crate::playback::Playback;

/// A style surface an effect can drive: either a tile's whole text layer or
/// one of its per-word slots.
pub trait Span {
    /// Set the text color (a surface-level color string, unvalidated).
    fn set_color(&mut self, color: &str);

    /// Set the contrast outline (a surface-level shadow string).
    fn set_outline(&mut self, outline: &str);

    /// Show or hide the span without touching opacity.
    fn set_visible(&mut self, visible: bool);

    /// Set opacity in `[0.0, 1.0]`.
    fn set_opacity(&mut self, opacity: f32);

    /// Reposition the span at a percent anchor within its tile.
    fn set_anchor(&mut self, anchor: Anchor);

    /// Set the span's absolute vertical position within its tile, in pixels
    /// from the tile top.
    fn set_top_offset(&mut self, px: f32);

    /// Apply one-shot font overrides.
    fn apply_font(&mut self, font: &FontOverride);

    /// Play a registered animation descriptor on this span.
    ///
    /// Replaces any playback the span already owns.
    fn play(&mut self, descriptor_key: &str, playback: Playback);

    /// Stop descriptor playback and reset the span's transform.
    fn halt(&mut self);

    /// Rendered size of the span's content, in pixels.
    fn content_size(&self) -> Size;
}

/// A tile's text layer: a [`Span`] plus geometry, font, and text access,
/// and optional per-word slots for word-by-word effects.
pub trait RenderTarget: Span {
    /// Laid-out size of the tile, from the layout system (not the animated
    /// or scale-transformed size).
    fn layout_size(&self) -> Size;

    /// The computed font family and weight.
    fn font(&self) -> FontSpec;

    /// The current inline font size in pixels, if one has been set.
    fn font_size(&self) -> Option<f32>;

    /// Set the inline font size; `None` resets to the stylesheet baseline.
    fn set_font_size(&mut self, px: Option<f32>);

    /// Current text content.
    fn text(&self) -> String;

    /// Replace the text content, discarding any word slots.
    fn set_text(&mut self, text: &str);

    /// Clip content that leaves the tile bounds (rise/fall traversal).
    fn set_clipped(&mut self, clipped: bool);

    /// Replace the content with stacked word slots, one per word, each an
    /// independently styleable [`Span`].
    fn split_words(&mut self, words: &[String]);

    /// Number of word slots created by [`split_words`](Self::split_words).
    fn word_count(&self) -> usize;

    /// Access one word slot's style surface.
    fn word(&mut self, index: usize) -> Option<&mut dyn Span>;
}

/// Shared handle to a render target.
///
/// The engine is single-threaded and cooperative; effect instances and the
/// presenter share targets through `Rc<RefCell<..>>`.
pub type SharedTarget = Rc<RefCell<dyn RenderTarget>>;

/// Detached text measurement at a reference font size.
///
/// The probe never touches the live tree; it exists purely to compute a
/// geometric scale factor for the text fitter.
pub trait TextProbe {
    /// Width in pixels of `text` rendered with `font` at `size_px`.
    fn measure_width(&self, text: &str, font: &FontSpec, size_px: f32) -> f32;
}
