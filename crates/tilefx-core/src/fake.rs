#![forbid(unsafe_code)]

//! Recording fakes for the render boundary.
//!
//! [`FakeTarget`] records every style write so tests can assert on the
//! exact sequence of surface mutations an effect performs, without a real
//! layout engine. Geometry is whatever the test configures.

use std::cell::RefCell;
use std::rc::Rc;

use crate::font::{FontOverride, FontSpec};
use crate::geometry::{Anchor, Size};
use crate::playback::Playback;
use crate::target::{RenderTarget, SharedTarget, Span, TextProbe};

/// One word slot of a [`FakeTarget`].
#[derive(Debug, Clone, Default)]
pub struct FakeWord {
    /// The word this slot renders.
    pub text: String,
    /// Last color write, if any.
    pub color: Option<String>,
    /// Last outline write, if any.
    pub outline: Option<String>,
    /// Current visibility.
    pub visible: bool,
    /// Current opacity.
    pub opacity: f32,
    /// Font overrides applied at effect start.
    pub font_override: Option<FontOverride>,
    /// Active descriptor playback, if any.
    pub playing: Option<(String, Playback)>,
    /// How many times the slot was halted.
    pub halt_count: u32,
}

impl Span for FakeWord {
    fn set_color(&mut self, color: &str) {
        self.color = Some(color.to_string());
    }

    fn set_outline(&mut self, outline: &str) {
        self.outline = Some(outline.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_anchor(&mut self, _anchor: Anchor) {}

    fn set_top_offset(&mut self, _px: f32) {}

    fn apply_font(&mut self, font: &FontOverride) {
        self.font_override = Some(font.clone());
    }

    fn play(&mut self, descriptor_key: &str, playback: Playback) {
        self.playing = Some((descriptor_key.to_string(), playback));
    }

    fn halt(&mut self) {
        self.playing = None;
        self.halt_count += 1;
    }

    fn content_size(&self) -> Size {
        Size::ZERO
    }
}

/// A recording render target with test-configured geometry.
#[derive(Debug, Clone)]
pub struct FakeTarget {
    /// Laid-out tile size reported to the engine.
    pub layout: Size,
    /// Rendered content size reported to the engine.
    pub content: Size,
    /// When set, `content_size` scales `content` linearly with the current
    /// font size relative to this reference size, so fitter loops see the
    /// text shrink as they step the size down.
    pub content_reference_font: Option<f32>,
    /// Computed font reported to the engine.
    pub font: FontSpec,
    /// Current inline font size.
    pub font_size: Option<f32>,
    /// Stylesheet baseline restored when the inline size is cleared.
    pub baseline_font_size: Option<f32>,
    /// Current text content.
    pub text: String,
    /// Whether overflow clipping was requested.
    pub clipped: bool,
    /// Current visibility.
    pub visible: bool,
    /// Current opacity.
    pub opacity: f32,
    /// Last color write, if any.
    pub color: Option<String>,
    /// Last outline write, if any.
    pub outline: Option<String>,
    /// Last anchor write, if any.
    pub anchor: Option<Anchor>,
    /// Last vertical position write, if any.
    pub top_offset: Option<f32>,
    /// Font overrides applied at effect start.
    pub font_override: Option<FontOverride>,
    /// Active descriptor playback, if any.
    pub playing: Option<(String, Playback)>,
    /// How many times the target was halted.
    pub halt_count: u32,
    /// Word slots created by `split_words`.
    pub words: Vec<FakeWord>,
}

impl FakeTarget {
    /// A target with the given laid-out tile size and matching content size.
    #[must_use]
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            layout: Size::new(width, height),
            content: Size::new(width, height),
            content_reference_font: None,
            font: FontSpec::default(),
            font_size: None,
            baseline_font_size: None,
            text: String::new(),
            clipped: false,
            visible: true,
            opacity: 1.0,
            color: None,
            outline: None,
            anchor: None,
            top_offset: None,
            font_override: None,
            playing: None,
            halt_count: 0,
            words: Vec::new(),
        }
    }

    /// Override the rendered content size (builder pattern).
    #[must_use]
    pub fn with_content(mut self, width: f32, height: f32) -> Self {
        self.content = Size::new(width, height);
        self
    }

    /// Make the content size track the font size: `content` is the rendered
    /// size at `reference_font` px (builder pattern).
    #[must_use]
    pub fn with_scaled_content(mut self, width: f32, height: f32, reference_font: f32) -> Self {
        self.content = Size::new(width, height);
        self.content_reference_font = Some(reference_font);
        self
    }

    /// Set the stylesheet baseline font size (builder pattern).
    #[must_use]
    pub fn with_baseline_font_size(mut self, px: f32) -> Self {
        self.baseline_font_size = Some(px);
        self.font_size = Some(px);
        self
    }

    /// Wrap in a shared handle for effect instances.
    #[must_use]
    pub fn into_shared(self) -> (Rc<RefCell<FakeTarget>>, SharedTarget) {
        let concrete = Rc::new(RefCell::new(self));
        let shared: SharedTarget = concrete.clone();
        (concrete, shared)
    }
}

impl Span for FakeTarget {
    fn set_color(&mut self, color: &str) {
        self.color = Some(color.to_string());
    }

    fn set_outline(&mut self, outline: &str) {
        self.outline = Some(outline.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    fn set_top_offset(&mut self, px: f32) {
        self.top_offset = Some(px);
    }

    fn apply_font(&mut self, font: &FontOverride) {
        self.font_override = Some(font.clone());
    }

    fn play(&mut self, descriptor_key: &str, playback: Playback) {
        self.playing = Some((descriptor_key.to_string(), playback));
    }

    fn halt(&mut self) {
        self.playing = None;
        self.top_offset = None;
        self.halt_count += 1;
    }

    fn content_size(&self) -> Size {
        match (self.content_reference_font, self.font_size) {
            (Some(reference), Some(size)) if reference > 0.0 => Size::new(
                self.content.width * size / reference,
                self.content.height * size / reference,
            ),
            _ => self.content,
        }
    }
}

impl RenderTarget for FakeTarget {
    fn layout_size(&self) -> Size {
        self.layout
    }

    fn font(&self) -> FontSpec {
        self.font.clone()
    }

    fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    fn set_font_size(&mut self, px: Option<f32>) {
        self.font_size = match px {
            Some(v) => Some(v),
            None => self.baseline_font_size,
        };
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.words.clear();
    }

    fn set_clipped(&mut self, clipped: bool) {
        self.clipped = clipped;
    }

    fn split_words(&mut self, words: &[String]) {
        self.words = words
            .iter()
            .map(|w| FakeWord {
                text: w.clone(),
                visible: true,
                opacity: 1.0,
                ..FakeWord::default()
            })
            .collect();
    }

    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn word(&mut self, index: usize) -> Option<&mut dyn Span> {
        self.words.get_mut(index).map(|w| w as &mut dyn Span)
    }
}

/// A probe with synthetic, linear text metrics.
#[derive(Debug, Clone)]
pub struct FakeProbe {
    per_char: f32,
    fixed: Option<f32>,
    reference_size: f32,
}

impl FakeProbe {
    /// Every character advances `per_char` pixels at the reference size 100.
    #[must_use]
    pub fn per_char(per_char: f32) -> Self {
        Self {
            per_char,
            fixed: None,
            reference_size: 100.0,
        }
    }

    /// Every word measures exactly `width` pixels at the reference size 100.
    #[must_use]
    pub fn fixed(width: f32) -> Self {
        Self {
            per_char: 0.0,
            fixed: Some(width),
            reference_size: 100.0,
        }
    }
}

impl TextProbe for FakeProbe {
    fn measure_width(&self, text: &str, _font: &FontSpec, size_px: f32) -> f32 {
        let at_reference = match self.fixed {
            Some(w) => w,
            None => text.chars().count() as f32 * self.per_char,
        };
        at_reference * size_px / self.reference_size
    }
}
