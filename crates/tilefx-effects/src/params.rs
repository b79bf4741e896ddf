#![forbid(unsafe_code)]

//! Strategy parameters.
//!
//! All fields are optional in configuration; serde fills the defaults from
//! the tables below. Every strategy additionally accepts the shared
//! [`TextParams`] (color mode plus one-shot font overrides), flattened
//! into its own parameter map.

use rand::Rng;
use serde::Deserialize;

use tilefx_core::{FontOverride, Span};
use tilefx_style::{ColorMode, resolve};

use crate::strategies::rise_fall::Direction;

/// Delay before any strategy's first phase, in milliseconds. Lets the
/// tile's own insertion/merge transition finish before the effect starts.
pub const DEFAULT_START_DELAY_MS: u64 = 310;

fn default_start_delay() -> u64 {
    DEFAULT_START_DELAY_MS
}

/// Shared text styling accepted by every strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextParams {
    /// Color mode: `"alternate"`, `"random"`, or a literal color string.
    pub text_color: Option<String>,
    /// Fallback literal color when `text_color` is unset.
    pub color: Option<String>,
    /// One-shot font size override.
    pub font_size: Option<String>,
    /// One-shot font weight override.
    pub font_weight: Option<String>,
    /// One-shot font family override.
    pub font_family: Option<String>,
}

impl TextParams {
    /// The color mode applied at effect start (`text_color`, falling back
    /// to the plain `color`).
    #[must_use]
    pub fn color_mode(&self) -> Option<ColorMode> {
        ColorMode::parse(self.text_color.as_deref().or(self.color.as_deref()))
    }

    /// The mode re-resolved at every cycle boundary. Only the dynamic
    /// modes (`alternate`, `random`) qualify; a literal re-applies the
    /// same value and is left alone after start.
    #[must_use]
    pub fn dynamic_mode(&self) -> Option<ColorMode> {
        ColorMode::parse(self.text_color.as_deref()).filter(ColorMode::is_dynamic)
    }

    /// Font overrides to apply once at start.
    #[must_use]
    pub fn font_override(&self) -> FontOverride {
        FontOverride {
            size: self.font_size.clone(),
            weight: self.font_weight.clone(),
            family: self.font_family.clone(),
        }
    }

    /// Apply the start-of-effect styling: font overrides plus the cycle-0
    /// color resolution.
    pub fn apply_base(&self, span: &mut dyn Span, rng: &mut impl Rng) {
        let font = self.font_override();
        if !font.is_empty() {
            span.apply_font(&font);
        }
        resolve(self.color_mode().as_ref(), 0, rng).apply_to(span);
    }
}

/// Parameters for [`EffectKind::AppearFade`](crate::EffectKind::AppearFade).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppearFadeParams {
    /// Total cycle length in milliseconds.
    pub duration: u64,
    /// Delay before the loop begins.
    pub start_delay: u64,
    /// Reveal each whitespace-separated word in its own time slot.
    pub word_by_word: bool,
    /// Shared text styling.
    #[serde(flatten)]
    pub text: TextParams,
}

impl Default for AppearFadeParams {
    fn default() -> Self {
        Self {
            duration: 2000,
            start_delay: default_start_delay(),
            word_by_word: false,
            text: TextParams::default(),
        }
    }
}

/// Parameters for [`EffectKind::Whackamole`](crate::EffectKind::Whackamole).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhackamoleParams {
    /// Milliseconds the text is visible per cycle.
    pub duration_on: u64,
    /// Milliseconds the tile is blank between appearances.
    pub duration_off: u64,
    /// Delay before the first appearance.
    pub start_delay: u64,
    /// Jitter both durations ±10% once per instance so sibling tiles
    /// drift out of phase.
    pub tiles_unsync: bool,
    /// Replace the steady-on interval with a linear fade to transparent.
    pub fade: bool,
    /// Shared text styling.
    #[serde(flatten)]
    pub text: TextParams,
}

impl Default for WhackamoleParams {
    fn default() -> Self {
        Self {
            duration_on: 2000,
            duration_off: 0,
            start_delay: default_start_delay(),
            tiles_unsync: false,
            fade: false,
            text: TextParams::default(),
        }
    }
}

/// Parameters for [`EffectKind::Flash`](crate::EffectKind::Flash).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlashParams {
    /// Milliseconds the text is visible.
    pub duration_on: u64,
    /// Milliseconds the text is hidden.
    pub duration_off: u64,
    /// Delay before the first flash.
    pub start_delay: u64,
    /// Shared text styling.
    #[serde(flatten)]
    pub text: TextParams,
}

impl Default for FlashParams {
    fn default() -> Self {
        Self {
            duration_on: 500,
            duration_off: 500,
            start_delay: default_start_delay(),
            text: TextParams::default(),
        }
    }
}

/// Parameters for [`EffectKind::RiseFall`](crate::EffectKind::RiseFall).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiseFallParams {
    /// Milliseconds for one full traversal or cycle.
    pub duration: u64,
    /// Direction mode.
    pub direction: Direction,
    /// Delay before motion begins (also lets layout settle so geometry
    /// reads return real values).
    pub start_delay: u64,
    /// Shared text styling.
    #[serde(flatten)]
    pub text: TextParams,
}

impl Default for RiseFallParams {
    fn default() -> Self {
        Self {
            duration: 3000,
            direction: Direction::Rise,
            start_delay: default_start_delay(),
            text: TextParams::default(),
        }
    }
}

/// Parameters for [`EffectKind::Vibrate`](crate::EffectKind::Vibrate).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VibrateParams {
    /// Maximum pixel displacement in x and y.
    pub amplitude: f64,
    /// Milliseconds per full shake cycle.
    pub speed: u64,
    /// Milliseconds to buzz before pausing; 0 means continuous.
    pub duration_on: u64,
    /// Milliseconds of stillness between buzzes.
    pub duration_off: u64,
    /// Delay before the buzz begins.
    pub start_delay: u64,
    /// Shared text styling.
    #[serde(flatten)]
    pub text: TextParams,
}

impl Default for VibrateParams {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            speed: 50,
            duration_on: 0,
            duration_off: 0,
            start_delay: default_start_delay(),
            text: TextParams::default(),
        }
    }
}
