#![forbid(unsafe_code)]

//! Slide-transition tuning.
//!
//! Carried as data for the page layer, which owns the actual transition
//! styling. The `"inertia"` shorthand maps to a concrete ease-in curve;
//! any other value passes through verbatim for the surface to interpret.

use serde::Deserialize;

/// The curve behind the `"inertia"` shorthand: slow start, accelerating.
pub const INERTIA_TIMING_FUNCTION: &str = "cubic-bezier(0.55, 0.055, 0.675, 0.19)";

/// Tile slide speed and easing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideTuning {
    /// Duration of the tile-move transition in milliseconds.
    #[serde(rename = "slideSpeed")]
    pub speed_ms: u64,
    /// Timing-function name or shorthand.
    #[serde(rename = "slideEasing")]
    pub easing: String,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            speed_ms: 100,
            easing: "ease-in-out".to_string(),
        }
    }
}

impl SlideTuning {
    /// The concrete timing function for the configured easing.
    #[must_use]
    pub fn timing_function(&self) -> &str {
        match self.easing.as_str() {
            "inertia" => INERTIA_TIMING_FUNCTION,
            other => other,
        }
    }

    /// Appear/pop duration scaled to the slide speed, so a new tile pops
    /// only after its slide lands.
    #[must_use]
    pub fn pop_duration_ms(&self) -> u64 {
        self.speed_ms * 2
    }

    /// Whether this matches the stylesheet defaults, in which case the
    /// page layer skips its override entirely.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
