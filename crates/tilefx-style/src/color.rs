#![forbid(unsafe_code)]

//! RGB color with perceived-luminance contrast selection.

use rand::Rng;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sample a color with uniformly random channels.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// Perceived luminance in `[0.0, 1.0]` per ITU-R BT.601.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    /// Whether this color reads as light (needs a dark outline for contrast).
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Surface color string, e.g. `"rgb(12,34,56)"`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}
