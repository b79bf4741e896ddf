#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Tile geometry is measured in CSS pixels, so everything here is `f32`.
//! A [`Size`] read from a target that has not been laid out yet reports
//! zero dimensions; callers treat that as "skip this measurement pass".

/// Laid-out dimensions of a render target, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero size (target not laid out).
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Whether either dimension is zero or negative.
    ///
    /// Measurement passes skip degenerate targets instead of producing NaN.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A translation offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Horizontal displacement (positive = right).
    pub dx: f32,
    /// Vertical displacement (positive = down).
    pub dy: f32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Zero offset (no displacement).
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };
}

/// An anchor point within a tile, in percent of the tile's extent.
///
/// `(50, 50)` is the tile center. Effects that reposition text keep both
/// coordinates within `[20, 80]` so the text stays inside the tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Horizontal position, percent of tile width.
    pub x_pct: f32,
    /// Vertical position, percent of tile height.
    pub y_pct: f32,
}

impl Anchor {
    /// Create a new anchor.
    #[inline]
    pub const fn new(x_pct: f32, y_pct: f32) -> Self {
        Self { x_pct, y_pct }
    }

    /// The tile center.
    pub const CENTER: Self = Self {
        x_pct: 50.0,
        y_pct: 50.0,
    };
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}
