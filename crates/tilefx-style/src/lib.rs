#![forbid(unsafe_code)]

//! Style: text-color resolution for tile effects.
//!
//! # Role in tilefx
//! `tilefx-style` is the shared color vocabulary. Effect strategies resolve
//! a configured color mode into a concrete color plus an optional contrast
//! outline once per cycle; this crate owns that resolution and nothing else.
//!
//! # This crate provides
//! - [`ColorMode`]: the three ways a tile can specify its text color
//!   (alternating, random, or a literal surface color string).
//! - [`ResolvedColor`]: a fresh color/outline pair per query.
//! - [`Rgb`] with BT.601 perceived-luminance contrast selection.
//!
//! # How it fits in the system
//! `tilefx-effects` calls [`resolve`] at effect start and at every cycle
//! boundary for the dynamic modes. Literal color strings pass through
//! unvalidated; the surface silently ignores values it cannot parse.

pub mod color;
pub mod resolver;

pub use color::Rgb;
pub use resolver::{ColorMode, DARK_OUTLINE, LIGHT_OUTLINE, ResolvedColor, resolve};
