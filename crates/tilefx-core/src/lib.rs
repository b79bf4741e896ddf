#![forbid(unsafe_code)]

//! Core: the render-target boundary for the tilefx engine.
//!
//! # Role in tilefx
//! `tilefx-core` is the platform seam. Effect strategies, fitters, and
//! presenters talk to the visual surface exclusively through the traits in
//! this crate, so the whole engine runs unchanged against a browser adapter
//! or against the recording fakes used in tests.
//!
//! # This crate provides
//! - [`RenderTarget`] and [`Span`]: geometry reads and style writes on a
//!   tile's text layer (and its per-word slots).
//! - [`TextProbe`]: detached measurement of rendered text width at a
//!   reference font size.
//! - [`Playback`]: timing for a named, registered animation descriptor.
//! - Geometry primitives ([`Size`], [`Offset`], [`Anchor`]).
//! - `FakeTarget`/`FakeProbe` behind the `test-helpers` feature.
//!
//! # How it fits in the system
//! `tilefx-effects` drives [`Span`] writes from its per-instance schedulers,
//! `tilefx-text` reads geometry and writes font sizes, and the host adapter
//! implements these traits over its actual surface. Nothing in this crate
//! owns timers or allocates scheduling resources.

pub mod font;
pub mod geometry;
pub mod playback;
pub mod target;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

pub use font::{FontOverride, FontSpec};
pub use geometry::{Anchor, Offset, Size};
pub use playback::{FillMode, Playback};
pub use target::{RenderTarget, SharedTarget, Span, TextProbe};

#[cfg(any(test, feature = "test-helpers"))]
pub use fake::{FakeProbe, FakeTarget, FakeWord};
