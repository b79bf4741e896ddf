#![forbid(unsafe_code)]

//! tilefx: the tile visual-effects engine.
//!
//! A themed tile board carries a per-rank visual layer: each tile rank can
//! declare an animation (text reveal, flicker, drift, jitter), every label
//! is kept legible by a measurement-based font-size solver, and a board
//! overlay periodically darkens and decorates the whole board. This crate
//! ties the pieces together and re-exports the public surface:
//!
//! - [`tilefx_core`]: the render-target boundary the host adapts.
//! - [`tilefx_style`]: color modes and contrast outlines.
//! - [`tilefx_effects`]: the closed effect catalog and scheduling.
//! - [`tilefx_text`]: the tile and overlay font-size solvers.
//! - [`tilefx_config`]: the declarative JSON configuration.
//! - [`presenter`]: the glue driving all of it per frame.
//!
//! # Driving the engine
//! The engine is single-threaded and clock-agnostic: the host calls
//! [`TilePresenter::frame`] once per render frame with the current time in
//! milliseconds (a [`FrameClock`] provides one), and forwards resize
//! events to [`TilePresenter::note_resize`]. Everything else is internal
//! deadline chaining.

pub mod clock;
pub mod presenter;

pub use clock::FrameClock;
pub use presenter::{OverlayPresenter, TilePresenter};

pub use tilefx_config::{
    ConfigError, OverlayEntry, OverlaySequence, SlideTuning, TileSpec, TileVisualSpec,
    VisualConfig,
};
pub use tilefx_core::{
    Anchor, FillMode, FontOverride, FontSpec, Offset, Playback, RenderTarget, SharedTarget, Size,
    Span, TextProbe,
};
pub use tilefx_effects::{
    CycleState, Direction, EffectConfig, EffectHandle, EffectKind, EffectParams, KeyframeStore,
    UnknownEffect, VerticalTrack,
};
pub use tilefx_style::{ColorMode, ResolvedColor, Rgb, resolve};
pub use tilefx_text::{DeferredFit, RefitScheduler, TextFitter, fit_overlay};
