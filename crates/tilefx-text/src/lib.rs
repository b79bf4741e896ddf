#![forbid(unsafe_code)]

//! Text fitting: the measurement-based font-size solvers.
//!
//! # Role in tilefx
//! Tile labels and the board overlay carry arbitrary text on surfaces of
//! arbitrary size. This crate keeps that text legible: [`TextFitter`]
//! solves a tile label's size in one geometric step from a detached probe
//! measurement, [`fit_overlay`] shrinks the overlay block iteratively
//! until it fits its container, and [`RefitScheduler`] coalesces resize
//! activity so live labels are refit once per burst instead of once per
//! event.
//!
//! # Failure Modes
//! Solvers never fail loudly. A degenerate (unlaid-out) surface or empty
//! text makes a fit call return `None` without touching the target; the
//! overlay floor accepts residual overflow.

pub mod deferred;
pub mod fitter;
pub mod overlay;
pub mod refit;

pub use deferred::DeferredFit;
pub use fitter::{MAX_TILE_FRACTION, MIN_TILE_TEXT_PX, PROBE_SIZE_PX, TextFitter};
pub use overlay::{
    OVERLAY_FALLBACK_PX, OVERLAY_FLOOR_PX, OVERLAY_HEIGHT_FRACTION, OVERLAY_WIDTH_FRACTION,
    fit_overlay,
};
pub use refit::{REFIT_COALESCE_MS, RefitScheduler};
