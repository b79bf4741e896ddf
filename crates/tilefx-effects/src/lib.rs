#![forbid(unsafe_code)]

//! Effects: the tile visual-effects engine.
//!
//! # Role in tilefx
//! This crate owns everything that moves: the closed catalog of named
//! animation strategies, the per-instance scheduling that drives them, and
//! the process-wide registry of generated keyframe descriptors.
//!
//! # This crate provides
//! - [`EffectKind`]: the closed strategy catalog (`AppearFade`,
//!   `Whackamole`, `Flash`, `RiseFall`, `Vibrate`), resolved from config
//!   names once at load time.
//! - [`EffectConfig::start`]: the uniform entry point. Hand it a render
//!   target and it returns a live [`EffectHandle`].
//! - [`EffectHandle`]: exclusive owner of one instance's scheduling
//!   resources; `stop()` (or drop) releases every pending deadline and any
//!   descriptor playback.
//! - [`KeyframeStore`]: idempotent, append-only descriptor registry shared
//!   by all instances.
//!
//! # Scheduling model
//! The engine is single-threaded and cooperative. Strategies never own
//! real timers; they chain deadlines in milliseconds and the host pumps
//! every live handle with [`EffectHandle::advance`] once per frame (or
//! whenever its earliest [`EffectHandle::next_deadline`] is due). Within
//! one handle, phase transitions are strictly sequential: each phase
//! schedules the next, so a phase never begins before the prior phase's
//! configured duration has elapsed. Across handles nothing is ordered;
//! every tile drifts on its own.

pub mod cycle;
pub mod handle;
pub mod keyframes;
pub mod params;
pub mod registry;
pub mod strategies;

pub use cycle::CycleState;
pub use handle::{EffectHandle, EffectInstance};
pub use keyframes::{KeyframeDescriptor, KeyframeState, KeyframeStop, KeyframeStore};
pub use params::{
    AppearFadeParams, FlashParams, RiseFallParams, TextParams, VibrateParams, WhackamoleParams,
};
pub use registry::{EffectConfig, EffectKind, EffectParams, UnknownEffect};
pub use strategies::rise_fall::{Direction, VerticalTrack, position};
