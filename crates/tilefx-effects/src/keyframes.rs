#![forbid(unsafe_code)]

//! The keyframe descriptor registry.
//!
//! Strategies that animate declaratively (AppearFade, Vibrate) generate
//! their curves once and register them under a deterministic key; every
//! instance with the same parameters replays the same descriptor by name.
//! The store is append-only for the process lifetime.
//!
//! # Invariants
//!
//! 1. Registration is idempotent: `ensure` with a present key is a no-op
//!    and the builder is not invoked.
//! 2. A key never maps to two different stop sequences.
//! 3. Descriptors are never removed.

use std::cell::RefCell;

use ahash::AHashMap;
use tilefx_core::Offset;

/// The visual state at one stop of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyframeState {
    /// Opacity at this stop, if the curve animates opacity.
    pub opacity: Option<f32>,
    /// Translation at this stop, if the curve animates position.
    pub translate: Option<Offset>,
}

impl KeyframeState {
    /// A stop that only sets opacity.
    #[must_use]
    pub const fn opacity(value: f32) -> Self {
        Self {
            opacity: Some(value),
            translate: None,
        }
    }

    /// A stop that only sets translation.
    #[must_use]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self {
            opacity: None,
            translate: Some(Offset::new(dx, dy)),
        }
    }
}

/// One `(percent, state)` stop of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeStop {
    /// Position within the cycle, `0.0..=100.0`.
    pub percent: f32,
    /// Visual state at this position.
    pub state: KeyframeState,
}

impl KeyframeStop {
    /// Create a stop.
    #[must_use]
    pub const fn new(percent: f32, state: KeyframeState) -> Self {
        Self { percent, state }
    }
}

/// A registered, reusable animation curve. Identity is `key`; once
/// registered the stops are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeDescriptor {
    /// Registry key, deterministic in the generating parameters.
    pub key: String,
    /// Ordered stops of the curve.
    pub stops: Vec<KeyframeStop>,
}

/// Append-only store of generated descriptors.
///
/// Owned by the rendering layer and handed to strategies at start; the
/// engine is single-threaded, so registration is a plain idempotent map
/// write behind a `RefCell`.
#[derive(Debug, Default)]
pub struct KeyframeStore {
    entries: RefCell<AHashMap<String, KeyframeDescriptor>>,
}

impl KeyframeStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` if absent, invoking `builder` at most once.
    pub fn ensure(&self, key: &str, builder: impl FnOnce() -> Vec<KeyframeStop>) {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(key) {
            return;
        }
        let stops = builder();
        tracing::debug!(
            target: "tilefx.effect",
            key = %key,
            stops = stops.len(),
            "keyframe descriptor registered"
        );
        entries.insert(
            key.to_string(),
            KeyframeDescriptor {
                key: key.to_string(),
                stops,
            },
        );
    }

    /// Whether `key` has been registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// A copy of the descriptor registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<KeyframeDescriptor> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
