#![forbid(unsafe_code)]

//! RiseFall: vertical text motion in four direction modes.
//!
//! - `rise` travels from below the tile bottom to above the tile top at
//!   constant speed, looping, clipped at the tile edges.
//! - `fall` is the same traversal top to bottom.
//! - `bounce` keeps the text fully inside the tile and reverses instantly
//!   at each edge (triangle wave).
//! - `sin` keeps the text inside the tile on a cosine curve so the motion
//!   eases at each edge.
//!
//! Geometry is measured after the start delay so the tile is laid out
//! before its dimensions are read; a target reporting zero height defers
//! measurement to the next frame. The position function itself is pure,
//! so every curve is testable without a surface.

use std::f32::consts::TAU;

use rand::rngs::SmallRng;
use serde::Deserialize;

use tilefx_core::SharedTarget;
use tilefx_style::resolve;

use crate::cycle::CycleState;
use crate::handle::EffectInstance;
use crate::params::RiseFallParams;

// ---------------------------------------------------------------------------
// Pure motion math
// ---------------------------------------------------------------------------

/// Direction mode of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Bottom-to-top traversal through the tile, looping.
    #[default]
    Rise,
    /// Top-to-bottom traversal through the tile, looping.
    Fall,
    /// Constant-speed oscillation between the tile edges.
    Bounce,
    /// Cosine oscillation between the tile edges.
    Sin,
}

/// The vertical positions a traversal moves between, in pixels from the
/// tile top, derived from the tile and text heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalTrack {
    /// Text flush with the tile top, fully visible.
    pub top_in: f32,
    /// Text flush with the tile bottom, fully visible.
    pub bottom_in: f32,
    /// Text entirely above the tile, hidden.
    pub above: f32,
    /// Text entirely below the tile, hidden.
    pub below: f32,
    /// Text vertically centered.
    pub center: f32,
}

impl VerticalTrack {
    /// Derive the track from tile and text heights.
    #[must_use]
    pub fn new(tile_height: f32, text_height: f32) -> Self {
        Self {
            top_in: 0.0,
            bottom_in: tile_height - text_height,
            above: -text_height,
            below: tile_height,
            center: (tile_height - text_height) / 2.0,
        }
    }
}

/// Vertical position at `elapsed_ms` into a loop of `duration_ms`.
#[must_use]
pub fn position(
    elapsed_ms: u64,
    duration_ms: u64,
    direction: Direction,
    track: &VerticalTrack,
) -> f32 {
    let duration = duration_ms.max(1);
    let t = (elapsed_ms % duration) as f32 / duration as f32;
    match direction {
        Direction::Rise => track.below + t * (track.above - track.below),
        Direction::Fall => track.above + t * (track.below - track.above),
        Direction::Bounce => {
            let frac = if t < 0.5 { t * 2.0 } else { 2.0 - t * 2.0 };
            track.bottom_in * (1.0 - frac) + track.top_in * frac
        }
        Direction::Sin => {
            let amplitude = (track.bottom_in - track.top_in) / 2.0;
            // Not reduced modulo the duration: the cosine phase carries
            // across loops on elapsed time directly.
            let phase = TAU * elapsed_ms as f32 / duration as f32;
            track.center + amplitude * phase.cos()
        }
    }
}

// ---------------------------------------------------------------------------
// Instance
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Phase {
    Waiting { deadline: u64 },
    Running { since: u64, track: Option<VerticalTrack> },
}

struct RiseFall {
    target: SharedTarget,
    params: RiseFallParams,
    rng: SmallRng,
    cycle: CycleState,
    phase: Phase,
}

pub(crate) fn start(
    target: SharedTarget,
    params: RiseFallParams,
    mut rng: SmallRng,
    now_ms: u64,
) -> Box<dyn EffectInstance> {
    {
        let mut tile = target.borrow_mut();
        params.text.apply_base(&mut *tile, &mut rng);
        if matches!(params.direction, Direction::Rise | Direction::Fall) {
            tile.set_clipped(true);
        }
        tile.set_visible(false);
    }
    let deadline = now_ms + params.start_delay;
    Box::new(RiseFall {
        target,
        params,
        rng,
        cycle: CycleState::new(),
        phase: Phase::Waiting { deadline },
    })
}

impl RiseFall {
    /// Read geometry and make the text visible. Returns `None` while the
    /// target reports a degenerate layout.
    fn measure(&mut self) -> Option<VerticalTrack> {
        let mut tile = self.target.borrow_mut();
        let layout = tile.layout_size();
        if layout.is_degenerate() {
            return None;
        }
        let track = VerticalTrack::new(layout.height, tile.content_size().height);
        tile.set_visible(true);
        Some(track)
    }
}

impl EffectInstance for RiseFall {
    fn advance(&mut self, now_ms: u64) {
        if let Phase::Waiting { deadline } = self.phase {
            if now_ms < deadline {
                return;
            }
            let track = self.measure();
            self.phase = Phase::Running {
                since: now_ms,
                track,
            };
        }
        let Phase::Running { mut since, track } = self.phase else {
            return;
        };
        let track = match track {
            Some(t) => t,
            None => {
                // Layout arrived late; the traversal clock starts now.
                let Some(t) = self.measure() else { return };
                since = now_ms;
                self.phase = Phase::Running {
                    since,
                    track: Some(t),
                };
                t
            }
        };
        let elapsed = now_ms.saturating_sub(since);
        if let Some(index) = self.cycle.roll(elapsed, self.params.duration) {
            if let Some(mode) = self.params.text.dynamic_mode() {
                let mut tile = self.target.borrow_mut();
                resolve(Some(&mode), index, &mut self.rng).apply_to(&mut *tile);
            }
        }
        let top = position(elapsed, self.params.duration, self.params.direction, &track);
        self.target.borrow_mut().set_top_offset(top);
    }

    fn stop(&mut self) {
        self.target.borrow_mut().halt();
    }

    fn next_deadline(&self) -> Option<u64> {
        match self.phase {
            Phase::Waiting { deadline } => Some(deadline),
            Phase::Running { .. } => None,
        }
    }

    fn wants_frames(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use tilefx_core::FakeTarget;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(3)
    }

    fn track() -> VerticalTrack {
        // 100px tile, 20px text.
        VerticalTrack::new(100.0, 20.0)
    }

    #[test]
    fn track_positions_derive_from_the_heights() {
        let t = track();
        assert_eq!(t.top_in, 0.0);
        assert_eq!(t.bottom_in, 80.0);
        assert_eq!(t.above, -20.0);
        assert_eq!(t.below, 100.0);
        assert_eq!(t.center, 40.0);
    }

    #[test]
    fn rise_travels_from_below_to_above() {
        let t = track();
        assert_eq!(position(0, 1000, Direction::Rise, &t), 100.0);
        assert_eq!(position(500, 1000, Direction::Rise, &t), 40.0);
        // The loop wraps before reaching `above` exactly.
        assert_eq!(position(1000, 1000, Direction::Rise, &t), 100.0);
    }

    #[test]
    fn fall_mirrors_rise() {
        let t = track();
        assert_eq!(position(0, 1000, Direction::Fall, &t), -20.0);
        assert_eq!(position(500, 1000, Direction::Fall, &t), 40.0);
    }

    #[test]
    fn bounce_reverses_at_the_edges() {
        let t = track();
        assert_eq!(position(0, 1000, Direction::Bounce, &t), 80.0);
        assert_eq!(position(500, 1000, Direction::Bounce, &t), 0.0);
        assert_eq!(position(250, 1000, Direction::Bounce, &t), 40.0);
        assert_eq!(position(750, 1000, Direction::Bounce, &t), 40.0);
    }

    #[test]
    fn sin_starts_at_the_bottom_and_eases_to_the_top() {
        let t = track();
        let bottom = position(0, 1000, Direction::Sin, &t);
        assert!((bottom - 80.0).abs() < 1e-3);
        let top = position(500, 1000, Direction::Sin, &t);
        assert!((top - 0.0).abs() < 1e-3);
        let back = position(1000, 1000, Direction::Sin, &t);
        assert!((back - 80.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn bounce_and_sin_stay_inside_the_tile(elapsed in 0u64..60_000) {
            let t = track();
            for direction in [Direction::Bounce, Direction::Sin] {
                let top = position(elapsed, 3000, direction, &t);
                prop_assert!(top >= t.top_in - 1e-3);
                prop_assert!(top <= t.bottom_in + 1e-3);
            }
        }

        #[test]
        fn rise_and_fall_stay_on_the_traversal(elapsed in 0u64..60_000) {
            let t = track();
            for direction in [Direction::Rise, Direction::Fall] {
                let top = position(elapsed, 3000, direction, &t);
                prop_assert!(top >= t.above - 1e-3);
                prop_assert!(top <= t.below + 1e-3);
            }
        }
    }

    #[test]
    fn direction_names_deserialize_lowercase() {
        for (name, expected) in [
            ("rise", Direction::Rise),
            ("fall", Direction::Fall),
            ("bounce", Direction::Bounce),
            ("sin", Direction::Sin),
        ] {
            let parsed: Direction =
                serde_json::from_value(serde_json::Value::String(name.to_string())).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn measurement_waits_for_the_start_delay() {
        let params = RiseFallParams {
            start_delay: 310,
            ..RiseFallParams::default()
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0)
            .with_content(60.0, 20.0)
            .into_shared();
        let mut fx = start(shared, params, rng(), 0);

        assert!(!fake.borrow().visible);
        fx.advance(100);
        assert_eq!(fake.borrow().top_offset, None);

        fx.advance(310);
        assert!(fake.borrow().visible);
        // rise starts at `below`.
        assert_eq!(fake.borrow().top_offset, Some(100.0));
    }

    #[test]
    fn rise_clips_and_moves_the_text_upward() {
        let params = RiseFallParams {
            duration: 1000,
            start_delay: 0,
            ..RiseFallParams::default()
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0)
            .with_content(60.0, 20.0)
            .into_shared();
        let mut fx = start(shared, params, rng(), 0);

        assert!(fake.borrow().clipped);
        fx.advance(0);
        fx.advance(500);
        assert_eq!(fake.borrow().top_offset, Some(40.0));
        fx.advance(750);
        assert_eq!(fake.borrow().top_offset, Some(10.0));
    }

    #[test]
    fn bounce_does_not_clip() {
        let params = RiseFallParams {
            direction: Direction::Bounce,
            start_delay: 0,
            ..RiseFallParams::default()
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0)
            .with_content(60.0, 20.0)
            .into_shared();
        let _fx = start(shared, params, rng(), 0);
        assert!(!fake.borrow().clipped);
    }

    #[test]
    fn degenerate_layout_defers_measurement() {
        let params = RiseFallParams {
            start_delay: 0,
            ..RiseFallParams::default()
        };
        let (fake, shared) = FakeTarget::sized(0.0, 0.0).into_shared();
        let mut fx = start(shared, params, rng(), 0);

        fx.advance(0);
        fx.advance(100);
        assert!(!fake.borrow().visible);
        assert_eq!(fake.borrow().top_offset, None);

        // Layout arrives; the traversal clock starts from this frame.
        {
            let mut t = fake.borrow_mut();
            t.layout = tilefx_core::Size::new(100.0, 100.0);
            t.content = tilefx_core::Size::new(60.0, 20.0);
        }
        fx.advance(200);
        assert!(fake.borrow().visible);
        assert_eq!(fake.borrow().top_offset, Some(100.0));
    }

    #[test]
    fn stop_halts_the_surface() {
        let params = RiseFallParams {
            start_delay: 0,
            ..RiseFallParams::default()
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0)
            .with_content(60.0, 20.0)
            .into_shared();
        let mut fx = start(shared, params, rng(), 0);
        fx.advance(100);
        assert!(fake.borrow().top_offset.is_some());
        fx.stop();
        assert_eq!(fake.borrow().top_offset, None);
        assert_eq!(fake.borrow().halt_count, 1);
    }
}
