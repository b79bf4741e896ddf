#![forbid(unsafe_code)]

//! Whackamole: text snaps visible at a random anchor inside the tile,
//! holds for `duration_on` ms, snaps invisible, waits `duration_off` ms,
//! then reappears somewhere else.
//!
//! With `tiles_unsync`, both durations receive an independent ±10% jitter
//! rolled once at start, so sibling tiles sharing a configuration drift
//! out of phase over time. With `fade`, the hold interval becomes a
//! per-frame linear fade from opaque to transparent.

use rand::Rng;
use rand::rngs::SmallRng;

use tilefx_core::{Anchor, SharedTarget};
use tilefx_style::resolve;

use crate::cycle::CycleState;
use crate::handle::EffectInstance;
use crate::params::WhackamoleParams;

/// Anchor range keeping the text inside the tile.
const ANCHOR_MIN_PCT: f32 = 20.0;
const ANCHOR_MAX_PCT: f32 = 80.0;

/// Scale `base` by a uniform factor in `0.9..=1.1`, rounded to whole
/// milliseconds. Rolled once per instance, not per cycle.
pub(crate) fn jitter(base: u64, rng: &mut impl Rng) -> u64 {
    (base as f64 * rng.random_range(0.9..=1.1)).round() as u64
}

enum Phase {
    Waiting,
    Shown { since: u64 },
    Hidden,
}

struct Whackamole {
    target: SharedTarget,
    params: WhackamoleParams,
    rng: SmallRng,
    cycle: CycleState,
    duration_on: u64,
    duration_off: u64,
    phase: Phase,
    deadline: u64,
}

pub(crate) fn start(
    target: SharedTarget,
    params: WhackamoleParams,
    mut rng: SmallRng,
    now_ms: u64,
) -> Box<dyn EffectInstance> {
    {
        let mut tile = target.borrow_mut();
        params.text.apply_base(&mut *tile, &mut rng);
        tile.set_visible(false);
        tile.set_opacity(1.0);
    }
    let (duration_on, duration_off) = if params.tiles_unsync {
        (
            jitter(params.duration_on, &mut rng),
            jitter(params.duration_off, &mut rng),
        )
    } else {
        (params.duration_on, params.duration_off)
    };
    let deadline = now_ms + params.start_delay;
    Box::new(Whackamole {
        target,
        params,
        rng,
        cycle: CycleState::new(),
        duration_on,
        duration_off,
        phase: Phase::Waiting,
        deadline,
    })
}

impl Whackamole {
    fn show(&mut self, at: u64) {
        let mut tile = self.target.borrow_mut();
        tile.set_anchor(Anchor::new(
            self.rng.random_range(ANCHOR_MIN_PCT..ANCHOR_MAX_PCT),
            self.rng.random_range(ANCHOR_MIN_PCT..ANCHOR_MAX_PCT),
        ));
        if let Some(mode) = self.params.text.dynamic_mode() {
            resolve(Some(&mode), self.cycle.next(), &mut self.rng).apply_to(&mut *tile);
        }
        tile.set_opacity(1.0);
        tile.set_visible(true);
        self.phase = Phase::Shown { since: at };
        self.deadline = at + self.duration_on.max(1);
    }

    fn hide(&mut self, at: u64) {
        {
            let mut tile = self.target.borrow_mut();
            tile.set_opacity(1.0);
            tile.set_visible(false);
        }
        if self.duration_off == 0 {
            // Back-to-back cycles; reappear immediately at a new anchor.
            self.show(at);
        } else {
            self.phase = Phase::Hidden;
            self.deadline = at + self.duration_off;
        }
    }
}

impl EffectInstance for Whackamole {
    fn advance(&mut self, now_ms: u64) {
        while now_ms >= self.deadline {
            let at = self.deadline;
            match self.phase {
                Phase::Waiting | Phase::Hidden => self.show(at),
                Phase::Shown { .. } => self.hide(at),
            }
        }
        if self.params.fade {
            if let Phase::Shown { since } = self.phase {
                let elapsed = now_ms.saturating_sub(since) as f32;
                let opacity = (1.0 - elapsed / self.duration_on.max(1) as f32).clamp(0.0, 1.0);
                self.target.borrow_mut().set_opacity(opacity);
            }
        }
    }

    fn stop(&mut self) {
        self.target.borrow_mut().set_opacity(1.0);
    }

    fn next_deadline(&self) -> Option<u64> {
        Some(self.deadline)
    }

    fn wants_frames(&self) -> bool {
        self.params.fade && matches!(self.phase, Phase::Shown { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tilefx_core::FakeTarget;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11)
    }

    fn params(on: u64, off: u64) -> WhackamoleParams {
        WhackamoleParams {
            duration_on: on,
            duration_off: off,
            start_delay: 0,
            ..WhackamoleParams::default()
        }
    }

    #[test]
    fn jitter_stays_within_ten_percent() {
        let mut r = rng();
        for _ in 0..1000 {
            let v = jitter(2000, &mut r);
            assert!((1800..=2200).contains(&v), "jittered to {v}");
        }
    }

    #[test]
    fn anchor_moves_between_appearances() {
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let mut fx = start(shared, params(100, 100), rng(), 0);

        fx.advance(50);
        let first = fake.borrow().anchor.expect("anchored on show");
        assert!((ANCHOR_MIN_PCT..ANCHOR_MAX_PCT).contains(&first.x_pct));
        assert!((ANCHOR_MIN_PCT..ANCHOR_MAX_PCT).contains(&first.y_pct));

        fx.advance(250);
        let second = fake.borrow().anchor.expect("anchored on reappear");
        assert!(first.x_pct != second.x_pct || first.y_pct != second.y_pct);
    }

    #[test]
    fn visibility_follows_the_on_off_cadence() {
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let mut fx = start(shared, params(100, 100), rng(), 0);

        fx.advance(50);
        assert!(fake.borrow().visible);
        fx.advance(150);
        assert!(!fake.borrow().visible);
        fx.advance(250);
        assert!(fake.borrow().visible);
    }

    #[test]
    fn zero_duration_off_reappears_without_a_blank_phase() {
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let mut fx = start(shared, params(100, 0), rng(), 0);

        fx.advance(150);
        // The hide at 100ms chains straight into the next show.
        assert!(fake.borrow().visible);
        assert_eq!(fx.next_deadline(), Some(200));
    }

    #[test]
    fn fade_mode_ramps_opacity_down_over_the_visible_phase() {
        let p = WhackamoleParams {
            fade: true,
            ..params(1000, 100)
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let mut fx = start(shared, p, rng(), 0);

        fx.advance(0);
        assert!(fx.wants_frames());
        assert_eq!(fake.borrow().opacity, 1.0);
        fx.advance(500);
        assert!((fake.borrow().opacity - 0.5).abs() < 1e-6);
        fx.advance(999);
        assert!(fake.borrow().opacity < 0.01);

        // Hidden phase snaps opacity back for the next appearance.
        fx.advance(1050);
        assert_eq!(fake.borrow().opacity, 1.0);
        assert!(!fake.borrow().visible);
        assert!(!fx.wants_frames());
    }

    #[test]
    fn unsynced_instances_jitter_their_cadence_once() {
        let p = WhackamoleParams {
            tiles_unsync: true,
            ..params(1000, 500)
        };
        let (_fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let fx = start(shared, p, rng(), 0);
        drop(fx);
        // Cadence bounds are covered by jitter_stays_within_ten_percent; this
        // exercises the unsync path end to end.
    }

    #[test]
    fn stop_clears_residual_fade_opacity() {
        let p = WhackamoleParams {
            fade: true,
            ..params(1000, 100)
        };
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        let mut fx = start(shared, p, rng(), 0);
        fx.advance(800);
        assert!(fake.borrow().opacity < 0.5);
        fx.stop();
        assert_eq!(fake.borrow().opacity, 1.0);
    }
}
