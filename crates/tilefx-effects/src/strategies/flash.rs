#![forbid(unsafe_code)]

//! Flash: centered text snaps on for `duration_on` ms, off for
//! `duration_off` ms, repeating indefinitely. No movement, no fading.
//!
//! Deadlines chain from each other, not from the pump timestamp, so the
//! cadence stays exact even when the host pumps late. A dynamic color mode
//! re-resolves at the start of every visible phase.

use rand::rngs::SmallRng;

use tilefx_core::SharedTarget;
use tilefx_style::resolve;

use crate::cycle::CycleState;
use crate::handle::EffectInstance;
use crate::params::FlashParams;

enum Phase {
    Waiting,
    On,
    Off,
}

struct Flash {
    target: SharedTarget,
    params: FlashParams,
    rng: SmallRng,
    cycle: CycleState,
    phase: Phase,
    deadline: u64,
}

pub(crate) fn start(
    target: SharedTarget,
    params: FlashParams,
    mut rng: SmallRng,
    now_ms: u64,
) -> Box<dyn EffectInstance> {
    {
        let mut tile = target.borrow_mut();
        params.text.apply_base(&mut *tile, &mut rng);
        tile.set_visible(false);
    }
    let deadline = now_ms + params.start_delay;
    Box::new(Flash {
        target,
        params,
        rng,
        cycle: CycleState::new(),
        phase: Phase::Waiting,
        deadline,
    })
}

impl Flash {
    fn flash_on(&mut self) {
        let mut tile = self.target.borrow_mut();
        if let Some(mode) = self.params.text.dynamic_mode() {
            resolve(Some(&mode), self.cycle.next(), &mut self.rng).apply_to(&mut *tile);
        }
        tile.set_visible(true);
        self.phase = Phase::On;
        self.deadline += self.params.duration_on.max(1);
    }

    fn flash_off(&mut self) {
        self.target.borrow_mut().set_visible(false);
        self.phase = Phase::Off;
        self.deadline += self.params.duration_off.max(1);
    }
}

impl EffectInstance for Flash {
    fn advance(&mut self, now_ms: u64) {
        while now_ms >= self.deadline {
            match self.phase {
                Phase::Waiting | Phase::Off => self.flash_on(),
                Phase::On => self.flash_off(),
            }
        }
    }

    fn stop(&mut self) {}

    fn next_deadline(&self) -> Option<u64> {
        Some(self.deadline)
    }

    fn wants_frames(&self) -> bool {
        false
    }
}
