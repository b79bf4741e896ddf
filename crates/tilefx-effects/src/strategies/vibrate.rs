#![forbid(unsafe_code)]

//! Vibrate: rapid small-offset jitter of the text, driven entirely by a
//! registered keyframe descriptor so no per-frame work happens here.
//!
//! The descriptor key is deterministic in `(amplitude, speed)`; every
//! instance sharing that pair replays one registered curve. The seven
//! interior offsets use fixed irregular multipliers so the path feels
//! organic rather than mechanical back-and-forth.
//!
//! Pulsed mode (both `duration_on` and `duration_off` positive) chains
//! buzz and still phases on deadlines; otherwise a single deadline starts
//! continuous playback and the instance goes idle.

use rand::rngs::SmallRng;

use tilefx_core::{Playback, SharedTarget};
use tilefx_style::resolve;

use crate::cycle::CycleState;
use crate::handle::EffectInstance;
use crate::keyframes::{KeyframeState, KeyframeStop, KeyframeStore};
use crate::params::VibrateParams;

/// Interior stops as `(percent, x multiplier, y multiplier)` of the
/// amplitude. The end stops at 0% and 100% return to the origin.
const PATTERN: [(f32, f32, f32); 7] = [
    (12.0, 1.0, -0.5),
    (25.0, -0.7, 0.8),
    (37.0, 0.9, 0.3),
    (50.0, -0.4, -0.9),
    (62.0, 0.6, 0.7),
    (75.0, -0.8, -0.2),
    (87.0, 0.3, -0.6),
];

/// Registry key for a given amplitude and speed.
#[must_use]
pub(crate) fn descriptor_key(amplitude: f64, speed: u64) -> String {
    format!("tile-vibrate-a{amplitude}-s{speed}")
}

/// The shake curve scaled to `amplitude`.
pub(crate) fn shake_stops(amplitude: f64) -> Vec<KeyframeStop> {
    let a = amplitude as f32;
    let mut stops = Vec::with_capacity(PATTERN.len() + 2);
    stops.push(KeyframeStop::new(0.0, KeyframeState::translate(0.0, 0.0)));
    for (percent, mx, my) in PATTERN {
        stops.push(KeyframeStop::new(
            percent,
            KeyframeState::translate(a * mx, a * my),
        ));
    }
    stops.push(KeyframeStop::new(100.0, KeyframeState::translate(0.0, 0.0)));
    stops
}

enum Phase {
    Waiting,
    Buzzing,
    Still,
    Idle,
}

struct Vibrate {
    target: SharedTarget,
    params: VibrateParams,
    rng: SmallRng,
    cycle: CycleState,
    key: String,
    pulsed: bool,
    phase: Phase,
    deadline: u64,
}

pub(crate) fn start(
    target: SharedTarget,
    params: VibrateParams,
    store: &KeyframeStore,
    mut rng: SmallRng,
    now_ms: u64,
) -> Box<dyn EffectInstance> {
    params.text.apply_base(&mut *target.borrow_mut(), &mut rng);

    let key = descriptor_key(params.amplitude, params.speed);
    store.ensure(&key, || shake_stops(params.amplitude));

    let pulsed = params.duration_on > 0 && params.duration_off > 0;
    let mut cycle = CycleState::new();
    // Index 0 was consumed by the base styling above.
    cycle.next();

    let deadline = now_ms + params.start_delay;
    Box::new(Vibrate {
        target,
        params,
        rng,
        cycle,
        key,
        pulsed,
        phase: Phase::Waiting,
        deadline,
    })
}

impl Vibrate {
    fn buzz(&mut self, at: u64) {
        let mut tile = self.target.borrow_mut();
        if let Some(mode) = self.params.text.dynamic_mode() {
            resolve(Some(&mode), self.cycle.next(), &mut self.rng).apply_to(&mut *tile);
        }
        tile.play(&self.key, Playback::new(self.params.speed));
        self.phase = Phase::Buzzing;
        self.deadline = at + self.params.duration_on.max(1);
    }

    fn still(&mut self, at: u64) {
        self.target.borrow_mut().halt();
        self.phase = Phase::Still;
        self.deadline = at + self.params.duration_off.max(1);
    }
}

impl EffectInstance for Vibrate {
    fn advance(&mut self, now_ms: u64) {
        loop {
            if matches!(self.phase, Phase::Idle) || now_ms < self.deadline {
                return;
            }
            let at = self.deadline;
            match self.phase {
                Phase::Waiting if !self.pulsed => {
                    self.target
                        .borrow_mut()
                        .play(&self.key, Playback::new(self.params.speed));
                    self.phase = Phase::Idle;
                }
                Phase::Waiting | Phase::Still => self.buzz(at),
                Phase::Buzzing => self.still(at),
                Phase::Idle => unreachable!(),
            }
        }
    }

    fn stop(&mut self) {
        self.target.borrow_mut().halt();
    }

    fn next_deadline(&self) -> Option<u64> {
        match self.phase {
            Phase::Idle => None,
            _ => Some(self.deadline),
        }
    }

    fn wants_frames(&self) -> bool {
        false
    }
}
