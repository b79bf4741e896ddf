#![forbid(unsafe_code)]

//! AppearFade: the text snaps to full opacity, fades to transparent over
//! the cycle, and loops. Driven by registered keyframe descriptors, so the
//! instance itself only wakes up for per-cycle color changes.
//!
//! Word-by-word mode splits the text on spaces and gives each word an
//! equal slot of the cycle: word `i` of `n` is opaque only during
//! `[i/n, (i+1)/n)` of the loop, snapping on just after its slot opens.
//! All slots share one duration and delay so they stay in sync, and each
//! slot's curve is registered once per `(i, n)` pair.

use rand::rngs::SmallRng;

use tilefx_core::{FillMode, Playback, SharedTarget};
use tilefx_style::resolve;

use crate::cycle::CycleState;
use crate::handle::EffectInstance;
use crate::keyframes::{KeyframeState, KeyframeStop, KeyframeStore};
use crate::params::AppearFadeParams;

/// Key of the whole-text fade curve.
pub(crate) const WHOLE_TEXT_KEY: &str = "tile-appear-and-fade";

/// Key of word `index`'s slot curve in an `n`-word cycle.
#[must_use]
pub(crate) fn word_key(index: usize, words: usize) -> String {
    format!("tile-word-fade-{index}-of-{words}")
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// The whole-text curve: opaque at the loop start, transparent at the end.
pub(crate) fn whole_text_stops() -> Vec<KeyframeStop> {
    vec![
        KeyframeStop::new(0.0, KeyframeState::opacity(1.0)),
        KeyframeStop::new(100.0, KeyframeState::opacity(0.0)),
    ]
}

/// The slot curve for word `index` of `words`.
///
/// Slot boundaries are rounded to two decimals; later words snap opaque
/// 0.1% after their slot opens so the transition reads as instant without
/// colliding with the slot-open stop.
pub(crate) fn word_slot_stops(index: usize, words: usize) -> Vec<KeyframeStop> {
    let slot_start = round2(index as f32 / words as f32 * 100.0);
    let slot_end = round2((index + 1) as f32 / words as f32 * 100.0);
    let snap_at = round2(slot_start + 0.1);

    let mut stops = Vec::with_capacity(5);
    if index == 0 {
        stops.push(KeyframeStop::new(0.0, KeyframeState::opacity(1.0)));
        stops.push(KeyframeStop::new(slot_end, KeyframeState::opacity(0.0)));
    } else {
        stops.push(KeyframeStop::new(0.0, KeyframeState::opacity(0.0)));
        stops.push(KeyframeStop::new(slot_start, KeyframeState::opacity(0.0)));
        stops.push(KeyframeStop::new(snap_at, KeyframeState::opacity(1.0)));
        stops.push(KeyframeStop::new(slot_end, KeyframeState::opacity(0.0)));
    }
    if slot_end < 100.0 {
        stops.push(KeyframeStop::new(100.0, KeyframeState::opacity(0.0)));
    }
    stops
}

enum Layout {
    WholeText,
    Words { count: usize },
}

struct AppearFade {
    target: SharedTarget,
    params: AppearFadeParams,
    rng: SmallRng,
    cycle: CycleState,
    layout: Layout,
    /// Next loop boundary, present only for dynamic color modes.
    boundary: Option<u64>,
}

pub(crate) fn start(
    target: SharedTarget,
    params: AppearFadeParams,
    store: &KeyframeStore,
    mut rng: SmallRng,
    now_ms: u64,
) -> Box<dyn EffectInstance> {
    let playback = Playback::new(params.duration)
        .delay(params.start_delay)
        .fill(FillMode::Backwards);

    let words: Vec<String> = {
        let tile = target.borrow();
        tile.text().split(' ').map(str::to_string).collect()
    };

    let layout = if params.word_by_word && words.len() > 1 {
        let count = words.len();
        let mut tile = target.borrow_mut();
        tile.split_words(&words);
        let font = params.text.font_override();
        let mode = params.text.color_mode();
        for index in 0..count {
            let key = word_key(index, count);
            store.ensure(&key, || word_slot_stops(index, count));
            if let Some(word) = tile.word(index) {
                if !font.is_empty() {
                    word.apply_font(&font);
                }
                resolve(mode.as_ref(), 0, &mut rng).apply_to(word);
                word.play(&key, playback);
            }
        }
        Layout::Words { count }
    } else {
        store.ensure(WHOLE_TEXT_KEY, whole_text_stops);
        let mut tile = target.borrow_mut();
        params.text.apply_base(&mut *tile, &mut rng);
        tile.play(WHOLE_TEXT_KEY, playback);
        Layout::WholeText
    };

    let mut cycle = CycleState::new();
    // Index 0 was consumed by the initial styling.
    cycle.next();
    let boundary = params
        .text
        .dynamic_mode()
        .map(|_| now_ms + params.start_delay + params.duration.max(1));

    Box::new(AppearFade {
        target,
        params,
        rng,
        cycle,
        layout,
        boundary,
    })
}

impl EffectInstance for AppearFade {
    fn advance(&mut self, now_ms: u64) {
        let Some(mode) = self.params.text.dynamic_mode() else {
            return;
        };
        while let Some(boundary) = self.boundary {
            if now_ms < boundary {
                return;
            }
            let resolved = resolve(Some(&mode), self.cycle.next(), &mut self.rng);
            let mut tile = self.target.borrow_mut();
            match self.layout {
                Layout::WholeText => resolved.apply_to(&mut *tile),
                Layout::Words { count } => {
                    // All words recolor in sync at the loop boundary.
                    for index in 0..count {
                        if let Some(word) = tile.word(index) {
                            resolved.apply_to(word);
                        }
                    }
                }
            }
            self.boundary = Some(boundary + self.params.duration.max(1));
        }
    }

    fn stop(&mut self) {
        let mut tile = self.target.borrow_mut();
        match self.layout {
            Layout::WholeText => tile.halt(),
            Layout::Words { count } => {
                for index in 0..count {
                    if let Some(word) = tile.word(index) {
                        word.halt();
                    }
                }
            }
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        self.boundary
    }

    fn wants_frames(&self) -> bool {
        false
    }
}
