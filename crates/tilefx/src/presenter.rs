#![forbid(unsafe_code)]

//! The per-frame glue.
//!
//! [`TilePresenter`] owns everything shared across tiles: the rank table,
//! the keyframe store, the label fitter, and the resize coalescer. The
//! host hands it a render target per inserted tile and pumps it once per
//! frame; the presenter pumps deferred fits and live effect handles, and
//! runs a full refit pass when resize activity goes quiet.
//!
//! [`OverlayPresenter`] drives the board overlay from its configured
//! sequence: selecting an entry applies text and opacity and fits the
//! text block; selecting `None` hides it.
//!
//! # Invariants
//!
//! 1. Clearing the presenter (or dropping it) stops every live effect.
//! 2. A refit pass resets each label to its stylesheet baseline before
//!    measuring, so repeated passes do not compound.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use tilefx_config::{OverlayEntry, OverlaySequence, TileVisualSpec};
use tilefx_core::{SharedTarget, TextProbe};
use tilefx_effects::{EffectHandle, KeyframeStore};
use tilefx_text::{DeferredFit, RefitScheduler, TextFitter, fit_overlay};

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

struct LiveTile {
    target: SharedTarget,
    text: String,
    effect: Option<EffectHandle>,
    fit: DeferredFit,
}

/// Decorates tiles from the rank table and drives them per frame.
pub struct TilePresenter<P> {
    spec: TileVisualSpec,
    store: KeyframeStore,
    fitter: TextFitter<P>,
    refit: RefitScheduler,
    tiles: Vec<LiveTile>,
}

impl<P: TextProbe> TilePresenter<P> {
    /// A presenter for `spec`, measuring labels with `probe`.
    #[must_use]
    pub fn new(spec: TileVisualSpec, probe: P) -> Self {
        Self {
            spec,
            store: KeyframeStore::new(),
            fitter: TextFitter::new(probe),
            refit: RefitScheduler::new(),
            tiles: Vec::new(),
        }
    }

    /// Decorate a freshly inserted tile of `rank`: apply its label, start
    /// its configured effect, and schedule the deferred first fit. The
    /// presenter tracks the tile until [`clear`](Self::clear).
    pub fn decorate(&mut self, target: SharedTarget, rank: u64, now_ms: u64) {
        let text = self.spec.text_for(rank).to_string();
        target.borrow_mut().set_text(&text);

        let effect = self.spec.effect(rank).map(|config| {
            config.start(
                target.clone(),
                &self.store,
                SmallRng::from_os_rng(),
                now_ms,
            )
        });
        let fit = DeferredFit::new(target.clone(), text.clone());
        self.tiles.push(LiveTile {
            target,
            text,
            effect,
            fit,
        });
    }

    /// Record a resize event; the refit pass fires once the burst goes
    /// quiet.
    pub fn note_resize(&mut self, now_ms: u64) {
        self.refit.note_resize(now_ms);
    }

    /// Pump one frame: deferred fits, live effects, and the coalesced
    /// refit pass. Returns `true` when a refit pass ran this frame, so the
    /// host can refit the overlay alongside.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        for tile in &mut self.tiles {
            tile.fit.frame(&self.fitter);
            if let Some(effect) = &mut tile.effect {
                effect.advance(now_ms);
            }
        }
        if self.refit.due(now_ms) {
            self.refit_labels();
            return true;
        }
        false
    }

    /// Drop every live tile, stopping its effect.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Number of live tiles.
    #[must_use]
    pub fn live_tiles(&self) -> usize {
        self.tiles.len()
    }

    /// The shared descriptor registry.
    #[must_use]
    pub fn keyframes(&self) -> &KeyframeStore {
        &self.store
    }

    /// The rank table.
    #[must_use]
    pub fn spec(&self) -> &TileVisualSpec {
        &self.spec
    }

    fn refit_labels(&mut self) {
        tracing::debug!(
            target: "tilefx.fit",
            labels = self.tiles.len(),
            "resize refit pass"
        );
        for tile in &self.tiles {
            let mut target = tile.target.borrow_mut();
            // Back to the stylesheet baseline so the solve is fresh.
            target.set_font_size(None);
            self.fitter.fit(&mut *target, &tile.text);
        }
    }
}

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Drives the board overlay from its configured sequence.
///
/// `container` and `text` must be distinct targets: the container supplies
/// the bounds and visibility surface, the text target carries the message.
pub struct OverlayPresenter {
    sequence: OverlaySequence,
    container: SharedTarget,
    text: SharedTarget,
    current: Option<usize>,
}

impl OverlayPresenter {
    /// A presenter over `sequence`, hidden until an entry is selected.
    #[must_use]
    pub fn new(sequence: OverlaySequence, container: SharedTarget, text: SharedTarget) -> Self {
        container.borrow_mut().set_visible(false);
        Self {
            sequence,
            container,
            text,
            current: None,
        }
    }

    /// Select the entry at `index` (`None`, or past the end, hides the
    /// overlay). Applies text and opacity and fits the text block.
    pub fn select(&mut self, index: Option<usize>) {
        match self.sequence.entry(index).cloned() {
            Some(entry) => {
                self.current = index;
                self.apply(&entry);
            }
            None => self.hide(),
        }
    }

    /// Select by an ever-advancing pointer, wrapping at the sequence end.
    pub fn select_wrapped(&mut self, pointer: usize) {
        if self.sequence.is_empty() {
            self.hide();
            return;
        }
        self.select(Some(pointer % self.sequence.len()));
    }

    /// Hide the overlay.
    pub fn hide(&mut self) {
        self.current = None;
        self.container.borrow_mut().set_visible(false);
    }

    /// Whether an entry is currently shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.current.is_some()
    }

    /// The entry currently shown, for the renderer's image layer.
    #[must_use]
    pub fn current(&self) -> Option<&OverlayEntry> {
        self.sequence.entry(self.current)
    }

    /// Re-fit the text block against the current bounds. No-op while
    /// hidden. Called by the host on the same refit pass as the labels.
    pub fn refit(&mut self) {
        if !self.is_shown() {
            return;
        }
        fit_overlay(&*self.container.borrow(), &mut *self.text.borrow_mut());
    }

    fn apply(&mut self, entry: &OverlayEntry) {
        {
            let mut container = self.container.borrow_mut();
            container.set_opacity(entry.opacity);
            container.set_visible(true);
        }
        self.text.borrow_mut().set_text(&entry.text);
        fit_overlay(&*self.container.borrow(), &mut *self.text.borrow_mut());
    }
}
