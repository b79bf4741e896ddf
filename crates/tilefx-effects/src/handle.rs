#![forbid(unsafe_code)]

//! Per-instance scheduling handles.
//!
//! Starting an effect yields an [`EffectHandle`], the exclusive owner of
//! that instance's scheduling state. The host pumps live handles with
//! [`EffectHandle::advance`] once per frame; strategies implement
//! [`EffectInstance`] and chain their own deadlines from the timestamps
//! they are handed.
//!
//! # Invariants
//!
//! 1. `stop` is idempotent and final: after the first call the instance
//!    fires nothing and mutates its target only to clear residual state.
//! 2. Dropping a handle stops it. A forgotten handle can therefore never
//!    leave a detached animation running.

// ---------------------------------------------------------------------------
// Instance trait
// ---------------------------------------------------------------------------

/// One running effect, driven by the host clock.
pub trait EffectInstance {
    /// Advance to `now_ms`, firing any phase transitions whose deadlines
    /// have passed. Called once per host frame; must be cheap when nothing
    /// is due.
    fn advance(&mut self, now_ms: u64);

    /// Cancel all pending work and halt any descriptor playback.
    fn stop(&mut self);

    /// The next timestamp at which this instance needs an `advance` call,
    /// if it is waiting on a deadline rather than on every frame.
    fn next_deadline(&self) -> Option<u64>;

    /// Whether the instance updates continuously and needs `advance` every
    /// frame regardless of deadlines.
    fn wants_frames(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

/// Exclusive owner of one effect instance's scheduling resources.
pub struct EffectHandle {
    instance: Box<dyn EffectInstance>,
    stopped: bool,
}

impl EffectHandle {
    /// Wrap a freshly started instance.
    #[must_use]
    pub fn new(instance: Box<dyn EffectInstance>) -> Self {
        Self {
            instance,
            stopped: false,
        }
    }

    /// Pump the instance to `now_ms`. No-op after `stop`.
    pub fn advance(&mut self, now_ms: u64) {
        if self.stopped {
            return;
        }
        self.instance.advance(now_ms);
    }

    /// Stop the instance. Safe to call more than once.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.instance.stop();
        tracing::debug!(target: "tilefx.effect", "effect stopped");
    }

    /// Whether `stop` has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The earliest deadline the instance is waiting on, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        if self.stopped {
            return None;
        }
        self.instance.next_deadline()
    }

    /// Whether the instance needs a pump every frame.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        !self.stopped && self.instance.wants_frames()
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("stopped", &self.stopped)
            .field("next_deadline", &self.next_deadline())
            .field("wants_frames", &self.wants_frames())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Probe {
        advances: Vec<u64>,
        stops: u32,
    }

    struct Recorder(Rc<RefCell<Probe>>);

    impl EffectInstance for Recorder {
        fn advance(&mut self, now_ms: u64) {
            self.0.borrow_mut().advances.push(now_ms);
        }
        fn stop(&mut self) {
            self.0.borrow_mut().stops += 1;
        }
        fn next_deadline(&self) -> Option<u64> {
            Some(42)
        }
        fn wants_frames(&self) -> bool {
            true
        }
    }

    #[test]
    fn stop_is_idempotent_and_blocks_advance() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut handle = EffectHandle::new(Box::new(Recorder(Rc::clone(&probe))));

        handle.advance(10);
        handle.stop();
        handle.stop();
        handle.advance(20);

        let probe = probe.borrow();
        assert_eq!(probe.advances, vec![10]);
        assert_eq!(probe.stops, 1);
    }

    #[test]
    fn stopped_handle_reports_no_scheduling_needs() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut handle = EffectHandle::new(Box::new(Recorder(Rc::clone(&probe))));
        assert_eq!(handle.next_deadline(), Some(42));
        assert!(handle.wants_frames());

        handle.stop();
        assert_eq!(handle.next_deadline(), None);
        assert!(!handle.wants_frames());
    }

    #[test]
    fn drop_stops_the_instance() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        {
            let _handle = EffectHandle::new(Box::new(Recorder(Rc::clone(&probe))));
        }
        assert_eq!(probe.borrow().stops, 1);
    }

    #[test]
    fn explicit_stop_then_drop_stops_once() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        {
            let mut handle = EffectHandle::new(Box::new(Recorder(Rc::clone(&probe))));
            handle.stop();
        }
        assert_eq!(probe.borrow().stops, 1);
    }
}
