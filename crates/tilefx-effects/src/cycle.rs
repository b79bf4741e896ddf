#![forbid(unsafe_code)]

//! Per-instance cycle tracking.
//!
//! Repeating effects vary their text color per loop. Timer-chained
//! strategies consume indices with [`CycleState::next`]; frame-driven
//! strategies detect loop boundaries from elapsed time with
//! [`CycleState::roll`]. Either way the index never decreases.

/// Tracks which loop of a repeating effect an instance is in.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    cycle_index: u64,
    last_cycle_boundary: u64,
    primed: bool,
}

impl CycleState {
    /// A fresh state at cycle zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cycle index.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.cycle_index
    }

    /// Elapsed milliseconds at the start of the current cycle.
    #[must_use]
    pub fn last_cycle_boundary(&self) -> u64 {
        self.last_cycle_boundary
    }

    /// Consume the current index and move to the next cycle.
    ///
    /// Used by timer-chained strategies where every phase transition *is*
    /// the cycle boundary.
    pub fn next(&mut self) -> u64 {
        let index = self.cycle_index;
        self.cycle_index += 1;
        self.primed = true;
        index
    }

    /// Roll to the cycle containing `elapsed_ms`.
    ///
    /// Returns `Some(index)` exactly when this call enters a cycle that has
    /// not been observed yet (including cycle zero on the first call), so
    /// frame-driven strategies re-resolve color once per loop no matter how
    /// often they are pumped. The index never moves backwards.
    pub fn roll(&mut self, elapsed_ms: u64, duration_ms: u64) -> Option<u64> {
        let duration = duration_ms.max(1);
        let cycle = elapsed_ms / duration;
        if !self.primed || cycle > self.cycle_index {
            self.primed = true;
            self.cycle_index = self.cycle_index.max(cycle);
            self.last_cycle_boundary = self.cycle_index * duration;
            Some(self.cycle_index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_counts_up_from_zero() {
        let mut c = CycleState::new();
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn roll_fires_once_per_cycle() {
        let mut c = CycleState::new();
        assert_eq!(c.roll(0, 1000), Some(0));
        assert_eq!(c.roll(400, 1000), None);
        assert_eq!(c.roll(999, 1000), None);
        assert_eq!(c.roll(1000, 1000), Some(1));
        assert_eq!(c.roll(1001, 1000), None);
        assert_eq!(c.last_cycle_boundary(), 1000);
    }

    #[test]
    fn roll_skips_missed_cycles_without_replaying_them() {
        let mut c = CycleState::new();
        assert_eq!(c.roll(0, 100), Some(0));
        // Host stalled for several cycles; only the newest one fires.
        assert_eq!(c.roll(550, 100), Some(5));
        assert_eq!(c.roll(560, 100), None);
    }

    #[test]
    fn roll_never_moves_backwards() {
        let mut c = CycleState::new();
        assert_eq!(c.roll(5000, 1000), Some(5));
        assert_eq!(c.roll(100, 1000), None);
        assert_eq!(c.index(), 5);
    }

    #[test]
    fn roll_survives_zero_duration() {
        let mut c = CycleState::new();
        // Clamped to 1ms so a bad duration cannot divide by zero.
        assert_eq!(c.roll(3, 0), Some(3));
    }
}
