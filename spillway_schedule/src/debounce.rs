// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce window over a stream of observations.

/// Coalesces a burst of triggers into a single deadline.
///
/// Each [`record`](Self::record) pushes the deadline to `timestamp + window`,
/// so a burst of resize observations yields one deadline just past the last
/// of them. The host polls [`fire_due`](Self::fire_due) from its timer or
/// tick handler; the first poll at or past the deadline consumes it.
///
/// Timestamps are caller-provided milliseconds on a monotonically
/// non-decreasing clock. The state machine never reads a clock itself.
///
/// ```rust
/// use spillway_schedule::Debouncer;
///
/// let mut debouncer = Debouncer::new(16);
/// debouncer.record(1000);
/// debouncer.record(1010);
///
/// // The burst pushed the deadline to 1026.
/// assert!(!debouncer.fire_due(1020));
/// assert!(debouncer.fire_due(1026));
///
/// // Fired and consumed; later polls stay quiet until the next burst.
/// assert!(!debouncer.fire_due(1100));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    window: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// One frame at 60Hz, the usual window for resize-driven re-layout.
    pub const DEFAULT_WINDOW_MS: u64 = 16;

    /// Creates a debouncer with the given window in milliseconds.
    #[must_use]
    pub const fn new(window: u64) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Notes a trigger at `timestamp`, moving the deadline out past it.
    pub fn record(&mut self, timestamp: u64) {
        self.deadline = Some(timestamp.saturating_add(self.window));
    }

    /// Consumes the deadline if `timestamp` has reached it.
    ///
    /// Returns whether the debounced action should run now.
    pub fn fire_due(&mut self, timestamp: u64) -> bool {
        if let Some(deadline) = self.deadline
            && timestamp >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }

    /// Whether a trigger is waiting for its window to pass.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// The configured window in milliseconds.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// Drops any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn a_burst_coalesces_into_one_deadline() {
        let mut debouncer = Debouncer::new(16);
        debouncer.record(1000);
        debouncer.record(1005);
        debouncer.record(1010);
        assert_eq!(debouncer.deadline(), Some(1026));
        assert!(!debouncer.fire_due(1025));
        assert!(debouncer.fire_due(1026));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn fires_only_after_the_window_passes_quietly() {
        let mut debouncer = Debouncer::new(16);
        debouncer.record(1000);
        assert!(!debouncer.fire_due(1008));
        // A new trigger mid-wait pushes the deadline out again.
        debouncer.record(1012);
        assert!(!debouncer.fire_due(1016));
        assert!(debouncer.fire_due(1028));
    }

    #[test]
    fn firing_consumes_the_deadline() {
        let mut debouncer = Debouncer::new(16);
        debouncer.record(1000);
        assert!(debouncer.fire_due(1016));
        assert!(!debouncer.fire_due(1016));
        assert!(!debouncer.fire_due(2000));
    }

    #[test]
    fn recording_after_a_fire_opens_a_new_window() {
        let mut debouncer = Debouncer::new(16);
        debouncer.record(1000);
        assert!(debouncer.fire_due(1016));
        debouncer.record(2000);
        assert!(debouncer.is_pending());
        assert!(debouncer.fire_due(2016));
    }

    #[test]
    fn cancel_drops_the_pending_deadline() {
        let mut debouncer = Debouncer::new(16);
        debouncer.record(1000);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_due(5000));
    }

    #[test]
    fn zero_window_fires_at_the_trigger_timestamp() {
        let mut debouncer = Debouncer::new(0);
        debouncer.record(1000);
        assert!(debouncer.fire_due(1000));
    }

    #[test]
    fn default_window_is_one_frame() {
        let debouncer = Debouncer::default();
        assert_eq!(debouncer.window(), Debouncer::DEFAULT_WINDOW_MS);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn deadline_saturates_near_the_end_of_time() {
        let mut debouncer = Debouncer::new(u64::MAX);
        debouncer.record(10);
        assert_eq!(debouncer.deadline(), Some(u64::MAX));
    }
}
