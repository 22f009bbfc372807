// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-callback gating: only the newest request is allowed to run.

/// Identifies one frame-callback request issued by a [`FrameGate`].
///
/// Tickets are handed to the host's frame scheduler and passed back when the
/// callback runs; the gate then tells stale callbacks from live ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

/// Gates deferred work behind the next frame callback.
///
/// Hosts that re-measure on the next animation frame face a hazard: a second
/// request before the frame arrives must supersede the first, or the work
/// runs twice against half-settled layout. The gate issues a [`FrameTicket`]
/// per request and honors only the newest one.
///
/// ```rust
/// use spillway_schedule::FrameGate;
///
/// let mut gate = FrameGate::new();
/// let stale = gate.request();
/// let live = gate.request();
///
/// // Only the newest request's callback gets through.
/// assert!(!gate.fire(stale));
/// assert!(gate.fire(live));
/// assert!(!gate.is_pending());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGate {
    next: u64,
    pending: Option<u64>,
}

impl FrameGate {
    /// Creates a gate with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 0,
            pending: None,
        }
    }

    /// Requests the next frame callback, superseding any outstanding one.
    #[must_use]
    pub fn request(&mut self) -> FrameTicket {
        let ticket = FrameTicket(self.next);
        self.pending = Some(self.next);
        self.next = self.next.wrapping_add(1);
        ticket
    }

    /// Reports a callback arriving with `ticket`.
    ///
    /// Returns whether the gated work should run now: true only for the
    /// newest ticket, once. Stale and already-consumed tickets are ignored.
    pub fn fire(&mut self, ticket: FrameTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            return true;
        }
        false
    }

    /// Drops the outstanding request, if any; its callback will be ignored.
    ///
    /// Returns whether a request was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a request is waiting for its frame callback.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}
