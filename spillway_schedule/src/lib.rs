// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spillway_schedule --heading-base-level=0

//! Spillway Schedule: scheduling state machines for layout passes.
//!
//! Overflow layout re-measures in response to environmental churn: container
//! resizes, font loads, item mutations. Running a pass per event is wasteful
//! and, worse, measures half-settled layout. This crate provides the two
//! little state machines that tame the churn:
//!
//! - [`Debouncer`]: coalesces a burst of triggers (say, live-resize
//!   observations) into a single deadline past the last of them.
//! - [`FrameGate`]: defers work to the next frame callback and guarantees
//!   that only the newest request runs, so superseded callbacks are ignored.
//!
//! Both are driven entirely by the host. They never read clocks or talk to a
//! scheduler; the host feeds in timestamps and frame callbacks and acts when
//! a machine says to. A typical resize path:
//!
//! 1. Each resize observation calls [`Debouncer::record`].
//! 2. The host's tick handler polls [`Debouncer::fire_due`]; when it fires,
//!    the host calls [`FrameGate::request`] and schedules a frame callback
//!    with the returned ticket.
//! 3. When the callback arrives, [`FrameGate::fire`] says whether this is
//!    still the newest request; if so, measure and run the layout pass.
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod frame;

pub use debounce::Debouncer;
pub use frame::{FrameGate, FrameTicket};
