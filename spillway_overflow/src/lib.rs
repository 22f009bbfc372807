// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spillway_overflow --heading-base-level=0

//! Spillway Overflow: toolbar overflow layout decisions.
//!
//! This crate provides a small, renderer-agnostic core for deciding which items
//! of a single-row toolbar stay visible when the container runs out of inline
//! space, and where the "more items" indicator goes. It is intended to be shared
//! across different UI stacks and toolbar implementations.
//!
//! The core concepts are:
//!
//! - [`ItemSnapshot`]: one measured toolbar item, as a rectangle plus its
//!   trailing margin and a few [`ItemFlags`].
//! - [`scan_items`]: the trailing scan that hides cropped items, then keeps
//!   hiding until an item leaves room for the indicator. Its [`ScanOutcome`]
//!   names the boundary item, the last one that stays visible.
//! - [`position_offset`] and [`place_indicator`]: rectangle math for the
//!   padding/border correction and the indicator's inset from the container's
//!   logical start edge.
//! - [`VisibilityState`]: remembers the focusability of items this layout hid,
//!   so showing them again restores what hiding took away.
//! - [`OverflowLayout`]: a small controller that owns the direction, the
//!   menu-open flag, and a [`VisibilityState`], and turns one measurement into
//!   a [`PassReport`] of changes for the host to apply.
//!
//! This crate deliberately does **not** know about widgets, style systems, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Waiting until layout has settled, scrolling the container to
//!   [`OverflowLayout::measurement_scroll`], and measuring the rectangles.
//! - Passing every item in layout order, hidden ones included; hidden items
//!   must keep their layout slots so their rectangles stay real.
//! - Applying each [`ItemChange`] in the report and anchoring the indicator
//!   at the reported inset (from the left in LTR, from the right in RTL).
//! - Filling the overflow menu from [`OverflowLayout::overflow_items`].
//!
//! ## Minimal example
//!
//! A 300px toolbar whose third item no longer fits:
//!
//! ```rust
//! use kurbo::Rect;
//! use spillway_overflow::{Direction, ItemSnapshot, OverflowLayout, PassGeometry};
//!
//! let mut layout = OverflowLayout::new(Direction::Ltr);
//! let geometry = PassGeometry {
//!     container: Rect::new(0.0, 0.0, 300.0, 40.0),
//!     indicator: Rect::new(0.0, 0.0, 30.0, 40.0),
//!     probe: Rect::new(0.0, 0.0, 0.0, 0.0),
//! };
//! let items = [
//!     ItemSnapshot::new("cut", Rect::new(0.0, 0.0, 100.0, 40.0)),
//!     ItemSnapshot::new("copy", Rect::new(100.0, 0.0, 220.0, 40.0)),
//!     ItemSnapshot::new("paste", Rect::new(220.0, 0.0, 340.0, 40.0)),
//! ];
//!
//! let report = layout.run_pass(&geometry, &items);
//!
//! // "paste" is cropped; "copy" leaves room for the 30px indicator.
//! assert_eq!(report.visible_count, 2);
//! assert!(report.indicator.visible);
//! assert_eq!(report.indicator.inline_inset, 220.0);
//! assert_eq!(layout.overflow_items(&["cut", "copy", "paste"]), ["paste"]);
//! ```
//!
//! The host would now hide "paste" (the report's `changes` say so, along with
//! whether focus needs relocating), absolutely position the indicator 220px
//! from the toolbar's left edge, and put "paste" in the overflow menu.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod geometry;
mod layout;
mod scan;
mod types;
mod visibility;

pub use geometry::{place_indicator, position_offset};
pub use layout::{OverflowLayout, PassReport};
pub use scan::{ScanOutcome, scan_items};
pub use types::{
    Direction, IndicatorPlacement, ItemChange, ItemDecision, ItemFlags, ItemSnapshot, PassGeometry,
    PositionOffset,
};
pub use visibility::VisibilityState;
