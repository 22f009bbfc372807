// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-toolbar overflow controller: runs measurement passes, keeps the
//! little state that must survive between them.

use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Range;

use crate::geometry::{place_indicator, position_offset};
use crate::scan::scan_items;
use crate::visibility::VisibilityState;
use crate::{Direction, IndicatorPlacement, ItemDecision, ItemSnapshot, PassGeometry};

/// Everything one measurement pass asks the host to do.
///
/// `changes` lists only items whose visibility actually flips; a pass over
/// an already-settled toolbar reports none. Applying the changes and
/// placing the indicator as told makes the next pass a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct PassReport<K> {
    /// Visibility flips to apply, trailing items first.
    pub changes: Vec<ItemDecision<K>>,
    /// Where the overflow indicator goes, and whether it shows at all.
    pub indicator: IndicatorPlacement,
    /// Index of the boundary item; `None` when nothing stays visible.
    pub last_visible: Option<usize>,
    /// How many leading items stay visible.
    pub visible_count: usize,
    /// Whether any item overflowed this pass.
    pub overflowing: bool,
}

/// Overflow state for one toolbar.
///
/// The controller never touches widgets. The host measures, calls
/// [`run_pass`](Self::run_pass), applies the returned [`PassReport`], and
/// asks [`overflow_items`](Self::overflow_items) what belongs in the menu.
#[derive(Debug, Clone)]
pub struct OverflowLayout<K> {
    direction: Direction,
    overflow_open: bool,
    visibility: VisibilityState<K>,
    last_visible: Option<usize>,
    item_count: usize,
}

impl<K> OverflowLayout<K> {
    /// Creates a controller for a toolbar laid out in `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            overflow_open: false,
            visibility: VisibilityState::new(),
            last_visible: None,
            item_count: 0,
        }
    }

    /// The direction passes are interpreted in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Switches direction for subsequent passes.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Whether the overflow menu is currently open.
    #[must_use]
    pub const fn overflow_open(&self) -> bool {
        self.overflow_open
    }

    /// Opens or closes the overflow menu.
    ///
    /// Returns whether the state changed, so the host knows when to emit
    /// an open-change notification. While open, the indicator stays
    /// visible even if a later pass finds nothing overflowing.
    pub fn set_overflow_open(&mut self, open: bool) -> bool {
        if self.overflow_open == open {
            return false;
        }
        self.overflow_open = open;
        true
    }

    /// Reacts to a container resize: an open menu closes.
    ///
    /// Returns whether the menu was open, i.e. whether an open-change
    /// notification is due. Call this before scheduling the re-measure.
    pub fn notify_resize(&mut self) -> bool {
        self.set_overflow_open(false)
    }

    /// The scroll position the container must hold while measuring.
    #[must_use]
    pub const fn measurement_scroll(&self, max_scroll: f64) -> f64 {
        self.direction.measurement_scroll(max_scroll)
    }

    /// Boundary item index from the latest pass.
    #[must_use]
    pub const fn last_visible(&self) -> Option<usize> {
        self.last_visible
    }

    /// How many leading items the latest pass left visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.last_visible.map_or(0, |index| index + 1)
    }

    /// How many items the latest pass scanned.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index range of the items that belong in the overflow menu.
    #[must_use]
    pub fn overflow_range(&self) -> Range<usize> {
        self.visible_count()..self.item_count
    }

    /// Slices out the overflowing tail of a parallel host collection.
    ///
    /// A slice shorter than the scanned item list yields an empty tail
    /// rather than a panic; the host's list and the last pass have simply
    /// diverged and the next pass will catch up.
    #[must_use]
    pub fn overflow_items<'c, T>(&self, items: &'c [T]) -> &'c [T] {
        items.get(self.overflow_range()).unwrap_or(&[])
    }
}

impl<K: Copy + Eq + Hash> OverflowLayout<K> {
    /// Runs one measurement pass over a settled layout.
    ///
    /// `items` holds every toolbar item in layout order, hidden ones
    /// included (they keep their slots, so their rectangles are real).
    /// The container behind `geometry` must be scrolled to
    /// [`measurement_scroll`](Self::measurement_scroll).
    #[must_use]
    pub fn run_pass(
        &mut self,
        geometry: &PassGeometry,
        items: &[ItemSnapshot<K>],
    ) -> PassReport<K> {
        let offset = position_offset(geometry, self.direction);
        let outcome = scan_items(
            items,
            geometry.container,
            geometry.indicator.width(),
            self.direction,
        );
        self.visibility.retain_items(items);
        let mut changes = Vec::new();
        for index in (0..items.len()).rev() {
            let item = &items[index];
            let change = if outcome.show[index] {
                self.visibility.show(item)
            } else {
                self.visibility.hide(item)
            };
            if let Some(change) = change {
                changes.push(ItemDecision {
                    id: item.id,
                    change,
                });
            }
        }
        let indicator = place_indicator(
            outcome.last_visible.map(|index| &items[index]),
            geometry.container,
            offset,
            self.direction,
            outcome.overflowing || self.overflow_open,
        );
        self.last_visible = outcome.last_visible;
        self.item_count = items.len();
        PassReport {
            changes,
            indicator,
            last_visible: outcome.last_visible,
            visible_count: self.visible_count(),
            overflowing: outcome.overflowing,
        }
    }
}

impl<K> Default for OverflowLayout<K> {
    fn default() -> Self {
        Self::new(Direction::Ltr)
    }
}
