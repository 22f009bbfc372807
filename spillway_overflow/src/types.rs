// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core vocabulary shared by the prober, scanner, toggler, and positioner.

use kurbo::Rect;

/// Writing direction of the toolbar's inline axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Items flow left to right; the logical start is the left edge.
    #[default]
    Ltr,
    /// Items flow right to left; the logical start is the right edge.
    Rtl,
}

impl Direction {
    /// Returns `true` for right-to-left flow.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Scroll offset that neutralizes transient scroll before measurement.
    ///
    /// The logical start is `0.0` in left-to-right flow and `max_scroll` (the
    /// container's maximum scrollable offset) in right-to-left flow. Hosts
    /// force the container here before taking the bounding boxes for a pass;
    /// an open menu or similar overlay can otherwise leave the container
    /// scrolled mid-content and skew every measured rectangle.
    #[must_use]
    pub const fn measurement_scroll(self, max_scroll: f64) -> f64 {
        match self {
            Self::Ltr => 0.0,
            Self::Rtl => max_scroll,
        }
    }
}

/// Corrective pixel offsets for absolutely positioning the overflow indicator.
///
/// Absolute positioning is resolved against the container's padding box while
/// item rectangles are measured in border-box space; the probe element pins
/// down the difference. Produced by [`position_offset`](crate::position_offset).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionOffset {
    /// Correction along the inline (reading) axis.
    pub horizontal: f64,
    /// Correction along the block (top-down) axis.
    pub vertical: f64,
}

impl PositionOffset {
    /// No correction; content origin and border box coincide.
    pub const ZERO: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };
}

bitflags::bitflags! {
    /// Per-item state bits sampled by the host for one pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// The item's live focusability marker is set.
        const FOCUSABLE = 0b0000_0001;
        /// The item, or one of its descendants, currently holds keyboard focus.
        const HOLDS_FOCUS = 0b0000_0010;
        /// The item's inline visibility is currently hidden.
        const HIDDEN = 0b0000_0100;
    }
}

impl Default for ItemFlags {
    /// By default, items are visible and focusable.
    fn default() -> Self {
        Self::FOCUSABLE
    }
}

/// A measured toolbar item, as sampled by the host for one layout pass.
///
/// `K` is a host-chosen item key (a widget id, a stable slot index, ...).
/// Snapshots describe the *current* rendered state; hidden items keep their
/// layout slot, so their rectangles stay meaningful across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSnapshot<K> {
    /// Host key identifying the rendered item.
    pub id: K,
    /// Bounding rectangle, in the same coordinate space as the container.
    pub rect: Rect,
    /// Computed margin on the trailing side (right in LTR, left in RTL).
    ///
    /// Hosts without a computed style for the item pass `0.0`.
    pub trailing_margin: f64,
    /// Sampled state bits; see [`ItemFlags`].
    pub flags: ItemFlags,
}

impl<K> ItemSnapshot<K> {
    /// Creates a snapshot with default flags and no trailing margin.
    #[must_use]
    pub fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            trailing_margin: 0.0,
            flags: ItemFlags::default(),
        }
    }

    /// Sets the trailing margin.
    #[must_use]
    pub const fn with_trailing_margin(mut self, margin: f64) -> Self {
        self.trailing_margin = margin;
        self
    }

    /// Replaces the sampled state bits.
    #[must_use]
    pub const fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// The visibility transition a pass asks the host to apply to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemChange {
    /// The item is hidden and removed from keyboard navigation.
    ///
    /// Hidden items keep their layout slot so their rectangles stay real for
    /// later passes; only their visibility and focusability change.
    Hide {
        /// The item (or a descendant) held focus, so the host must first
        /// move focus to the first focusable element inside the container.
        /// If no such element exists, focus is simply left where it is.
        relocate_focus: bool,
    },
    /// The item becomes visible again.
    Show {
        /// Focusability marker to restore: `Some` replays the value saved
        /// when the engine hid the item; `None` means the item was hidden by
        /// someone else and the live marker should be cleared to its natural
        /// state.
        focusable: Option<bool>,
    },
}

/// One entry in a pass's change list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDecision<K> {
    /// Key of the item the change applies to.
    pub id: K,
    /// The transition the host applies.
    pub change: ItemChange,
}

/// Where the overflow indicator goes after a pass.
///
/// The inline inset is a CSS-style offset from the container's logical start
/// edge: hosts apply it as `left` in left-to-right flow and as `right` in
/// right-to-left flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPlacement {
    /// Whether the indicator is rendered at all.
    pub visible: bool,
    /// Offset from the container's logical start edge.
    pub inline_inset: f64,
    /// Offset from the container's top edge.
    pub block_inset: f64,
}

/// Measured rectangles for one layout pass.
///
/// All three rectangles must come from the same measurement and share one
/// coordinate space. The probe is the invisible zero-size element anchored at
/// the container's content origin; it exists only to expose the padding
/// correction and never appears in the item list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassGeometry {
    /// Bounding rectangle of the scrollable item container.
    pub container: Rect,
    /// Bounding rectangle of the overflow indicator.
    pub indicator: Rect,
    /// Bounding rectangle of the offset-measurement probe.
    pub probe: Rect,
}

#[cfg(test)]
mod tests {
    use super::{Direction, ItemFlags, ItemSnapshot, PositionOffset};
    use kurbo::Rect;

    #[test]
    fn measurement_scroll_targets_the_logical_start() {
        assert_eq!(Direction::Ltr.measurement_scroll(480.0), 0.0);
        assert_eq!(Direction::Rtl.measurement_scroll(480.0), 480.0);
        assert!(!Direction::Ltr.is_rtl());
        assert!(Direction::Rtl.is_rtl());
    }

    #[test]
    fn default_flags_are_visible_and_focusable() {
        let flags = ItemFlags::default();
        assert!(flags.contains(ItemFlags::FOCUSABLE));
        assert!(!flags.contains(ItemFlags::HIDDEN));
        assert!(!flags.contains(ItemFlags::HOLDS_FOCUS));
    }

    #[test]
    fn snapshot_builders_fill_in_fields() {
        let snapshot = ItemSnapshot::new(7_u32, Rect::new(0.0, 0.0, 40.0, 32.0))
            .with_trailing_margin(4.0)
            .with_flags(ItemFlags::FOCUSABLE | ItemFlags::HOLDS_FOCUS);
        assert_eq!(snapshot.id, 7);
        assert_eq!(snapshot.trailing_margin, 4.0);
        assert!(snapshot.flags.contains(ItemFlags::HOLDS_FOCUS));
    }

    #[test]
    fn zero_offset_is_zero() {
        assert_eq!(PositionOffset::ZERO, PositionOffset::default());
    }
}
