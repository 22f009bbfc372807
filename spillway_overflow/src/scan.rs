// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trailing scan that decides which toolbar items stay visible.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Direction, ItemSnapshot};

/// What the trailing scan concluded for one measurement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Per-item visibility verdicts, parallel to the scanned slice.
    pub show: Vec<bool>,
    /// Index of the boundary item, the last one that stays visible.
    ///
    /// `None` when every item overflows or the toolbar is empty.
    pub last_visible: Option<usize>,
    /// Whether any item was hidden, i.e. whether the indicator is needed.
    pub overflowing: bool,
}

/// Scans items from the trailing end and hides those that do not fit.
///
/// An item is *cropped* when it extends past either container edge; a
/// cropped item always hides. Once something has been hidden, an item that
/// fits must additionally leave room for the indicator (plus the item's own
/// trailing margin) or it hides too. The first item that is neither cropped
/// nor colliding becomes the boundary item and the scan stops: everything
/// before it stays visible unchecked.
///
/// Rectangles must come from a container scrolled to
/// [`Direction::measurement_scroll`]; a scrolled-away container crops
/// everything on one side and the scan dutifully hides it all.
#[must_use]
pub fn scan_items<K>(
    items: &[ItemSnapshot<K>],
    container: Rect,
    indicator_width: f64,
    direction: Direction,
) -> ScanOutcome {
    debug_assert!(
        indicator_width.is_finite(),
        "indicator width must be finite; got {indicator_width:?}"
    );
    let indicator_width = indicator_width.max(0.0);
    let mut show = vec![true; items.len()];
    let mut last_visible = None;
    let mut overflowing = false;
    for (index, item) in items.iter().enumerate().rev() {
        if is_cropped(item, container) {
            show[index] = false;
            overflowing = true;
            continue;
        }
        if overflowing && would_collide(item, container, indicator_width, direction) {
            show[index] = false;
            continue;
        }
        last_visible = Some(index);
        break;
    }
    ScanOutcome {
        show,
        last_visible,
        overflowing,
    }
}

/// An item extending past either container edge does not fit.
///
/// Equality is fine: an item flush against an edge is fully inside.
fn is_cropped<K>(item: &ItemSnapshot<K>, container: Rect) -> bool {
    item.rect.x1 > container.x1 || item.rect.x0 < container.x0
}

/// Whether the indicator, placed after this item, would poke past the
/// container's logical end.
fn would_collide<K>(
    item: &ItemSnapshot<K>,
    container: Rect,
    indicator_width: f64,
    direction: Direction,
) -> bool {
    match direction {
        Direction::Ltr => item.rect.x1 + indicator_width + item.trailing_margin > container.x1,
        Direction::Rtl => item.rect.x0 - indicator_width - item.trailing_margin < container.x0,
    }
}

#[cfg(test)]
mod tests {
    use super::scan_items;
    use crate::{Direction, ItemSnapshot};
    use kurbo::Rect;

    fn items(spans: &[(f64, f64)]) -> alloc::vec::Vec<ItemSnapshot<usize>> {
        spans
            .iter()
            .enumerate()
            .map(|(id, &(x0, x1))| ItemSnapshot::new(id, Rect::new(x0, 0.0, x1, 40.0)))
            .collect()
    }

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 300.0, 40.0);

    #[test]
    fn everything_fits_when_nothing_is_cropped() {
        let items = items(&[(0.0, 100.0), (100.0, 200.0), (200.0, 300.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        assert_eq!(outcome.show, [true, true, true]);
        assert_eq!(outcome.last_visible, Some(2));
        assert!(!outcome.overflowing);
    }

    #[test]
    fn cropped_tail_hides_and_the_boundary_item_clears_the_indicator() {
        let items = items(&[(0.0, 100.0), (100.0, 220.0), (220.0, 340.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        assert_eq!(outcome.show, [true, true, false]);
        // 220 + 30 fits inside 300, so item 1 is the boundary.
        assert_eq!(outcome.last_visible, Some(1));
        assert!(outcome.overflowing);
    }

    #[test]
    fn collision_cascades_until_an_item_leaves_room() {
        let items = items(&[(0.0, 50.0), (50.0, 100.0), (100.0, 290.0), (290.0, 340.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        // Item 3 is cropped; item 2 fits but 290 + 30 > 300, so it hides too.
        assert_eq!(outcome.show, [true, true, false, false]);
        assert_eq!(outcome.last_visible, Some(1));
    }

    #[test]
    fn indicator_flush_against_the_edge_is_not_a_collision() {
        let items = items(&[(0.0, 150.0), (150.0, 270.0), (270.0, 340.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        // 270 + 30 == 300: equality fits.
        assert_eq!(outcome.show, [true, true, false]);
        assert_eq!(outcome.last_visible, Some(1));
    }

    #[test]
    fn trailing_margin_counts_against_the_indicator() {
        let mut items = items(&[(0.0, 150.0), (150.0, 268.0), (268.0, 340.0)]);
        items[1].trailing_margin = 4.0;
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        // 268 + 30 + 4 > 300 pushes the boundary back one more item.
        assert_eq!(outcome.show, [true, false, false]);
        assert_eq!(outcome.last_visible, Some(0));
    }

    #[test]
    fn earlier_items_are_not_rechecked_after_the_boundary() {
        // Item 0 is cropped, but the scan stopped at item 1 and never looks.
        let items = items(&[(0.0, 500.0), (100.0, 200.0), (220.0, 340.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        assert_eq!(outcome.show, [true, true, false]);
        assert_eq!(outcome.last_visible, Some(1));
    }

    #[test]
    fn everything_after_a_hidden_item_is_hidden_too() {
        let items = items(&[
            (0.0, 80.0),
            (80.0, 180.0),
            (180.0, 260.0),
            (260.0, 340.0),
            (340.0, 420.0),
        ]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        let first_hidden = outcome.show.iter().position(|shown| !shown).unwrap();
        assert!(outcome.show[first_hidden..].iter().all(|shown| !shown));
    }

    #[test]
    fn all_cropped_leaves_no_boundary_item() {
        let items = items(&[(310.0, 400.0), (400.0, 500.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        assert_eq!(outcome.show, [false, false]);
        assert_eq!(outcome.last_visible, None);
        assert!(outcome.overflowing);
    }

    #[test]
    fn empty_toolbar_is_a_quiet_no_op() {
        let items: alloc::vec::Vec<ItemSnapshot<usize>> = alloc::vec::Vec::new();
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Ltr);
        assert!(outcome.show.is_empty());
        assert_eq!(outcome.last_visible, None);
        assert!(!outcome.overflowing);
    }

    #[test]
    fn rtl_collision_measures_toward_the_left_edge() {
        // Items flow right to left; the tail is nearest x0.
        let items = items(&[(200.0, 300.0), (80.0, 200.0), (-40.0, 80.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Rtl);
        // Item 2 is cropped; item 1 at x0 = 80 leaves 80 - 30 >= 0.
        assert_eq!(outcome.show, [true, true, false]);
        assert_eq!(outcome.last_visible, Some(1));
    }

    #[test]
    fn rtl_collision_hides_an_item_too_close_to_the_left_edge() {
        let items = items(&[(180.0, 300.0), (20.0, 180.0), (-100.0, 20.0)]);
        let outcome = scan_items(&items, CONTAINER, 30.0, Direction::Rtl);
        // Item 1 at x0 = 20 leaves only 20px for a 30px indicator.
        assert_eq!(outcome.show, [true, false, false]);
        assert_eq!(outcome.last_visible, Some(0));
    }

    #[test]
    fn zero_width_indicator_only_requires_fitting() {
        let items = items(&[(0.0, 150.0), (150.0, 300.0), (300.0, 360.0)]);
        let outcome = scan_items(&items, CONTAINER, 0.0, Direction::Ltr);
        assert_eq!(outcome.show, [true, true, false]);
        assert_eq!(outcome.last_visible, Some(1));
    }
}
