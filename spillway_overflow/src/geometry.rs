// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement-pass geometry: the positioning correction and indicator placement.

use kurbo::Rect;

use crate::{Direction, IndicatorPlacement, ItemSnapshot, PassGeometry, PositionOffset};

/// Computes the corrective offset between the container and its content origin.
///
/// The probe rectangle belongs to the zero-size element anchored at the
/// container's content origin, so the difference between the two rectangles
/// is exactly the padding/border that absolute positioning must compensate
/// for:
///
/// - horizontal: `container.left − probe.left` in LTR, `probe.right −
///   container.right` in RTL,
/// - vertical: `container.top − probe.top`.
///
/// The container must be scrolled to [`Direction::measurement_scroll`] when
/// the rectangles are taken.
#[must_use]
pub fn position_offset(geometry: &PassGeometry, direction: Direction) -> PositionOffset {
    let horizontal = match direction {
        Direction::Ltr => geometry.container.x0 - geometry.probe.x0,
        Direction::Rtl => geometry.probe.x1 - geometry.container.x1,
    };
    PositionOffset {
        horizontal,
        vertical: geometry.container.y0 - geometry.probe.y0,
    }
}

/// Places the overflow indicator after the last visible item.
///
/// With a boundary item, the indicator sits flush against that item's
/// trailing edge, inclusive of the item's trailing margin and the positioning
/// correction. With no boundary item (nothing fits, or the toolbar is empty),
/// it sits at the container's logical start, correction only.
///
/// `visible` is threaded through unchanged; whether the indicator shows at
/// all is the controller's call (any overflow, or a forced-open menu).
#[must_use]
pub fn place_indicator<K>(
    last_visible: Option<&ItemSnapshot<K>>,
    container: Rect,
    offset: PositionOffset,
    direction: Direction,
    visible: bool,
) -> IndicatorPlacement {
    let inline_inset = match (last_visible, direction) {
        (Some(item), Direction::Ltr) => {
            item.rect.x1 - container.x0 + item.trailing_margin + offset.horizontal
        }
        (Some(item), Direction::Rtl) => {
            container.x1 - item.rect.x0 + item.trailing_margin + offset.horizontal
        }
        (None, _) => offset.horizontal,
    };
    IndicatorPlacement {
        visible,
        inline_inset,
        block_inset: offset.vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::{place_indicator, position_offset};
    use crate::{Direction, ItemSnapshot, PassGeometry, PositionOffset};
    use kurbo::Rect;

    fn geometry(container: Rect, probe: Rect) -> PassGeometry {
        PassGeometry {
            container,
            indicator: Rect::new(0.0, 0.0, 30.0, 40.0),
            probe,
        }
    }

    #[test]
    fn coincident_probe_yields_zero_offset() {
        let geometry = geometry(
            Rect::new(0.0, 0.0, 300.0, 40.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(
            position_offset(&geometry, Direction::Ltr),
            PositionOffset::ZERO
        );
    }

    #[test]
    fn padding_shows_up_as_negative_horizontal_correction() {
        // Border box starts at 10, content origin at 14: 4px of padding.
        let geometry = geometry(
            Rect::new(10.0, 20.0, 310.0, 60.0),
            Rect::new(14.0, 26.0, 14.0, 26.0),
        );
        let offset = position_offset(&geometry, Direction::Ltr);
        assert_eq!(offset.horizontal, -4.0);
        assert_eq!(offset.vertical, -6.0);
    }

    #[test]
    fn rtl_correction_uses_right_edges() {
        // In RTL the probe anchors at the content origin on the right.
        let geometry = geometry(
            Rect::new(10.0, 0.0, 310.0, 40.0),
            Rect::new(306.0, 0.0, 306.0, 0.0),
        );
        let offset = position_offset(&geometry, Direction::Rtl);
        assert_eq!(offset.horizontal, -4.0);
    }

    #[test]
    fn indicator_lands_after_the_boundary_item() {
        let container = Rect::new(0.0, 0.0, 300.0, 40.0);
        let item = ItemSnapshot::new(1_u32, Rect::new(100.0, 0.0, 220.0, 40.0));
        let placement =
            place_indicator(Some(&item), container, PositionOffset::ZERO, Direction::Ltr, true);
        assert!(placement.visible);
        assert_eq!(placement.inline_inset, 220.0);
        assert_eq!(placement.block_inset, 0.0);
    }

    #[test]
    fn trailing_margin_and_correction_push_the_indicator_out() {
        let container = Rect::new(10.0, 0.0, 310.0, 40.0);
        let item =
            ItemSnapshot::new(1_u32, Rect::new(110.0, 0.0, 230.0, 40.0)).with_trailing_margin(6.0);
        let offset = PositionOffset {
            horizontal: -4.0,
            vertical: -2.0,
        };
        let placement = place_indicator(Some(&item), container, offset, Direction::Ltr, true);
        // 230 - 10 (container left) + 6 (margin) - 4 (correction).
        assert_eq!(placement.inline_inset, 222.0);
        assert_eq!(placement.block_inset, -2.0);
    }

    #[test]
    fn rtl_placement_measures_from_the_right_edge() {
        let container = Rect::new(0.0, 0.0, 300.0, 40.0);
        let item =
            ItemSnapshot::new(1_u32, Rect::new(80.0, 0.0, 200.0, 40.0)).with_trailing_margin(6.0);
        let placement =
            place_indicator(Some(&item), container, PositionOffset::ZERO, Direction::Rtl, true);
        // 300 - 80 (item's trailing edge in RTL) + 6 (margin).
        assert_eq!(placement.inline_inset, 226.0);
    }

    #[test]
    fn without_a_boundary_item_only_the_correction_applies() {
        let container = Rect::new(0.0, 0.0, 300.0, 40.0);
        let offset = PositionOffset {
            horizontal: -4.0,
            vertical: 0.0,
        };
        let placement = place_indicator::<u32>(None, container, offset, Direction::Ltr, false);
        assert!(!placement.visible);
        assert_eq!(placement.inline_inset, -4.0);
    }
}
