// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder Slots: rest-geometry snapshots and hit testing for list reordering.
//!
//! A drag-to-reorder gesture needs a stable notion of *where the slots are*
//! that is independent of the transient translations applied to items while
//! they slide around. This crate captures that notion as a [`SlotSnapshot`]:
//! an ordered sequence of [`Slot`]s, one per item, each holding the item's
//! rest rectangle in container-local coordinates and the index it occupied
//! at capture time.
//!
//! The snapshot is immutable for the lifetime of one gesture. Hit testing
//! ([`SlotSnapshot::hit_test`]) and offset computation
//! ([`SlotSnapshot::offset_between`]) always resolve against this rest
//! layout, never against the items' current visual positions; logical
//! index bookkeeping during a gesture is a separate concern (see the
//! `reorder_remap` crate).
//!
//! ## Containment semantics
//!
//! Adjacent list slots share edges, so containment is **half-open**:
//! a point on the left/top edge of slot `k` — which is also the right/bottom
//! edge of slot `k - 1` — belongs to slot `k`, never to both and never to
//! neither. See [`contains_half_open`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use reorder_slots::SlotSnapshot;
//!
//! // A vertical list of three 100×10 items inside a container at (5, 5).
//! let container = Rect::new(5.0, 5.0, 105.0, 35.0);
//! let snapshot = SlotSnapshot::capture(
//!     container,
//!     [
//!         Rect::new(5.0, 5.0, 105.0, 15.0),
//!         Rect::new(5.0, 15.0, 105.0, 25.0),
//!         Rect::new(5.0, 25.0, 105.0, 35.0),
//!     ],
//! );
//!
//! // Hit points are container-local.
//! assert_eq!(snapshot.hit_test(Point::new(50.0, 12.0)), Some(1));
//! // A shared edge belongs to the slot starting there.
//! assert_eq!(snapshot.hit_test(Point::new(50.0, 10.0)), Some(1));
//! // Outside every slot.
//! assert_eq!(snapshot.hit_test(Point::new(50.0, 40.0)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

/// A rest-position rectangle plus the logical index it held at capture time.
///
/// Slot geometry is never mutated after capture; it describes the layout the
/// items return to when no gesture is active, not their current visual
/// position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    /// Rest rectangle in container-local coordinates.
    pub rect: Rect,
    /// Logical index at capture time (0-based, dense, contiguous).
    pub index: usize,
}

/// An immutable, ordered capture of every item's rest rectangle.
///
/// Capture once per gesture (and again after every committed reorder, since
/// the committed layout is the authoritative rest geometry all subsequent
/// animation offsets are computed against).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotSnapshot {
    slots: Vec<Slot>,
}

impl SlotSnapshot {
    /// Captures a snapshot from the container rectangle and the in-order
    /// item rectangles, all in a common (e.g. viewport) coordinate space.
    ///
    /// Each item rectangle is translated into container-local coordinates,
    /// so the snapshot is independent of where the container itself sits or
    /// scrolls. Slot indices are assigned 0..N-1 in iteration order, which
    /// must match the real sibling order of the items.
    #[must_use]
    pub fn capture(container: Rect, item_rects: impl IntoIterator<Item = Rect>) -> Self {
        let origin = container.origin().to_vec2();
        let slots = item_rects
            .into_iter()
            .enumerate()
            .map(|(index, rect)| Slot {
                rect: rect - origin,
                index,
            })
            .collect();
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the snapshot holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// All slots in capture order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Resolves `point` (container-local) to the first slot in capture
    /// order that contains it under half-open containment.
    ///
    /// Returns `None` when the point lies outside every slot (for example,
    /// dragged past the list's edge). Callers must treat `None` as "no
    /// change", never as a slot.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| contains_half_open(&slot.rect, point))
    }

    /// The translation that carries an item resting in slot `from` onto
    /// slot `to`, or `None` if either index is out of range.
    #[must_use]
    pub fn offset_between(&self, from: usize, to: usize) -> Option<Vec2> {
        let from = self.slots.get(from)?;
        let to = self.slots.get(to)?;
        Some(to.rect.origin() - from.rect.origin())
    }
}

/// Half-open rectangle containment: `x ∈ [x0, x1)` and `y ∈ [y0, y1)`.
///
/// Boundary pixels belong to the rectangle starting there, not the one
/// ending there, so a point on an edge shared by two adjacent slots resolves
/// to exactly one of them. An empty rectangle contains nothing.
#[must_use]
pub fn contains_half_open(rect: &Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x < rect.x1 && point.y >= rect.y0 && point.y < rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn vertical_snapshot() -> SlotSnapshot {
        // Three 100×10 rows inside a container offset to (5, 5).
        SlotSnapshot::capture(
            Rect::new(5.0, 5.0, 105.0, 35.0),
            [
                Rect::new(5.0, 5.0, 105.0, 15.0),
                Rect::new(5.0, 15.0, 105.0, 25.0),
                Rect::new(5.0, 25.0, 105.0, 35.0),
            ],
        )
    }

    #[test]
    fn capture_is_container_local() {
        let snapshot = vertical_snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(0).unwrap().rect, Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(snapshot.get(2).unwrap().rect, Rect::new(0.0, 20.0, 100.0, 30.0));
        assert_eq!(snapshot.get(2).unwrap().index, 2);
        assert!(snapshot.get(3).is_none());
    }

    #[test]
    fn hit_test_interior() {
        let snapshot = vertical_snapshot();
        assert_eq!(snapshot.hit_test(Point::new(50.0, 5.0)), Some(0));
        assert_eq!(snapshot.hit_test(Point::new(50.0, 12.0)), Some(1));
        assert_eq!(snapshot.hit_test(Point::new(50.0, 29.9)), Some(2));
    }

    #[test]
    fn shared_edge_belongs_to_the_slot_starting_there() {
        let snapshot = vertical_snapshot();
        // y = 10 is the bottom edge of slot 0 and the top edge of slot 1.
        assert_eq!(snapshot.hit_test(Point::new(50.0, 10.0)), Some(1));
        assert_eq!(snapshot.hit_test(Point::new(50.0, 20.0)), Some(2));
        // x = 0 is the left edge of every slot.
        assert_eq!(snapshot.hit_test(Point::new(0.0, 0.0)), Some(0));
    }

    #[test]
    fn outside_all_slots_is_none() {
        let snapshot = vertical_snapshot();
        assert_eq!(snapshot.hit_test(Point::new(50.0, -1.0)), None);
        // The far edge is exclusive.
        assert_eq!(snapshot.hit_test(Point::new(50.0, 30.0)), None);
        assert_eq!(snapshot.hit_test(Point::new(100.0, 5.0)), None);
    }

    #[test]
    fn overlapping_slots_resolve_to_the_first_in_order() {
        let snapshot = SlotSnapshot::capture(
            Rect::new(0.0, 0.0, 100.0, 20.0),
            [
                Rect::new(0.0, 0.0, 100.0, 15.0),
                Rect::new(0.0, 10.0, 100.0, 20.0),
            ],
        );
        assert_eq!(snapshot.hit_test(Point::new(50.0, 12.0)), Some(0));
    }

    #[test]
    fn empty_slot_contains_nothing() {
        let rect = Rect::new(10.0, 10.0, 10.0, 20.0);
        assert!(!contains_half_open(&rect, Point::new(10.0, 15.0)));
    }

    #[test]
    fn offset_between_slots() {
        let snapshot = vertical_snapshot();
        assert_eq!(snapshot.offset_between(0, 2), Some(Vec2::new(0.0, 20.0)));
        assert_eq!(snapshot.offset_between(2, 0), Some(Vec2::new(0.0, -20.0)));
        assert_eq!(snapshot.offset_between(1, 1), Some(Vec2::ZERO));
        assert_eq!(snapshot.offset_between(0, 3), None);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = SlotSnapshot::capture(Rect::new(0.0, 0.0, 10.0, 10.0), vec![]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.hit_test(Point::new(5.0, 5.0)), None);
    }
}
