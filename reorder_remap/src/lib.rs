// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder Remap: identity-keyed slot assignments and the reorder permutation.
//!
//! During a drag gesture, every item has two positions: the slot it was
//! captured in (its *rest* index, owned by the geometry snapshot) and the
//! slot it currently logically occupies (its *fake* index, which drifts as
//! the dragged item is carried over other items). This crate owns the fake
//! side: [`SlotAssignments`] is an identity-keyed side table mapping each
//! item key `K` to its fake index, and [`SlotAssignments::remap`] applies
//! the shift-gap permutation that moves the dragged item to a target slot.
//!
//! The permutation is the classic "remove and reinsert" expressed as a
//! contiguous shift, so intermediate moves never restructure anything:
//! moving the dragged item from fake index `from` to `to` with `from < to`
//! decrements every fake index in `(from, to]` by one (and symmetrically
//! increments `[to, from)` when `from > to`). The assignment is always a
//! bijection onto `0..N-1`; this invariant is debug-asserted after every
//! remap.
//!
//! Keys are small copyable-or-cheaply-clonable handles, as throughout the
//! workspace: the table associates data with items without owning them.
//!
//! ## Example
//!
//! ```rust
//! use reorder_remap::{RemapOutcome, SlotAssignments};
//!
//! let mut assignments = SlotAssignments::from_ordered(["a", "b", "c", "d", "e"]).unwrap();
//!
//! // Carry "b" (fake index 1) to slot 3: "c" and "d" each shift down one.
//! let RemapOutcome::Moved(shifts) = assignments.remap(&"b", 3) else {
//!     panic!("expected a move");
//! };
//! assert_eq!(shifts.len(), 3);
//! assert_eq!(assignments.index_of(&"b"), Some(3));
//! assert_eq!(assignments.index_of(&"c"), Some(1));
//! assert_eq!(assignments.index_of(&"d"), Some(2));
//! assert_eq!(assignments.index_of(&"e"), Some(4));
//!
//! // Repeating the same target is a no-op.
//! assert!(matches!(assignments.remap(&"b", 3), RemapOutcome::Unchanged));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// One item's fake index changing from `from` to `to` during a remap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shift<K> {
    /// The item that moved.
    pub key: K,
    /// Fake index before the remap.
    pub from: usize,
    /// Fake index after the remap.
    pub to: usize,
}

/// Shifts produced by a single remap.
///
/// A remap touches at most the contiguous run between the old and new
/// position of the dragged item, so the list is usually short.
pub type ShiftList<K> = SmallVec<[Shift<K>; 8]>;

/// Result of [`SlotAssignments::remap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemapOutcome<K> {
    /// Nothing moved: the target equals the dragged item's current fake
    /// index, is out of range, or the key is unknown.
    Unchanged,
    /// The permutation was applied. Non-dragged shifts come first in
    /// ascending old-index order; the dragged item's shift is last.
    Moved(ShiftList<K>),
}

/// Identity-keyed side table mapping each item to its current fake index.
///
/// Invariant: the fake indices held by all items are exactly `{0 .. N-1}`,
/// with no duplicates or gaps. [`SlotAssignments::remap`] preserves this by
/// construction and debug-asserts it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotAssignments<K: Eq + Hash> {
    indices: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> SlotAssignments<K> {
    /// Builds an assignment from keys in slot order: the first key gets fake
    /// index 0, and so on.
    ///
    /// Returns `None` if the same key appears twice (a duplicate would break
    /// the bijection).
    #[must_use]
    pub fn from_ordered(keys: impl IntoIterator<Item = K>) -> Option<Self> {
        let mut indices = HashMap::new();
        for (index, key) in keys.into_iter().enumerate() {
            if indices.insert(key, index).is_some() {
                return None;
            }
        }
        Some(Self { indices })
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no items are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The current fake index of `key`, if tracked.
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.indices.get(key).copied()
    }

    /// The key currently holding fake index `index`, if any.
    ///
    /// Linear in the number of items; reorderable lists are short.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.indices
            .iter()
            .find_map(|(key, &i)| (i == index).then_some(key))
    }

    /// All keys in ascending fake-index order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&K> {
        let mut entries: Vec<(&K, usize)> =
            self.indices.iter().map(|(key, &i)| (key, i)).collect();
        entries.sort_unstable_by_key(|&(_, i)| i);
        entries.into_iter().map(|(key, _)| key).collect()
    }

    /// Moves the dragged item to fake index `target`, shifting the items in
    /// between by one slot to close and open the gap.
    ///
    /// With `from` the dragged item's current fake index:
    /// - `from < target`: items in `(from, target]` shift to `index - 1`.
    /// - `from > target`: items in `[target, from)` shift to `index + 1`.
    /// - `from == target`, `target >= len`, or unknown key: no-op.
    ///
    /// Recomputation downstream (re-rendering every affected item) is
    /// comparatively expensive, so redundant input must stay `Unchanged`
    /// rather than producing empty move lists.
    pub fn remap(&mut self, dragged: &K, target: usize) -> RemapOutcome<K> {
        let Some(from) = self.index_of(dragged) else {
            return RemapOutcome::Unchanged;
        };
        if target >= self.indices.len() || target == from {
            return RemapOutcome::Unchanged;
        }

        let mut shifts = ShiftList::new();
        for (key, index) in &mut self.indices {
            if key == dragged {
                continue;
            }
            let old = *index;
            let new = if from < target && old > from && old <= target {
                old - 1
            } else if from > target && old >= target && old < from {
                old + 1
            } else {
                continue;
            };
            *index = new;
            shifts.push(Shift {
                key: key.clone(),
                from: old,
                to: new,
            });
        }
        // Deterministic output: hash-map iteration order is arbitrary.
        shifts.sort_unstable_by_key(|shift| shift.from);

        if let Some(index) = self.indices.get_mut(dragged) {
            *index = target;
        }
        shifts.push(Shift {
            key: dragged.clone(),
            from,
            to: target,
        });

        debug_assert!(
            self.is_permutation(),
            "remap must keep fake indices a bijection onto 0..len"
        );
        RemapOutcome::Moved(shifts)
    }

    /// Whether the fake indices form a bijection onto `0..len`.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.indices.len()];
        for &index in self.indices.values() {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> SlotAssignments<char> {
        SlotAssignments::from_ordered(['a', 'b', 'c', 'd', 'e']).unwrap()
    }

    fn indices(assignments: &SlotAssignments<char>) -> Vec<usize> {
        ['a', 'b', 'c', 'd', 'e']
            .iter()
            .map(|key| assignments.index_of(key).unwrap())
            .collect()
    }

    #[test]
    fn from_ordered_assigns_dense_indices() {
        let assignments = five();
        assert_eq!(assignments.len(), 5);
        assert_eq!(indices(&assignments), [0, 1, 2, 3, 4]);
        assert!(assignments.is_permutation());
    }

    #[test]
    fn from_ordered_rejects_duplicates() {
        assert!(SlotAssignments::from_ordered(['a', 'b', 'a']).is_none());
    }

    #[test]
    fn forward_shift_decrements_the_open_closed_range() {
        // Dragging index 1 to 3: items at 2, 3 land on 1, 2; 0 and 4 hold.
        let mut assignments = five();
        let RemapOutcome::Moved(shifts) = assignments.remap(&'b', 3) else {
            panic!("expected a move");
        };
        assert_eq!(indices(&assignments), [0, 3, 1, 2, 4]);
        assert_eq!(
            shifts.as_slice(),
            [
                Shift { key: 'c', from: 2, to: 1 },
                Shift { key: 'd', from: 3, to: 2 },
                Shift { key: 'b', from: 1, to: 3 },
            ]
        );
    }

    #[test]
    fn backward_shift_increments_the_closed_open_range() {
        // Dragging index 3 to 1: items at 1, 2 land on 2, 3; 0 and 4 hold.
        let mut assignments = five();
        let RemapOutcome::Moved(shifts) = assignments.remap(&'d', 1) else {
            panic!("expected a move");
        };
        assert_eq!(indices(&assignments), [0, 2, 3, 1, 4]);
        assert_eq!(
            shifts.as_slice(),
            [
                Shift { key: 'b', from: 1, to: 2 },
                Shift { key: 'c', from: 2, to: 3 },
                Shift { key: 'd', from: 3, to: 1 },
            ]
        );
    }

    #[test]
    fn repeated_target_is_unchanged() {
        let mut assignments = five();
        assert!(matches!(assignments.remap(&'b', 3), RemapOutcome::Moved(_)));
        assert_eq!(assignments.remap(&'b', 3), RemapOutcome::Unchanged);
        assert_eq!(indices(&assignments), [0, 3, 1, 2, 4]);
    }

    #[test]
    fn own_slot_out_of_range_and_unknown_are_unchanged() {
        let mut assignments = five();
        assert_eq!(assignments.remap(&'c', 2), RemapOutcome::Unchanged);
        assert_eq!(assignments.remap(&'c', 5), RemapOutcome::Unchanged);
        assert_eq!(assignments.remap(&'z', 0), RemapOutcome::Unchanged);
        assert_eq!(indices(&assignments), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn direction_change_returns_items_to_rest() {
        let mut assignments = five();
        assignments.remap(&'b', 4);
        assignments.remap(&'b', 0);
        assignments.remap(&'b', 1);
        assert_eq!(indices(&assignments), [0, 1, 2, 3, 4]);
        assert!(assignments.is_permutation());
    }

    #[test]
    fn permutation_invariant_over_an_arbitrary_sequence() {
        let mut assignments = five();
        for target in [4, 0, 2, 2, 3, 1, 4, 0] {
            assignments.remap(&'c', target);
            assert!(assignments.is_permutation());
        }
    }

    #[test]
    fn ordered_reflects_fake_indices() {
        let mut assignments = five();
        assignments.remap(&'c', 0);
        assert_eq!(assignments.ordered(), [&'c', &'a', &'b', &'d', &'e']);
        assert_eq!(assignments.key_at(0), Some(&'c'));
        assert_eq!(assignments.key_at(2), Some(&'b'));
        assert_eq!(assignments.key_at(5), None);
    }
}
