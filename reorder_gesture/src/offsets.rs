// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item visual offset bookkeeping.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Vec2;

/// Tracks the last visual translation written for each item, so redundant
/// writes can be suppressed.
///
/// Offsets are ephemeral gesture state: they are recomputed whenever the
/// permutation changes and cleared wholesale on commit. An item with no
/// entry is at rest (offset zero); storing a zero removes the entry.
#[derive(Clone, Debug, Default)]
pub struct OffsetTable<K> {
    offsets: HashMap<K, Vec2>,
}

impl<K: Eq + Hash> OffsetTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }

    /// Records `offset` for `key`. Returns `true` when the stored value
    /// changed, i.e. when the host actually needs to re-render the item.
    pub fn set(&mut self, key: K, offset: Vec2) -> bool {
        if offset == Vec2::ZERO {
            self.offsets.remove(&key).is_some()
        } else {
            self.offsets.insert(key, offset) != Some(offset)
        }
    }

    /// The current offset of `key` (zero when at rest).
    #[must_use]
    pub fn get(&self, key: &K) -> Vec2 {
        self.offsets.get(key).copied().unwrap_or(Vec2::ZERO)
    }

    /// Whether every item is at rest.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Drops all recorded offsets.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes_only() {
        let mut table: OffsetTable<u32> = OffsetTable::new();
        assert!(table.set(1, Vec2::new(0.0, 10.0)));
        // Same value again: redundant write, suppressed.
        assert!(!table.set(1, Vec2::new(0.0, 10.0)));
        assert!(table.set(1, Vec2::new(0.0, -10.0)));
        assert_eq!(table.get(&1), Vec2::new(0.0, -10.0));
    }

    #[test]
    fn zero_clears_the_entry() {
        let mut table: OffsetTable<u32> = OffsetTable::new();
        table.set(1, Vec2::new(5.0, 0.0));
        assert!(!table.is_clear());
        // Returning to rest is a change the first time…
        assert!(table.set(1, Vec2::ZERO));
        // …and suppressed once already at rest.
        assert!(!table.set(1, Vec2::ZERO));
        assert!(table.is_clear());
        assert_eq!(table.get(&1), Vec2::ZERO);
    }

    #[test]
    fn clear_resets_everything() {
        let mut table: OffsetTable<u32> = OffsetTable::new();
        table.set(1, Vec2::new(1.0, 2.0));
        table.set(2, Vec2::new(3.0, 4.0));
        table.clear();
        assert!(table.is_clear());
        assert_eq!(table.get(&2), Vec2::ZERO);
    }
}
