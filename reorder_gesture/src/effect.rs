// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing effect vocabulary.
//!
//! The controller never touches a widget tree. Each lifecycle call returns
//! an ordered batch of [`Effect`]s that a thin host adapter applies in
//! sequence: presentation transforms, ghost placement, the single
//! structural move, and gesture hooks.

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

/// Where the dragged element lands relative to the element currently at the
/// target slot.
///
/// Forward moves insert after, backward moves insert before, so the element
/// ends up in the slot it visually occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Insert before the element at the target slot.
    Before,
    /// Insert after the element at the target slot.
    After,
}

/// One instruction for the host, in dispatch order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<K> {
    /// A gesture began on `key`. Hosts typically add drag styling here.
    GestureStarted {
        /// The dragged item.
        key: K,
    },
    /// Create the drag ghost mirroring the dragged item's rest rectangle
    /// (container-local). Cosmetic only.
    ShowGhost {
        /// The dragged item the ghost mirrors.
        key: K,
        /// The ghost's initial rectangle, container-local.
        rect: Rect,
    },
    /// Move the ghost so its top-left sits at `origin` (container-local).
    /// Emitted on every move; the ghost preserves the grab offset.
    MoveGhost {
        /// New top-left of the ghost, container-local.
        origin: Point,
    },
    /// Destroy the drag ghost.
    RemoveGhost,
    /// Apply a visual-only translation to one item. An offset of zero
    /// returns the item to its rest position. No structural side effects.
    SetOffset {
        /// The item to translate.
        key: K,
        /// Translation from the item's rest position.
        offset: Vec2,
    },
    /// Reset every item's translation to zero. Emitted in the same batch as
    /// [`Effect::MoveItem`] so the host can apply both in one tick and
    /// avoid a visible snap.
    ClearOffsets,
    /// The single structural move of a committed gesture: reinsert `key`
    /// (the child at position `from`) relative to the element currently at
    /// child position `to`.
    MoveItem {
        /// The dragged item.
        key: K,
        /// Child position the element is leaving.
        from: usize,
        /// Child position of the reference element.
        to: usize,
        /// Insert before or after the reference element.
        placement: Placement,
    },
    /// The gesture ended. `committed` is `true` exactly when a
    /// [`Effect::MoveItem`] was emitted, so hosts can fire an
    /// "order changed" hook precisely when real order changed.
    GestureEnded {
        /// The item that was dragged.
        key: K,
        /// Whether real element order changed.
        committed: bool,
    },
}

/// An ordered batch of effects produced by one lifecycle call.
///
/// Empty when the call was ignored (stray event, non-draggable press, …).
pub type EffectBatch<K> = SmallVec<[Effect<K>; 8]>;
