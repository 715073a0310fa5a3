// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The press → move → release gesture state machine.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};

use reorder_remap::{RemapOutcome, SlotAssignments};
use reorder_slots::SlotSnapshot;

use crate::effect::{Effect, EffectBatch, Placement};
use crate::error::SetupError;
use crate::offsets::OffsetTable;

bitflags::bitflags! {
    /// Per-item behavior flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item can initiate a drag. Non-draggable items still occupy a
        /// slot, shift out of the way, and can be dropped on.
        const DRAGGABLE = 0b0000_0001;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::DRAGGABLE
    }
}

/// One item's identity, rest rectangle, and flags, fed to
/// [`ReorderController::new`] in real sibling order.
///
/// Rectangles are in the same coordinate space as the container rectangle
/// (for example, viewport coordinates); the controller converts them to
/// container-local slots.
#[derive(Clone, Debug)]
pub struct ItemLayout<K> {
    /// The item's identity handle.
    pub key: K,
    /// The item's rest bounding box.
    pub rect: Rect,
    /// Behavior flags.
    pub flags: ItemFlags,
}

impl<K> ItemLayout<K> {
    /// An item with default flags (draggable).
    pub fn new(key: K, rect: Rect) -> Self {
        Self {
            key,
            rect,
            flags: ItemFlags::default(),
        }
    }

    /// An item with explicit flags.
    pub fn with_flags(key: K, rect: Rect, flags: ItemFlags) -> Self {
        Self { key, rect, flags }
    }
}

/// Mutable state owned exclusively by an active gesture.
#[derive(Clone, Debug)]
struct DragState<K> {
    key: K,
    /// Fake index of the dragged item at press time, fixed for the gesture.
    origin_index: usize,
    /// Last slot the ghost center resolved to.
    current_target: Option<usize>,
    /// Target as of the last applied permutation; skips redundant remaps.
    previous_target: Option<usize>,
    press_point: Point,
    /// The dragged item's rest slot rectangle; also the ghost's geometry.
    rest_rect: Rect,
}

#[derive(Clone, Debug)]
enum Gesture<K> {
    Idle,
    Dragging(DragState<K>),
}

/// Orchestrates one reorderable container across the press → move → release
/// lifecycle.
///
/// The controller is host-agnostic: construct it from the container and
/// item geometry, feed it container-local pointer events, and dispatch the
/// returned [`Effect`] batches to the real element tree. Exactly one
/// gesture can be active at a time; presses while dragging and moves or
/// releases while idle are ignored with an empty batch.
///
/// After a batch containing [`Effect::MoveItem`], the real element order
/// has changed and the rest geometry on record is no longer authoritative:
/// the controller refuses further presses until
/// [`ReorderController::recapture`] is called with the freshly laid-out
/// items.
#[derive(Clone, Debug)]
pub struct ReorderController<K: Eq + Hash> {
    snapshot: SlotSnapshot,
    /// Rest order: key → the slot each item returns to with zero offset.
    rest: SlotAssignments<K>,
    /// Live order: key → current fake index; equals `rest` while idle.
    live: SlotAssignments<K>,
    flags: HashMap<K, ItemFlags>,
    offsets: OffsetTable<K>,
    gesture: Gesture<K>,
    stale: bool,
}

impl<K: Eq + Hash + Clone> ReorderController<K> {
    /// Creates a controller from the container rectangle and the in-order
    /// item layouts.
    ///
    /// # Errors
    ///
    /// [`SetupError::NoItems`] when `items` is empty and
    /// [`SetupError::DuplicateKey`] when two items share a key.
    pub fn new(
        container: Rect,
        items: impl IntoIterator<Item = ItemLayout<K>>,
    ) -> Result<Self, SetupError> {
        let items: Vec<ItemLayout<K>> = items.into_iter().collect();
        if items.is_empty() {
            return Err(SetupError::NoItems);
        }
        let snapshot = SlotSnapshot::capture(container, items.iter().map(|item| item.rect));
        let rest = SlotAssignments::from_ordered(items.iter().map(|item| item.key.clone()))
            .ok_or(SetupError::DuplicateKey)?;
        let flags = items
            .into_iter()
            .map(|item| (item.key, item.flags))
            .collect();
        Ok(Self {
            snapshot,
            live: rest.clone(),
            rest,
            flags,
            offsets: OffsetTable::new(),
            gesture: Gesture::Idle,
            stale: false,
        })
    }

    /// Replaces the tracked items and rest geometry with a fresh capture.
    ///
    /// Mandatory after every committed gesture, once the host has applied
    /// the structural move and re-laid-out the list; also the way to add or
    /// remove items between gestures.
    ///
    /// # Errors
    ///
    /// [`SetupError::GestureActive`] while a gesture is active, otherwise
    /// as [`ReorderController::new`].
    pub fn recapture(
        &mut self,
        container: Rect,
        items: impl IntoIterator<Item = ItemLayout<K>>,
    ) -> Result<(), SetupError> {
        if self.is_dragging() {
            return Err(SetupError::GestureActive);
        }
        *self = Self::new(container, items)?;
        Ok(())
    }

    /// Whether a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    /// The dragged item's key while a gesture is active.
    #[must_use]
    pub fn dragged(&self) -> Option<&K> {
        match &self.gesture {
            Gesture::Dragging(state) => Some(&state.key),
            Gesture::Idle => None,
        }
    }

    /// Whether a committed move has made the rest geometry stale.
    ///
    /// While `true`, presses are ignored until [`ReorderController::recapture`].
    #[must_use]
    pub fn needs_recapture(&self) -> bool {
        self.stale
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no items are tracked (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Keys in current logical order (committed order once idle).
    #[must_use]
    pub fn current_order(&self) -> Vec<&K> {
        self.live.ordered()
    }

    /// The current visual offset of `key` (zero when at rest).
    #[must_use]
    pub fn offset_of(&self, key: &K) -> Vec2 {
        self.offsets.get(key)
    }

    /// The rest-geometry snapshot currently in effect.
    #[must_use]
    pub fn snapshot(&self) -> &SlotSnapshot {
        &self.snapshot
    }

    /// Handles a press at `position` (container-local) on `key`.
    ///
    /// Ignored (empty batch) when a gesture is already active, the snapshot
    /// is stale, or the key is unknown or not [`ItemFlags::DRAGGABLE`].
    #[must_use]
    pub fn on_press(&mut self, key: &K, position: Point) -> EffectBatch<K> {
        let mut effects = EffectBatch::new();
        if self.is_dragging() || self.stale {
            return effects;
        }
        let draggable = self
            .flags
            .get(key)
            .is_some_and(|flags| flags.contains(ItemFlags::DRAGGABLE));
        if !draggable {
            return effects;
        }
        let Some(origin_index) = self.live.index_of(key) else {
            return effects;
        };
        let Some(slot) = self.snapshot.get(origin_index) else {
            return effects;
        };
        let rest_rect = slot.rect;
        self.gesture = Gesture::Dragging(DragState {
            key: key.clone(),
            origin_index,
            current_target: None,
            previous_target: None,
            press_point: position,
            rest_rect,
        });
        effects.push(Effect::GestureStarted { key: key.clone() });
        effects.push(Effect::ShowGhost {
            key: key.clone(),
            rect: rest_rect,
        });
        effects
    }

    /// Handles a pointer move to `position` (container-local).
    ///
    /// Always re-places the ghost. When the ghost center resolves to a slot
    /// that differs from the last applied target, remaps the permutation
    /// and emits the changed offsets; a hit outside every slot leaves the
    /// current target untouched. Ignored while idle.
    #[must_use]
    pub fn on_move(&mut self, position: Point) -> EffectBatch<K> {
        let mut effects = EffectBatch::new();
        let Gesture::Dragging(state) = &mut self.gesture else {
            return effects;
        };

        // The ghost preserves the grab offset; its center is the hit point.
        let ghost_rect = state.rest_rect + (position - state.press_point);
        effects.push(Effect::MoveGhost {
            origin: ghost_rect.origin(),
        });

        let Some(target) = self.snapshot.hit_test(ghost_rect.center()) else {
            return effects;
        };
        state.current_target = Some(target);
        if state.previous_target == Some(target) {
            return effects;
        }
        state.previous_target = Some(target);

        if let RemapOutcome::Moved(shifts) = self.live.remap(&state.key, target) {
            for shift in shifts {
                let Some(rest_index) = self.rest.index_of(&shift.key) else {
                    continue;
                };
                let Some(offset) = self.snapshot.offset_between(rest_index, shift.to) else {
                    continue;
                };
                if self.offsets.set(shift.key.clone(), offset) {
                    effects.push(Effect::SetOffset {
                        key: shift.key,
                        offset,
                    });
                }
            }
        }
        effects
    }

    /// Handles the release ending the gesture.
    ///
    /// Commits to the last resolved target (the origin slot when none was
    /// ever resolved, meaning "no move"). Ignored while idle.
    #[must_use]
    pub fn on_release(&mut self) -> EffectBatch<K> {
        let Gesture::Dragging(state) = core::mem::replace(&mut self.gesture, Gesture::Idle)
        else {
            return EffectBatch::new();
        };
        let final_index = state.current_target.unwrap_or(state.origin_index);
        debug_assert_eq!(
            self.live.index_of(&state.key),
            Some(final_index),
            "dragged item's fake index must match the last applied target"
        );
        self.finish(state, final_index)
    }

    /// Cancels an active gesture, dropping the item back in place.
    ///
    /// Routed through the same teardown as a release onto the origin slot.
    /// Ignored while idle.
    #[must_use]
    pub fn cancel(&mut self) -> EffectBatch<K> {
        let Gesture::Dragging(state) = core::mem::replace(&mut self.gesture, Gesture::Idle)
        else {
            return EffectBatch::new();
        };
        let origin_index = state.origin_index;
        self.finish(state, origin_index)
    }

    /// Commit protocol: one structural move at most, offsets cleared in the
    /// same batch, identity map rebuilt from the committed permutation.
    fn finish(&mut self, state: DragState<K>, final_index: usize) -> EffectBatch<K> {
        let mut effects = EffectBatch::new();
        effects.push(Effect::RemoveGhost);
        if final_index == state.origin_index {
            // Dropped in place (or cancelled mid-shift): restore rest order.
            self.live = self.rest.clone();
            if !self.offsets.is_clear() {
                self.offsets.clear();
                effects.push(Effect::ClearOffsets);
            }
            effects.push(Effect::GestureEnded {
                key: state.key,
                committed: false,
            });
        } else {
            let placement = if final_index > state.origin_index {
                Placement::After
            } else {
                Placement::Before
            };
            effects.push(Effect::MoveItem {
                key: state.key.clone(),
                from: state.origin_index,
                to: final_index,
                placement,
            });
            self.offsets.clear();
            effects.push(Effect::ClearOffsets);
            // The committed permutation becomes the new rest order; its
            // geometry stays unknown until the host recaptures.
            self.rest = self.live.clone();
            self.stale = true;
            effects.push(Effect::GestureEnded {
                key: state.key,
                committed: true,
            });
        }
        effects
    }
}
