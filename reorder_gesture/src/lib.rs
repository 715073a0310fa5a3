// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder Gesture: a host-agnostic drag-to-reorder engine for lists.
//!
//! ## Overview
//!
//! [`ReorderController`] orchestrates one reorderable container across the
//! press → move → release lifecycle. It owns the rest-geometry snapshot
//! (from `reorder_slots`), the identity → fake-index assignments (from
//! `reorder_remap`), and the per-gesture state, and it answers every
//! lifecycle call with a deterministic batch of [`Effect`]s — presentation
//! offsets, ghost placement, at most one structural move — that a thin host
//! adapter applies to the real element tree. The engine never touches
//! widgets or elements itself.
//!
//! ## Lifecycle
//!
//! 1) **Press** ([`ReorderController::on_press`]) — starts a gesture on a
//!    draggable item: records its origin slot and asks the host to show the
//!    drag ghost. Presses while a gesture is active, on unknown or
//!    non-draggable items, or while the snapshot is stale are ignored.
//! 2) **Move** ([`ReorderController::on_move`]) — re-places the ghost
//!    (which preserves the grab offset and whose center is the hit point),
//!    resolves the target slot against rest geometry, and when the target
//!    changed, shifts the in-between items by one slot and emits their new
//!    offsets. Items never change real order mid-gesture.
//! 3) **Release** ([`ReorderController::on_release`]) — commits: one
//!    structural [`Effect::MoveItem`] (none when dropped in place), all
//!    offsets cleared in the same batch, and a [`Effect::GestureEnded`]
//!    hook. After a committed move the host must call
//!    [`ReorderController::recapture`] with the fresh layout before the
//!    next gesture.
//!
//! [`ReorderController::cancel`] drops the item back in place through the
//! same teardown path.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use reorder_gesture::{Effect, ItemLayout, ReorderController};
//!
//! // A vertical list: a, b, c in 100×10 rows.
//! let rows = |i: usize| Rect::new(0.0, i as f64 * 10.0, 100.0, i as f64 * 10.0 + 10.0);
//! let mut controller = ReorderController::new(
//!     Rect::new(0.0, 0.0, 100.0, 30.0),
//!     ["a", "b", "c"]
//!         .into_iter()
//!         .enumerate()
//!         .map(|(i, key)| ItemLayout::new(key, rows(i))),
//! )
//! .unwrap();
//!
//! // Press on "c" and carry it up into "a"'s slot.
//! let _ = controller.on_press(&"c", Point::new(50.0, 25.0));
//! let _ = controller.on_move(Point::new(50.0, 5.0));
//! let effects = controller.on_release();
//!
//! assert!(effects.iter().any(|e| matches!(e, Effect::MoveItem { key: "c", .. })));
//! assert_eq!(controller.current_order(), [&"c", &"a", &"b"]);
//! ```
//!
//! ## Coordinates
//!
//! All pointer positions and the rectangles handed back in effects are
//! container-local; item rectangles passed to [`ReorderController::new`]
//! and [`ReorderController::recapture`] share a coordinate space with the
//! container rectangle and are converted on capture.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod effect;
mod error;
mod offsets;

pub use controller::{ItemFlags, ItemLayout, ReorderController};
pub use effect::{Effect, EffectBatch, Placement};
pub use error::SetupError;
pub use offsets::OffsetTable;
