// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reorder over a toy in-memory host.
//!
//! This example shows the full engine loop:
//! - `reorder_gesture` drives the press → move → release lifecycle,
//! - the host applies each returned `Effect` batch to a small element
//!   model (offsets, ghost, one structural move on commit),
//! - after the commit the host re-lays-out the list and recaptures.
//!
//! Run:
//! - `cargo run -p reorder_demos --example vertical_list`

use std::collections::HashMap;

use kurbo::{Point, Rect, Vec2};
use reorder_gesture::{Effect, ItemLayout, Placement, ReorderController};

/// A 100×10 row at child position `index` in a vertical list.
fn row(index: usize) -> Rect {
    let top = index as f64 * 10.0;
    Rect::new(0.0, top, 100.0, top + 10.0)
}

/// The host's view of the world: real sibling order, per-item transforms,
/// and an optional ghost.
#[derive(Debug, Default)]
struct Host {
    children: Vec<char>,
    offsets: HashMap<char, Vec2>,
    ghost: Option<(char, Rect)>,
}

impl Host {
    fn apply(&mut self, effects: impl IntoIterator<Item = Effect<char>>) {
        for effect in effects {
            println!("  effect: {effect:?}");
            match effect {
                Effect::GestureStarted { .. } => {}
                Effect::ShowGhost { key, rect } => self.ghost = Some((key, rect)),
                Effect::MoveGhost { origin } => {
                    if let Some((_, rect)) = &mut self.ghost {
                        *rect = rect.with_origin(origin);
                    }
                }
                Effect::RemoveGhost => self.ghost = None,
                Effect::SetOffset { key, offset } => {
                    if offset == Vec2::ZERO {
                        self.offsets.remove(&key);
                    } else {
                        self.offsets.insert(key, offset);
                    }
                }
                Effect::ClearOffsets => self.offsets.clear(),
                Effect::MoveItem { from, to, placement, .. } => {
                    // One structural move. In a sibling model the reference
                    // element shifts left once the dragged element is
                    // removed, so Before at a backward target and After at a
                    // forward target both land at `to`.
                    debug_assert_eq!(
                        placement,
                        if to > from { Placement::After } else { Placement::Before },
                        "placement follows the move direction"
                    );
                    let element = self.children.remove(from);
                    self.children.insert(to, element);
                }
                Effect::GestureEnded { key, committed } => {
                    println!("  gesture on {key:?} ended, committed: {committed}");
                }
            }
        }
    }

    /// Fresh layout after a structural change: rows in child order.
    fn layout(&self) -> Vec<ItemLayout<char>> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, &key)| ItemLayout::new(key, row(index)))
            .collect()
    }
}

fn main() {
    let mut host = Host {
        children: vec!['A', 'B', 'C', 'D'],
        ..Host::default()
    };
    let container = Rect::new(0.0, 0.0, 100.0, 40.0);

    let mut controller = ReorderController::new(container, host.layout())
        .expect("non-empty list with unique keys");

    println!("initial order: {:?}", host.children);

    // Press on C (child position 2) and carry it up into A's slot.
    println!("press C:");
    host.apply(controller.on_press(&'C', Point::new(50.0, 25.0)));

    // Passing over B's slot on the way up…
    println!("move over B:");
    host.apply(controller.on_move(Point::new(50.0, 15.0)));
    println!("  host offsets: {:?}", host.offsets);

    // …and into A's slot.
    println!("move over A:");
    host.apply(controller.on_move(Point::new(50.0, 5.0)));
    println!("  host offsets: {:?}", host.offsets);
    println!(
        "  provisional order: {:?}",
        controller.current_order()
    );

    // Release: one structural move, offsets cleared in the same batch.
    println!("release:");
    host.apply(controller.on_release());
    println!("committed order: {:?}", host.children);
    assert_eq!(host.children, ['C', 'A', 'B', 'D']);
    assert!(host.offsets.is_empty());
    assert!(host.ghost.is_none());

    // The committed layout is the new rest geometry.
    controller
        .recapture(container, host.layout())
        .expect("recapture after commit");
    assert!(!controller.needs_recapture());

    // A second gesture works against the fresh snapshot: drag A down one.
    println!("press A, move over B, release:");
    host.apply(controller.on_press(&'A', Point::new(50.0, 15.0)));
    host.apply(controller.on_move(Point::new(50.0, 25.0)));
    host.apply(controller.on_release());
    println!("final order: {:?}", host.children);
    assert_eq!(host.children, ['C', 'B', 'A', 'D']);
}
