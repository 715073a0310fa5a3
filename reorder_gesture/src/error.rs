// Copyright 2026 the Reorder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup-time errors.
//!
//! Only configuration can fail. Once a gesture is underway nothing in the
//! engine errors: stray lifecycle events are ignored with an empty effect
//! batch, and a hit test outside every slot is a normal "no change".

use core::fmt;

/// Fatal configuration error from [`crate::ReorderController::new`] or
/// [`crate::ReorderController::recapture`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The item list resolved to nothing.
    NoItems,
    /// The same key appeared twice in the item list.
    DuplicateKey,
    /// `recapture` was called while a gesture was active.
    GestureActive,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => write!(f, "item list is empty"),
            Self::DuplicateKey => write!(f, "duplicate item key"),
            Self::GestureActive => write!(f, "cannot recapture while a gesture is active"),
        }
    }
}

impl core::error::Error for SetupError {}
