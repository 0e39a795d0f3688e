// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks invoked on drag transitions.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

/// Pointer kinematics at the end of a drag, dropped or cancelled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEndDetails {
    /// Pointer position at release.
    pub position: Point,
    /// Pointer velocity at release.
    pub velocity: Vec2,
    /// Total pointer offset from the drag start position.
    pub offset: Vec2,
}

/// Optional host callbacks, invoked synchronously by the view alongside the
/// events it publishes to observers.
///
/// All callbacks default to `None`. `on_will_accept` is the drop policy:
/// called as `(source, candidate, is_over_bounds)` while hovering, its answer
/// decides whether the candidate becomes an accepting target. Absent, every
/// candidate outside the configured non-draggable set accepts.
pub struct Callbacks<K> {
    /// A drag began on the given source.
    pub on_drag_started: Option<Box<dyn FnMut(&K)>>,
    /// Drop policy for a hovered candidate:
    /// `(source, candidate, is_over_bounds) -> accept`.
    /// Absent, candidates accept unless they are in the non-draggable set.
    pub on_will_accept: Option<Box<dyn FnMut(&K, &K, bool) -> bool>>,
    /// The pointer moved over a candidate: `(candidate, position)`.
    pub on_move: Option<Box<dyn FnMut(&K, Point)>>,
    /// A drop target accepted the source on release.
    pub on_accept: Option<Box<dyn FnMut(&K, &K)>>,
    /// The pointer left the given candidate.
    pub on_leave: Option<Box<dyn FnMut(&K)>>,
    /// A drag ended, by drop or cancellation, with release kinematics.
    /// On a drop it runs after `on_accept`; on a cancel after
    /// `on_draggable_canceled`.
    pub on_drag_end: Option<Box<dyn FnMut(DragEndDetails, &K)>>,
    /// A drag completed in a successful drop; fired after `on_drag_end`.
    pub on_drag_completed: Option<Box<dyn FnMut(&K)>>,
    /// A drag was cancelled: `(velocity, offset, source)`.
    pub on_draggable_canceled: Option<Box<dyn FnMut(Vec2, Vec2, &K)>>,
    /// A drop committed a new order; receives the full key order once per
    /// completed drag.
    pub on_reorder: Option<Box<dyn FnMut(&[K])>>,
}

impl<K> Default for Callbacks<K> {
    fn default() -> Self {
        Self {
            on_drag_started: None,
            on_will_accept: None,
            on_move: None,
            on_accept: None,
            on_leave: None,
            on_drag_end: None,
            on_drag_completed: None,
            on_draggable_canceled: None,
            on_reorder: None,
        }
    }
}

impl<K> Callbacks<K> {
    /// Creates an empty callback set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> fmt::Debug for Callbacks<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_drag_started", &self.on_drag_started.is_some())
            .field("on_will_accept", &self.on_will_accept.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_accept", &self.on_accept.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_drag_completed", &self.on_drag_completed.is_some())
            .field(
                "on_draggable_canceled",
                &self.on_draggable_canceled.is_some(),
            )
            .field("on_reorder", &self.on_reorder.is_some())
            .finish()
    }
}
