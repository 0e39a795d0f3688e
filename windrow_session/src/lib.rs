// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_session --heading-base-level=0

//! Windrow Session: the drag session state machine.
//!
//! [`DragSession`] tracks one drag operation from start to drop or
//! cancellation: the source item, the latest pointer position, the current
//! candidate drop target, and the pre-drag order snapshot used to undo
//! provisional reorders.
//!
//! The session is a pure state machine: it does not
//! hit-test, does not own the item sequence, and never talks to observers
//! directly. Each operation returns the transition events and reorder
//! requests for the host to dispatch — feed it the hit-tested candidate under
//! the pointer, apply the returned [`ReorderRequest`] to your order book, and
//! publish the returned [`DragEvent`]s.
//!
//! ## Usage
//!
//! 1) On a drag gesture, call [`DragSession::start`] with the source key, the
//!    pointer position, and a snapshot of the current order.
//! 2) On each pointer move, call [`DragSession::update`] with the hit-tested
//!    candidate and an accept policy; apply the reorder request, dispatch the
//!    events.
//! 3) On release, call [`DragSession::finish`]; on an external abort, call
//!    [`DragSession::cancel`]. Both return a [`DragFinish`] telling the host
//!    whether to commit the provisional order or restore the snapshot.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use windrow_order::{Item, OrderBook};
//! use windrow_session::{DragFinish, DragSession};
//!
//! let mut book = OrderBook::new();
//! book.set_items(vec![Item::new('a', ()), Item::new('b', ()), Item::new('c', ())])
//!     .unwrap();
//!
//! let mut session = DragSession::new();
//! session.start('a', Point::new(0.0, 5.0), book.snapshot());
//! assert!(session.is_active());
//!
//! // Pointer moves over 'c'; the default-permissive policy accepts.
//! let update = session.update(Point::new(0.0, 25.0), Some(&'c'), |_, _, _| true);
//! let request = update.reorder.unwrap();
//! book.move_before(&request.source, &request.target).unwrap();
//! assert_eq!(book.key_order(), ['b', 'a', 'c']);
//!
//! // Release over the accepting target commits.
//! match session.finish(Point::new(0.0, 25.0), Vec2::ZERO) {
//!     Some(DragFinish::Dropped { source, target, .. }) => {
//!         assert_eq!((source, target), ('a', 'c'));
//!     }
//!     _ => unreachable!("release over an accepting target drops"),
//! }
//! assert!(!session.is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use windrow_events::DragEvent;
use windrow_order::OrderSnapshot;

/// Transition events returned by one session operation, in dispatch order.
pub type EventBatch<K> = SmallVec<[DragEvent<K>; 2]>;

/// A provisional reorder the host should apply to its order book.
#[derive(Clone, Debug, PartialEq)]
pub struct ReorderRequest<K> {
    /// The dragged item.
    pub source: K,
    /// The accepting candidate the source should be placed before.
    pub target: K,
}

/// Result of one [`DragSession::update`] call.
#[derive(Debug, Default)]
pub struct SessionUpdate<K> {
    /// Events to dispatch, in order.
    pub events: EventBatch<K>,
    /// Provisional reorder to apply before dispatching, if any.
    pub reorder: Option<ReorderRequest<K>>,
}

impl<K> SessionUpdate<K> {
    fn idle() -> Self {
        Self {
            events: SmallVec::new(),
            reorder: None,
        }
    }
}

/// How a drag session ended.
#[derive(Debug)]
pub enum DragFinish<K> {
    /// Released over an accepting target: commit the provisional order.
    Dropped {
        /// The dragged item.
        source: K,
        /// The final accepting target.
        target: K,
        /// Events to dispatch, in order.
        events: EventBatch<K>,
    },
    /// Released with no accepting target, or externally aborted: restore the
    /// snapshot taken at drag start.
    Cancelled {
        /// The dragged item.
        source: K,
        /// The pre-drag key order to restore.
        snapshot: OrderSnapshot<K>,
        /// Events to dispatch, in order.
        events: EventBatch<K>,
    },
}

#[derive(Clone, Debug)]
struct ActiveDrag<K> {
    source: K,
    start_pos: Point,
    pointer: Point,
    target: Option<(K, bool)>,
    snapshot: OrderSnapshot<K>,
}

/// State machine tracking one drag operation.
///
/// At most one drag is active per session value. Starting a drag while one is
/// active is a defensive no-op: the gesture layer should prevent overlapping
/// starts, and the session silently ignores them when it does not.
#[derive(Clone, Debug, Default)]
pub struct DragSession<K> {
    active: Option<ActiveDrag<K>>,
}

impl<K> DragSession<K> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the drag source key, if a drag is active.
    #[must_use]
    pub fn source(&self) -> Option<&K> {
        self.active.as_ref().map(|drag| &drag.source)
    }

    /// Returns the last known pointer position, if a drag is active.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.active.as_ref().map(|drag| drag.pointer)
    }

    /// Returns the current candidate target and whether it accepted.
    #[must_use]
    pub fn target(&self) -> Option<(&K, bool)> {
        self.active
            .as_ref()
            .and_then(|drag| drag.target.as_ref())
            .map(|(key, accepted)| (key, *accepted))
    }

    /// Returns the current candidate target if it accepted the source.
    ///
    /// This is what a view exposes as the drop-target highlight.
    #[must_use]
    pub fn accepted_target(&self) -> Option<&K> {
        match self.target() {
            Some((key, true)) => Some(key),
            _ => None,
        }
    }

    /// Returns the total pointer offset from the drag start position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        self.active
            .as_ref()
            .map(|drag| drag.pointer - drag.start_pos)
    }

    /// Returns the order snapshot taken when the drag started.
    #[must_use]
    pub fn snapshot(&self) -> Option<&OrderSnapshot<K>> {
        self.active.as_ref().map(|drag| &drag.snapshot)
    }
}

impl<K> DragSession<K>
where
    K: Clone + PartialEq,
{
    /// Starts a drag on `source`, entering the `Dragging` state.
    ///
    /// Returns the `Started` event to dispatch, or `None` if a drag is
    /// already active (the overlapping attempt is ignored). Draggability
    /// policy (disabled views, non-draggable keys) is the caller's check;
    /// the session only guards its own single-drag invariant.
    pub fn start(
        &mut self,
        source: K,
        position: Point,
        snapshot: OrderSnapshot<K>,
    ) -> Option<DragEvent<K>> {
        if self.active.is_some() {
            return None;
        }
        self.active = Some(ActiveDrag {
            source: source.clone(),
            start_pos: position,
            pointer: position,
            target: None,
            snapshot,
        });
        Some(DragEvent::Started { source })
    }

    /// Processes a pointer move.
    ///
    /// `candidate` is the hit-tested item under the pointer, resolved by the
    /// layer that owns geometry. `accept` is the drop policy, called as
    /// `(source, candidate, is_over_bounds)`; hosts wire their own callback
    /// or a default non-draggable-set check here.
    ///
    /// For an accepting candidate that differs from the current target, the
    /// returned update carries a `Left` event for the outgoing target plus a
    /// [`ReorderRequest`] placing the source before the candidate. A
    /// rejecting candidate is recorded (a release over it cancels) but never
    /// reorders. The candidate being the source itself, or no candidate at
    /// all, leaves the current target and emits `Left` for it.
    pub fn update(
        &mut self,
        position: Point,
        candidate: Option<&K>,
        mut accept: impl FnMut(&K, &K, bool) -> bool,
    ) -> SessionUpdate<K> {
        let Some(drag) = self.active.as_mut() else {
            return SessionUpdate::idle();
        };
        drag.pointer = position;

        let mut update = SessionUpdate::idle();
        let candidate = candidate.filter(|key| **key != drag.source);

        let Some(candidate) = candidate else {
            // Off every drop zone: leave the current target, keep the latest
            // provisional order on screen.
            if let Some((previous, _)) = drag.target.take() {
                update.events.push(DragEvent::Left { target: previous });
            }
            return update;
        };

        let accepted = accept(&drag.source, candidate, true);
        let target_changed = drag
            .target
            .as_ref()
            .is_none_or(|(current, _)| current != candidate);

        if target_changed {
            if let Some((previous, _)) = drag.target.take() {
                update.events.push(DragEvent::Left { target: previous });
            }
            if accepted {
                update.reorder = Some(ReorderRequest {
                    source: drag.source.clone(),
                    target: candidate.clone(),
                });
            }
        }

        drag.target = Some((candidate.clone(), accepted));
        update.events.push(DragEvent::Moved {
            source: drag.source.clone(),
            target: candidate.clone(),
            position,
            accepted,
        });
        update
    }

    /// Finishes the drag on pointer release.
    ///
    /// Over an accepting target this is a drop: the host commits the
    /// provisional order and dispatches `Accepted` then `Ended`. Otherwise —
    /// no candidate, or the last candidate rejected — the drag cancels and
    /// the host restores the returned snapshot. Returns `None` when idle.
    pub fn finish(&mut self, position: Point, velocity: Vec2) -> Option<DragFinish<K>> {
        let mut drag = self.active.take()?;
        drag.pointer = position;
        let offset = position - drag.start_pos;

        match drag.target {
            Some((target, true)) => {
                let mut events = EventBatch::new();
                events.push(DragEvent::Accepted {
                    source: drag.source.clone(),
                    target: target.clone(),
                });
                events.push(DragEvent::Ended {
                    source: drag.source.clone(),
                    position,
                    velocity,
                    offset,
                });
                Some(DragFinish::Dropped {
                    source: drag.source,
                    target,
                    events,
                })
            }
            _ => Some(Self::cancelled(drag, velocity, offset)),
        }
    }

    /// Cancels the drag from outside the pointer stream (source removed,
    /// gesture aborted, view teardown). Returns `None` when idle.
    pub fn cancel(&mut self) -> Option<DragFinish<K>> {
        let drag = self.active.take()?;
        let offset = drag.pointer - drag.start_pos;
        Some(Self::cancelled(drag, Vec2::ZERO, offset))
    }

    fn cancelled(drag: ActiveDrag<K>, velocity: Vec2, offset: Vec2) -> DragFinish<K> {
        let mut events = EventBatch::new();
        events.push(DragEvent::Cancelled {
            source: drag.source.clone(),
            position: drag.pointer,
            velocity,
            offset,
        });
        DragFinish::Cancelled {
            source: drag.source,
            snapshot: drag.snapshot,
            events,
        }
    }

    /// Snapshot of the current session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SessionDebugInfo<K> {
        SessionDebugInfo {
            active: self.is_active(),
            source: self.source().cloned(),
            target: self.target().map(|(key, _)| key.clone()),
            target_accepted: self.target().is_some_and(|(_, accepted)| accepted),
            start: self.active.as_ref().map(|drag| drag.start_pos),
            pointer: self.pointer(),
        }
    }
}

/// Debug snapshot of a [`DragSession`] state.
#[derive(Clone, Debug)]
pub struct SessionDebugInfo<K> {
    /// Whether a drag is in progress.
    pub active: bool,
    /// The drag source, if active.
    pub source: Option<K>,
    /// The current candidate target, if any.
    pub target: Option<K>,
    /// Whether the current candidate accepted the source.
    pub target_accepted: bool,
    /// Pointer position at drag start.
    pub start: Option<Point>,
    /// Last known pointer position.
    pub pointer: Option<Point>,
}
