// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_events --heading-base-level=0

//! Windrow Events: drag lifecycle events and a per-view observer registry.
//!
//! Reorderable views need to tell their rendering layer about drag
//! transitions without coupling the coordination core to specific widgets.
//! This crate provides the two halves of that channel:
//!
//! - [`DragEvent`]: the structured event vocabulary — drag started, moved,
//!   accepted, left, ended, cancelled, and order changed.
//! - [`Observers`]: an explicit observer registry owned by one view instance.
//!   There is no ambient global bus; subscribing and unsubscribing are tied to
//!   the instance that owns the registry, so teardown is deterministic.
//!
//! Publication is fire-and-forget: [`Observers::publish`] synchronously
//! invokes every live observer and never inspects or waits on their results.
//! A single observer sees events in exactly the order they were published;
//! no ordering is guaranteed *across* observers.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use windrow_events::{DragEvent, Observers};
//!
//! let mut observers = Observers::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let id = observers.subscribe(move |event: &DragEvent<u32>| {
//!     if let DragEvent::Started { source } = event {
//!         sink.borrow_mut().push(*source);
//!     }
//! });
//!
//! observers.publish(&DragEvent::Started { source: 7 });
//! assert_eq!(*seen.borrow(), vec![7]);
//!
//! // Unsubscribing stops delivery; stale ids are rejected.
//! assert!(observers.unsubscribe(id));
//! assert!(!observers.unsubscribe(id));
//! observers.publish(&DragEvent::Started { source: 8 });
//! assert_eq!(*seen.borrow(), vec![7]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

/// A drag lifecycle transition published by a reorderable view.
///
/// `K` is the caller's item key type. Pointer positions are in the view's
/// coordinate space; velocities and offsets are vectors in the same space.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent<K> {
    /// A drag began on the given source item.
    Started {
        /// Key of the item being dragged.
        source: K,
    },
    /// The pointer moved over a candidate drop target.
    Moved {
        /// Key of the item being dragged.
        source: K,
        /// Key of the hit-tested candidate under the pointer.
        target: K,
        /// Pointer position at the time of the move.
        position: Point,
        /// Whether the candidate accepted the dragged item.
        accepted: bool,
    },
    /// A drop target accepted the dragged item on release.
    Accepted {
        /// Key of the dropped item.
        source: K,
        /// Key of the accepting target.
        target: K,
    },
    /// The pointer left the current candidate target.
    Left {
        /// Key of the target that is no longer hovered.
        target: K,
    },
    /// The drag finished with a successful drop.
    Ended {
        /// Key of the dropped item.
        source: K,
        /// Pointer position at release.
        position: Point,
        /// Pointer velocity at release.
        velocity: Vec2,
        /// Total pointer offset from the drag start position.
        offset: Vec2,
    },
    /// The drag was cancelled; the pre-drag order has been restored.
    Cancelled {
        /// Key of the item whose drag was cancelled.
        source: K,
        /// Last known pointer position at cancellation.
        position: Point,
        /// Pointer velocity at cancellation (zero for external cancels).
        velocity: Vec2,
        /// Total pointer offset from the drag start position.
        offset: Vec2,
    },
    /// The authoritative order changed (committed drop or explicit
    /// reordering). Carries the full new key order for persistence.
    OrderChanged {
        /// The complete new key order.
        order: Vec<K>,
    },
}

/// Identifies one subscription in an [`Observers`] registry.
///
/// Ids are generational: once an observer is unsubscribed its id goes stale
/// and is rejected, even if the underlying slot is later reused for a new
/// subscriber.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId {
    slot: usize,
    generation: u64,
}

struct Slot<E> {
    generation: u64,
    handler: Option<Box<dyn FnMut(&E)>>,
}

/// An explicit observer registry scoped to one view instance.
///
/// Observers are boxed callbacks invoked synchronously on
/// [`Observers::publish`], in slot order. The registry is owned by the view
/// it serves; dropping the view drops every subscription with it.
#[derive(Default)]
pub struct Observers<E> {
    slots: Vec<Slot<E>>,
}

impl<E> Observers<E> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Registers an observer and returns its subscription id.
    ///
    /// Vacant slots left by earlier unsubscriptions are reused; the
    /// generation stored in the returned id keeps stale ids from detaching
    /// the new occupant.
    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> ObserverId {
        let handler = Box::new(handler);
        if let Some(slot) = self
            .slots
            .iter()
            .position(|slot| slot.handler.is_none())
        {
            let entry = &mut self.slots[slot];
            entry.generation = entry.generation.wrapping_add(1);
            entry.handler = Some(handler);
            return ObserverId {
                slot,
                generation: entry.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            handler: Some(handler),
        });
        ObserverId {
            slot: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Removes a subscription, returning `true` if it was still live.
    ///
    /// Stale or foreign ids are ignored and return `false`.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.slots.get_mut(id.slot) {
            Some(slot) if slot.generation == id.generation && slot.handler.is_some() => {
                slot.handler = None;
                true
            }
            _ => false,
        }
    }

    /// Delivers an event to every live observer.
    ///
    /// Fire-and-forget: observers run synchronously, in slot order, and their
    /// effects are not observed by the publisher. A single observer sees
    /// publications in order.
    pub fn publish(&mut self, event: &E) {
        for slot in &mut self.slots {
            if let Some(handler) = slot.handler.as_mut() {
                handler(event);
            }
        }
    }

    /// Returns the number of live observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.handler.is_some())
            .count()
    }

    /// Returns `true` if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every subscription at once.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("live", &self.len())
            .field("slots", &self.slots.len())
            .finish()
    }
}
