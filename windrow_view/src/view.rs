// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-view drag-and-reorder controller.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::{Point, Rect, Vec2};
use windrow_autoscroll::{Axis, EdgeScroll, EdgeScrollConfig};
use windrow_events::{DragEvent, ObserverId, Observers};
use windrow_order::{Item, OrderBook, OrderError, OrderSnapshot};
use windrow_session::{DragFinish, DragSession, EventBatch, SessionDebugInfo};

use crate::bounds::BoundsMap;
use crate::callbacks::{Callbacks, DragEndDetails};
use crate::config::ViewConfig;

/// Coordinates one reorderable view: the item order, the drag session, edge
/// auto-scrolling, and event delivery to observers and callbacks.
///
/// The controller owns no geometry or timers. The host reports item bounds
/// after layout, feeds pointer positions into the drag operations, and drives
/// [`ReorderView::auto_scroll_tick`] from its frame loop. In return the
/// controller keeps the order book consistent through provisional reorders,
/// commits, and rollbacks, and tells everyone who asked.
pub struct ReorderView<K, P> {
    book: OrderBook<K, P>,
    session: DragSession<K>,
    autoscroll: EdgeScroll,
    observers: Observers<DragEvent<K>>,
    config: ViewConfig<K>,
    callbacks: Callbacks<K>,
    bounds: BoundsMap<K>,
    viewport: Option<(Axis, Range<f64>)>,
}

impl<K, P> Default for ReorderView<K, P> {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl<K, P> ReorderView<K, P> {
    /// Creates an empty view with the given configuration.
    #[must_use]
    pub fn new(config: ViewConfig<K>) -> Self {
        let autoscroll = EdgeScroll::new(EdgeScrollConfig {
            period_ms: config.edge_scroll_period_ms(),
            ..EdgeScrollConfig::default()
        });
        Self {
            book: OrderBook::new(),
            session: DragSession::new(),
            autoscroll,
            observers: Observers::new(),
            config,
            callbacks: Callbacks::new(),
            bounds: BoundsMap::new(),
            viewport: None,
        }
    }

    /// Returns the items in their current (possibly provisional) order.
    #[must_use]
    pub fn items(&self) -> &[Item<K, P>] {
        self.book.items()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.book.len()
    }

    /// Returns `true` if the view holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Returns the order revision; it increases on every observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.book.revision()
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig<K> {
        &self.config
    }

    /// Mutable access to the host callbacks.
    pub fn callbacks_mut(&mut self) -> &mut Callbacks<K> {
        &mut self.callbacks
    }

    /// Registers an observer for this view's drag events.
    pub fn subscribe(&mut self, handler: impl FnMut(&DragEvent<K>) + 'static) -> ObserverId {
        self.observers.subscribe(handler)
    }

    /// Removes an observer, returning `true` if it was still live.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Sets the scroll axis and visible extent used for edge auto-scrolling.
    pub fn set_viewport(&mut self, axis: Axis, span: Range<f64>) {
        self.viewport = Some((axis, span));
    }

    /// Forgets the viewport; auto-scroll ticks emit nothing without one.
    pub fn clear_viewport(&mut self) {
        self.viewport = None;
    }

    /// Returns the key of the item currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&K> {
        self.session.source()
    }

    /// Returns the key the renderer should highlight as the drop target.
    ///
    /// This is the hovered candidate only while it accepts the source.
    #[must_use]
    pub fn drop_target_highlight(&self) -> Option<&K> {
        self.session.accepted_target()
    }

    /// Snapshot of the drag session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SessionDebugInfo<K>
    where
        K: Clone + PartialEq,
    {
        self.session.debug_info()
    }
}

impl<K, P> ReorderView<K, P>
where
    K: Clone + PartialEq,
{
    /// Returns the current key order.
    #[must_use]
    pub fn order(&self) -> Vec<K> {
        self.book.key_order()
    }

    /// Returns `true` if a drag may start on `key` right now.
    ///
    /// Requires the view to be enabled, the key to be present, and the key
    /// not to be in the non-draggable set.
    #[must_use]
    pub fn is_draggable(&self, key: &K) -> bool {
        self.config.enabled() && !self.config.is_non_draggable(key) && self.book.contains(key)
    }

    /// Returns the opacity the renderer should apply to `key`.
    ///
    /// The configured dragging opacity for the in-flight item, `1.0` for
    /// everything else.
    #[must_use]
    pub fn item_opacity(&self, key: &K) -> f64 {
        if self.session.source() == Some(key) {
            self.config.dragging_opacity()
        } else {
            1.0
        }
    }

    /// Records the bounds for `key` after a layout pass.
    pub fn set_item_bounds(&mut self, key: K, bounds: Rect) {
        self.bounds.set(key, bounds);
    }

    /// Forgets the bounds for `key`.
    pub fn remove_item_bounds(&mut self, key: &K) {
        self.bounds.remove(key);
    }

    /// Returns the recorded bounds for `key`.
    #[must_use]
    pub fn item_bounds(&self, key: &K) -> Option<Rect> {
        self.bounds.get(key)
    }

    /// Forgets every recorded rectangle, e.g. before a full relayout.
    pub fn clear_item_bounds(&mut self) {
        self.bounds.clear();
    }

    /// Returns the key under `position` per the last reported bounds.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<&K> {
        self.bounds.hit_test(position)
    }

    /// Applies a new configuration.
    ///
    /// Applying a disabled configuration cancels any in-flight drag; turning
    /// edge scroll off disengages the auto-scroll controller immediately.
    pub fn set_config(&mut self, config: ViewConfig<K>) {
        if !config.enabled() {
            self.drag_cancel();
        } else if !config.edge_scroll() {
            self.autoscroll.disengage();
        }
        self.config = config;
    }

    /// Replaces the item set, cancelling any in-flight drag first.
    ///
    /// Fails on duplicate keys or malformed sizing; the previous items are
    /// kept on failure.
    pub fn set_items(&mut self, items: Vec<Item<K, P>>) -> Result<(), OrderError<K>> {
        self.drag_cancel();
        self.bounds.clear();
        self.book.set_items(items)
    }

    /// Applies a host-initiated permutation of the current keys.
    ///
    /// Cancels any in-flight drag first, then publishes `OrderChanged` if the
    /// order actually changed. No `on_reorder` callback fires; that is
    /// reserved for drops.
    pub fn replace_order(&mut self, new_order: &[K]) -> Result<(), OrderError<K>> {
        self.drag_cancel();
        let before = self.book.revision();
        self.book.replace_order(new_order)?;
        if self.book.revision() != before {
            self.dispatch(DragEvent::OrderChanged {
                order: self.book.key_order(),
            });
        }
        Ok(())
    }

    /// Starts a drag on `source` at the given pointer position.
    ///
    /// Returns `false` without side effects when the view is disabled, the
    /// key is unknown or non-draggable, or a drag is already active.
    pub fn drag_start(&mut self, source: &K, position: Point) -> bool {
        if !self.is_draggable(source) {
            return false;
        }
        let snapshot = self.book.snapshot();
        let Some(event) = self.session.start(source.clone(), position, snapshot) else {
            return false;
        };
        if self.config.edge_scroll() {
            let mut scroll_config = self.autoscroll.config();
            scroll_config.period_ms = self.config.edge_scroll_period_ms();
            self.autoscroll.set_config(scroll_config);
            self.autoscroll.engage();
        }
        self.dispatch(event);
        true
    }

    /// Feeds a pointer move into the active drag. No-op while idle.
    ///
    /// Hit-tests the reported bounds for the candidate under the pointer,
    /// consults `on_will_accept`, applies the provisional reorder for an
    /// accepting candidate, and dispatches the resulting events.
    pub fn drag_update(&mut self, position: Point) {
        if !self.session.is_active() {
            return;
        }
        let candidate = self.bounds.hit_test(position).cloned();
        let will_accept = &mut self.callbacks.on_will_accept;
        let config = &self.config;
        let update = self
            .session
            .update(position, candidate.as_ref(), |source, target, over| {
                match will_accept.as_mut() {
                    Some(accept) => accept(source, target, over),
                    None => !config.is_non_draggable(target),
                }
            });

        if let Some(request) = update.reorder
            && self.book.move_before(&request.source, &request.target).is_err()
        {
            // The hit test matched bounds for a key the book no longer
            // holds. The drag cannot proceed against stale geometry.
            self.dispatch_batch(update.events);
            self.drag_cancel();
            return;
        }
        self.dispatch_batch(update.events);
    }

    /// Finishes the drag on pointer release.
    ///
    /// Over an accepting target the provisional order commits: `Accepted`,
    /// `Ended`, and `OrderChanged` are published and `on_reorder` fires once
    /// with the final order. Anywhere else the drag cancels: the pre-drag
    /// order is restored and `on_draggable_canceled` then `on_drag_end` run.
    /// Returns `false` while idle.
    pub fn drag_end(&mut self, position: Point, velocity: Vec2) -> bool {
        let Some(finish) = self.session.finish(position, velocity) else {
            return false;
        };
        self.autoscroll.disengage();
        match finish {
            DragFinish::Dropped { events, .. } => {
                self.dispatch_batch(events);
                let order = self.book.key_order();
                self.dispatch(DragEvent::OrderChanged {
                    order: order.clone(),
                });
                if let Some(on_reorder) = &mut self.callbacks.on_reorder {
                    on_reorder(&order);
                }
            }
            DragFinish::Cancelled {
                snapshot, events, ..
            } => self.rollback(&snapshot, events),
        }
        true
    }

    /// Cancels any in-flight drag and restores the pre-drag order.
    ///
    /// Safe to call while idle; returns `true` if a drag was cancelled.
    pub fn drag_cancel(&mut self) -> bool {
        let Some(finish) = self.session.cancel() else {
            return false;
        };
        self.autoscroll.disengage();
        if let DragFinish::Cancelled {
            snapshot, events, ..
        } = finish
        {
            self.rollback(&snapshot, events);
        }
        true
    }

    /// Produces the auto-scroll delta for this instant, if one is due.
    ///
    /// `now_ms` is a caller-supplied monotonic timestamp. Emits only while a
    /// drag is active, edge scrolling is enabled, a viewport is known, and
    /// the pointer sits in a hot zone; at most one delta per configured
    /// period. The host applies the signed delta to its scroll offset.
    pub fn auto_scroll_tick(&mut self, now_ms: u64) -> Option<f64> {
        let pointer = self.session.pointer()?;
        let (axis, span) = self.viewport.clone()?;
        self.autoscroll.tick(now_ms, axis.coord(pointer), span)
    }

    fn rollback(&mut self, snapshot: &OrderSnapshot<K>, events: EventBatch<K>) {
        // Item mutations cancel the drag before touching the book, so the
        // snapshot keys always match the current key set.
        let restored = self.book.restore(snapshot);
        debug_assert!(restored.is_ok(), "drag snapshot diverged from the book");
        self.dispatch_batch(events);
    }

    fn dispatch_batch(&mut self, events: EventBatch<K>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Publishes one event to observers, then runs the matching callback.
    fn dispatch(&mut self, event: DragEvent<K>) {
        self.observers.publish(&event);
        match event {
            DragEvent::Started { source } => {
                if let Some(on_drag_started) = &mut self.callbacks.on_drag_started {
                    on_drag_started(&source);
                }
            }
            DragEvent::Left { target } => {
                if let Some(on_leave) = &mut self.callbacks.on_leave {
                    on_leave(&target);
                }
            }
            DragEvent::Accepted { source, target } => {
                if let Some(on_accept) = &mut self.callbacks.on_accept {
                    on_accept(&source, &target);
                }
            }
            DragEvent::Ended {
                source,
                position,
                velocity,
                offset,
            } => {
                if let Some(on_drag_end) = &mut self.callbacks.on_drag_end {
                    on_drag_end(
                        DragEndDetails {
                            position,
                            velocity,
                            offset,
                        },
                        &source,
                    );
                }
                if let Some(on_drag_completed) = &mut self.callbacks.on_drag_completed {
                    on_drag_completed(&source);
                }
            }
            DragEvent::Cancelled {
                source,
                position,
                velocity,
                offset,
            } => {
                if let Some(on_draggable_canceled) = &mut self.callbacks.on_draggable_canceled {
                    on_draggable_canceled(velocity, offset, &source);
                }
                if let Some(on_drag_end) = &mut self.callbacks.on_drag_end {
                    on_drag_end(
                        DragEndDetails {
                            position,
                            velocity,
                            offset,
                        },
                        &source,
                    );
                }
            }
            DragEvent::Moved {
                target, position, ..
            } => {
                if let Some(on_move) = &mut self.callbacks.on_move {
                    on_move(&target, position);
                }
            }
            DragEvent::OrderChanged { .. } => {}
        }
    }
}

impl<K: fmt::Debug, P> fmt::Debug for ReorderView<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderView")
            .field("len", &self.book.len())
            .field("revision", &self.book.revision())
            .field("dragging", &self.session.source())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
