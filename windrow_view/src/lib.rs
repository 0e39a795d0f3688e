// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_view --heading-base-level=0

//! Windrow View: the per-view drag-and-reorder controller.
//!
//! [`ReorderView`] ties the Windrow pieces together behind one surface: it
//! owns the order book, the drag session, the edge auto-scroll controller,
//! and the observer registry for a single reorderable list or grid. The host
//! renders and recognizes gestures; the controller decides what the drag
//! means.
//!
//! The division of labor:
//!
//! - The host reports item bounds after each layout pass
//!   ([`ReorderView::set_item_bounds`]) and the scroll viewport
//!   ([`ReorderView::set_viewport`]).
//! - Pointer gestures feed [`ReorderView::drag_start`],
//!   [`ReorderView::drag_update`], and [`ReorderView::drag_end`]; external
//!   aborts call [`ReorderView::drag_cancel`].
//! - The frame loop drives [`ReorderView::auto_scroll_tick`] with monotonic
//!   millisecond timestamps and applies the returned deltas to its scroll
//!   offset.
//! - Drag transitions reach the host through [`Callbacks`] and through
//!   observers registered with [`ReorderView::subscribe`].
//!
//! While a drag hovers an accepting target the on-screen order is
//! provisional: the dragged item is placed immediately before the target so
//! the user previews the outcome. Dropping commits that order; releasing
//! anywhere else rolls back to the order captured at drag start.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use windrow_order::Item;
//! use windrow_view::{ReorderView, ViewConfig};
//!
//! let mut view: ReorderView<char, ()> = ReorderView::new(ViewConfig::default());
//! view.set_items(vec![Item::new('a', ()), Item::new('b', ()), Item::new('c', ())])
//!     .unwrap();
//!
//! // A vertical list, 20 logical pixels per row.
//! for (row, key) in ['a', 'b', 'c'].into_iter().enumerate() {
//!     let top = 20.0 * row as f64;
//!     view.set_item_bounds(key, Rect::new(0.0, top, 100.0, top + 20.0));
//! }
//!
//! // Lift 'a', hover 'c': the order previews the drop.
//! assert!(view.drag_start(&'a', Point::new(50.0, 10.0)));
//! view.drag_update(Point::new(50.0, 50.0));
//! assert_eq!(view.order(), ['b', 'a', 'c']);
//! assert_eq!(view.drop_target_highlight(), Some(&'c'));
//!
//! // Release commits.
//! assert!(view.drag_end(Point::new(50.0, 50.0), Vec2::ZERO));
//! assert_eq!(view.order(), ['b', 'a', 'c']);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod callbacks;
mod config;
mod view;

pub use bounds::BoundsMap;
pub use callbacks::{Callbacks, DragEndDetails};
pub use config::{DEFAULT_DRAGGING_OPACITY, ViewConfig};
pub use view::ReorderView;
