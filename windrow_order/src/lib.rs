// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_order --heading-base-level=0

//! Windrow Order: ordered keyed item registry and reorder engine.
//!
//! This crate owns the _bookkeeping_ of a reorderable item sequence: the
//! authoritative ordered list backing a drag-and-drop list or grid, plus the
//! reorder rules applied while an item is being dragged. It does **not** know
//! anything about pointers, gestures, or rendering; higher layers decide when
//! a reorder should happen and feed the resulting source/target pairs in.
//!
//! The core type is [`OrderBook`], a small generic container that tracks:
//! - The ordered sequence of [`Item`]s, with key uniqueness enforced by equality.
//! - A monotonically increasing **revision** counter that bumps when the
//!   order changes.
//!
//! The container is intentionally compact and opinionated:
//! - Keys live inline with their items; uniqueness is enforced by equality.
//! - No hashing or ordering constraints are imposed on `K`, making it easy to
//!   integrate with existing ID types such as generational handles from a
//!   scene tree. An optional `hashbrown` feature provides linear-time
//!   permutation checking for keys that do support hashing.
//! - Reordering is always a permutation: the sequence length and key set never
//!   change through [`OrderBook::move_before`], [`OrderBook::replace_order`],
//!   or [`OrderBook::restore`]. Wholesale content changes go through
//!   [`OrderBook::set_items`] instead.
//!
//! ## Minimal example
//!
//! ```rust
//! use windrow_order::{Item, OrderBook};
//!
//! let mut book = OrderBook::new();
//! book.set_items(vec![
//!     Item::new('a', "first"),
//!     Item::new('b', "second"),
//!     Item::new('c', "third"),
//!     Item::new('d', "fourth"),
//! ])
//! .unwrap();
//!
//! // Dragging 'a' over 'c' places 'a' immediately before 'c'.
//! let snapshot = book.snapshot();
//! assert!(book.move_before(&'a', &'c').unwrap());
//! assert_eq!(book.key_order(), ['b', 'a', 'c', 'd']);
//!
//! // Repeating the same move is a no-op, not an oscillation.
//! assert!(!book.move_before(&'a', &'c').unwrap());
//!
//! // A cancelled drag restores the exact pre-drag order.
//! book.restore(&snapshot).unwrap();
//! assert_eq!(book.key_order(), ['a', 'b', 'c', 'd']);
//! ```
//!
//! ## Reorder rule
//!
//! [`OrderBook::move_before`] removes the source from its current position and
//! reinserts it immediately before the target's position. The tie-break is
//! always *before*, never after, which makes the operation deterministic and
//! idempotent under repeated identical source/target pairs: a drag that keeps
//! hovering the same target keeps producing the same sequence. The pure
//! sequence-level rule is also exposed as [`provisional_order`] for callers
//! that want to compute a tentative order without touching a book.
//!
//! ## Grid items
//!
//! List and grid entries share one sequence. [`ItemSizing`] is a closed sum
//! type with variants for plain list items and the two staggered-grid tile
//! shapes (whole-cell spans and fixed main-axis extents); layout code matches
//! exhaustively on it instead of downcasting. Out-of-domain field values are
//! rejected as [`MalformedSizing`] when items enter the book.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod book;
mod item;

pub use book::{OrderBook, OrderError, OrderSnapshot, provisional_order};
pub use item::{Item, ItemSizing, MalformedSizing};
