// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `windrow_order` crate.
//!
//! These exercise the `OrderBook` API as a drag gesture would drive it: a
//! snapshot at drag start, a stream of provisional moves, and either a commit
//! or a restore at the end.

use windrow_order::{Item, OrderBook, OrderError, provisional_order};

fn book_of(keys: &[u32]) -> OrderBook<u32, ()> {
    let mut book = OrderBook::new();
    book.set_items(keys.iter().map(|&key| Item::new(key, ())).collect())
        .unwrap();
    book
}

#[test]
fn empty_book_basics() {
    let book = OrderBook::<u32, ()>::new();
    assert!(book.is_empty());
    assert_eq!(book.len(), 0);
    assert_eq!(book.index_of(&1), None);
    assert_eq!(book.revision(), 0);
}

#[test]
fn drag_stream_preserves_key_multiset() {
    let mut book = book_of(&[1, 2, 3, 4, 5, 6]);
    let at_start = {
        let mut keys = book.key_order();
        keys.sort_unstable();
        keys
    };

    // A meandering drag of item 2 across several targets.
    for target in [5, 3, 6, 1, 4, 1] {
        book.move_before(&2, &target).unwrap();

        let mut keys = book.key_order();
        keys.sort_unstable();
        assert_eq!(keys, at_start, "reorder must stay a permutation");
        assert_eq!(book.len(), 6);
    }
}

#[test]
fn cancelled_drag_restores_pre_drag_order() {
    let mut book = book_of(&[1, 2, 3, 4]);
    let snapshot = book.snapshot();

    book.move_before(&4, &1).unwrap();
    book.move_before(&4, &3).unwrap();

    book.restore(&snapshot).unwrap();
    assert_eq!(book.key_order(), vec![1, 2, 3, 4]);
}

#[test]
fn committed_drag_places_source_directly_before_final_target() {
    let mut book = book_of(&[1, 2, 3, 4]);

    book.move_before(&1, &3).unwrap();
    book.move_before(&1, &4).unwrap();

    let source = book.index_of(&1).unwrap();
    let target = book.index_of(&4).unwrap();
    assert_eq!(source + 1, target);
}

#[test]
fn provisional_order_is_stable_under_repetition() {
    let order: Vec<u32> = (0..16).collect();
    let once = provisional_order(&order, &0, &9).unwrap();
    let twice = provisional_order(&once, &0, &9).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn provisional_order_reports_unknown_keys() {
    let order = [1_u32, 2, 3];
    assert_eq!(
        provisional_order(&order, &9, &2),
        Err(OrderError::UnknownKey(9))
    );
    assert_eq!(
        provisional_order(&order, &1, &9),
        Err(OrderError::UnknownKey(9))
    );
}

#[test]
fn replace_order_round_trips_through_key_order() {
    let mut book = book_of(&[1, 2, 3, 4, 5]);
    book.move_before(&5, &1).unwrap();

    // Feeding the current order back in is accepted and changes nothing.
    let current = book.key_order();
    let revision = book.revision();
    book.replace_order(&current).unwrap();
    assert_eq!(book.key_order(), current);
    assert_eq!(book.revision(), revision);
}

#[test]
fn payloads_travel_with_their_keys() {
    let mut book = OrderBook::new();
    book.set_items(vec![
        Item::new(1_u32, "one"),
        Item::new(2, "two"),
        Item::new(3, "three"),
    ])
    .unwrap();

    book.move_before(&3, &1).unwrap();
    assert_eq!(book.items()[0].payload, "three");
    assert_eq!(book.get(&3).unwrap().payload, "three");
}
