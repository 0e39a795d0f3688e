// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative ordered sequence and the reorder rules applied to it.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::item::{Item, MalformedSizing};

/// Error returned by [`OrderBook`] mutations that reject their input.
///
/// Every rejection leaves the book's sequence exactly as it was; callers can
/// treat a returned error as "nothing happened".
#[derive(Clone, PartialEq)]
pub enum OrderError<K> {
    /// A key referenced by the operation is not present in the sequence.
    UnknownKey(K),
    /// A wholesale replacement contained the same key twice.
    DuplicateKey(K),
    /// A requested order was not a permutation of the current key set.
    NotAPermutation,
    /// An item carried a sizing variant with out-of-domain field values.
    MalformedSizing(MalformedSizing),
}

impl<K: fmt::Debug> fmt::Debug for OrderError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => f.debug_tuple("UnknownKey").field(key).finish(),
            Self::DuplicateKey(key) => f.debug_tuple("DuplicateKey").field(key).finish(),
            Self::NotAPermutation => write!(f, "NotAPermutation"),
            Self::MalformedSizing(err) => f.debug_tuple("MalformedSizing").field(err).finish(),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for OrderError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "key {key:?} is not in the sequence"),
            Self::DuplicateKey(key) => write!(f, "key {key:?} appears more than once"),
            Self::NotAPermutation => {
                write!(f, "requested order is not a permutation of the current keys")
            }
            Self::MalformedSizing(err) => write!(f, "malformed item sizing: {err}"),
        }
    }
}

impl<K: fmt::Debug> core::error::Error for OrderError<K> {}

impl<K> From<MalformedSizing> for OrderError<K> {
    fn from(err: MalformedSizing) -> Self {
        Self::MalformedSizing(err)
    }
}

/// The key order of a book at a point in time.
///
/// Taken at drag start and used to restore the exact pre-drag sequence when a
/// drag is cancelled. A snapshot is only meaningful against a book whose key
/// set has not changed since it was taken; [`OrderBook::restore`] checks this
/// and rejects stale snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSnapshot<K> {
    keys: Vec<K>,
}

impl<K> OrderSnapshot<K> {
    /// Returns the captured key order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the number of captured keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the snapshot captured an empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Computes the provisional order for a drag of `source` hovering `target`.
///
/// This is the pure sequence-level reorder rule: `source` is removed from its
/// current position and reinserted immediately before `target`. The tie-break
/// is always *before*, never after, so applying the function to its own output
/// with the same arguments yields the same sequence again.
///
/// Returns the input order unchanged (as an error) when either key is absent.
/// `source == target` yields a copy of the input.
pub fn provisional_order<K>(current: &[K], source: &K, target: &K) -> Result<Vec<K>, OrderError<K>>
where
    K: Clone + PartialEq,
{
    let mut order: Vec<K> = current.to_vec();
    let from = current
        .iter()
        .position(|key| key == source)
        .ok_or_else(|| OrderError::UnknownKey(source.clone()))?;
    let to = current
        .iter()
        .position(|key| key == target)
        .ok_or_else(|| OrderError::UnknownKey(target.clone()))?;

    // `from == to` (source is the target) degenerates to a no-op move.
    let insert_at = if from < to { to - 1 } else { to };
    let moved = order.remove(from);
    order.insert(insert_at, moved);
    Ok(order)
}

/// The authoritative ordered sequence backing a reorderable list or grid.
///
/// `OrderBook` only reorders; it never inserts or removes entries on behalf of
/// a drag. The sequence is replaced wholesale through [`OrderBook::set_items`]
/// and permuted through [`OrderBook::move_before`], [`OrderBook::replace_order`],
/// and [`OrderBook::restore`], all of which preserve the key set.
///
/// `K` only needs `Clone + PartialEq`; no hashing or ordering is imposed, so
/// permutation checks scan by equality. For large sequences with hashable keys
/// the `hashbrown` feature adds [`OrderBook::replace_order_hashed`].
#[derive(Clone, Debug, Default)]
pub struct OrderBook<K, P> {
    items: Vec<Item<K, P>>,
    revision: u64,
}

impl<K, P> OrderBook<K, P> {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the items in their current authoritative order.
    ///
    /// The returned slice is a snapshot view: it stays valid until the next
    /// mutation, and observers should re-query after any order change.
    #[must_use]
    pub fn items(&self) -> &[Item<K, P>] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the book holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the keys in their current order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(|item| &item.key)
    }

    /// Returns the current revision counter.
    ///
    /// The revision is a monotonically increasing counter local to this book.
    /// It bumps whenever the sequence contents or order change and stays put
    /// on no-op calls, giving observers a cheap "did anything change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K, P> OrderBook<K, P>
where
    K: Clone + PartialEq,
{
    /// Returns the index of `key` in the current order, if present.
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|item| item.key == *key)
    }

    /// Returns `true` if the book contains `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Returns the item with the given key, if present.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Item<K, P>> {
        self.index_of(key).map(|index| &self.items[index])
    }

    /// Returns the current key order as an owned vector.
    #[must_use]
    pub fn key_order(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }

    /// Captures the current key order for a later [`OrderBook::restore`].
    #[must_use]
    pub fn snapshot(&self) -> OrderSnapshot<K> {
        OrderSnapshot {
            keys: self.key_order(),
        }
    }

    /// Replaces the whole sequence with a new item collection.
    ///
    /// This is the only way the set of keys changes; reorder operations are
    /// permutations. Rejects collections with duplicate keys or out-of-domain
    /// sizing fields, leaving the previous sequence intact.
    pub fn set_items(&mut self, items: Vec<Item<K, P>>) -> Result<(), OrderError<K>> {
        for (index, item) in items.iter().enumerate() {
            item.sizing.validate()?;
            if items[..index].iter().any(|other| other.key == item.key) {
                return Err(OrderError::DuplicateKey(item.key.clone()));
            }
        }
        self.items = items;
        self.bump_revision();
        Ok(())
    }

    /// Moves `source` so that it sits immediately before `target`.
    ///
    /// Returns `Ok(true)` if the sequence changed and `Ok(false)` when the
    /// call was a no-op: `source == target`, or `source` already directly
    /// precedes `target`. The no-op case is what makes a drag that keeps
    /// hovering the same target stable instead of oscillating.
    ///
    /// Every other item keeps its relative order. O(n).
    pub fn move_before(&mut self, source: &K, target: &K) -> Result<bool, OrderError<K>> {
        let from = self
            .index_of(source)
            .ok_or_else(|| OrderError::UnknownKey(source.clone()))?;
        let to = self
            .index_of(target)
            .ok_or_else(|| OrderError::UnknownKey(target.clone()))?;

        // `from == to` (source is the target) degenerates to a no-op move.
        let insert_at = if from < to { to - 1 } else { to };
        if insert_at == from {
            return Ok(false);
        }
        let item = self.items.remove(from);
        self.items.insert(insert_at, item);
        self.bump_revision();
        Ok(true)
    }

    /// Atomically permutes the sequence into the given key order.
    ///
    /// Fails with [`OrderError::NotAPermutation`] if `new_order` is not a
    /// permutation of the current key set — reordering must never silently
    /// insert or drop entries. On failure the prior order is retained.
    ///
    /// Permutation checking scans by equality and is O(n²); with the
    /// `hashbrown` feature, [`OrderBook::replace_order_hashed`] offers a
    /// linear variant for hashable keys.
    pub fn replace_order(&mut self, new_order: &[K]) -> Result<(), OrderError<K>> {
        if new_order.len() != self.items.len() {
            return Err(OrderError::NotAPermutation);
        }

        let mut used = alloc::vec![false; self.items.len()];
        let mut permutation = Vec::with_capacity(new_order.len());
        for key in new_order {
            let found = self
                .items
                .iter()
                .enumerate()
                .position(|(index, item)| !used[index] && item.key == *key);
            match found {
                Some(index) => {
                    used[index] = true;
                    permutation.push(index);
                }
                None => return Err(OrderError::NotAPermutation),
            }
        }

        self.apply_permutation(permutation);
        Ok(())
    }

    /// Restores the exact order captured by a snapshot.
    ///
    /// Used on drag cancellation to undo any provisional reorder. Fails like
    /// [`OrderBook::replace_order`] if the key set has changed since the
    /// snapshot was taken.
    pub fn restore(&mut self, snapshot: &OrderSnapshot<K>) -> Result<(), OrderError<K>> {
        self.replace_order(&snapshot.keys)
    }

    /// Applies a validated permutation of item indices.
    ///
    /// `permutation[i]` is the current index of the item that moves to
    /// position `i`. Identity permutations do not bump the revision.
    fn apply_permutation(&mut self, permutation: Vec<usize>) {
        if permutation.iter().enumerate().all(|(to, from)| to == *from) {
            return;
        }

        let old = mem::take(&mut self.items);
        let mut slots: Vec<Option<Item<K, P>>> = old.into_iter().map(Some).collect();
        self.items = Vec::with_capacity(slots.len());
        for from in permutation {
            if let Some(item) = slots[from].take() {
                self.items.push(item);
            }
        }
        debug_assert_eq!(
            self.items.len(),
            slots.len(),
            "validated permutation must visit every slot exactly once"
        );
        self.bump_revision();
    }
}

#[cfg(feature = "hashbrown")]
impl<K, P> OrderBook<K, P>
where
    K: Clone + core::hash::Hash + Eq,
{
    /// Atomically permutes the sequence into the given key order, checking the
    /// permutation with hashing.
    ///
    /// Behaves exactly like [`OrderBook::replace_order`] but runs in linear
    /// time, which matters for long lists reordered on every drop.
    pub fn replace_order_hashed(&mut self, new_order: &[K]) -> Result<(), OrderError<K>> {
        use hashbrown::HashMap;

        if new_order.len() != self.items.len() {
            return Err(OrderError::NotAPermutation);
        }

        let permutation = {
            let mut index: HashMap<&K, usize> = HashMap::with_capacity(self.items.len());
            for (position, item) in self.items.iter().enumerate() {
                index.insert(&item.key, position);
            }

            let mut permutation = Vec::with_capacity(new_order.len());
            for key in new_order {
                match index.remove(key) {
                    Some(position) => permutation.push(position),
                    None => return Err(OrderError::NotAPermutation),
                }
            }
            permutation
        };

        self.apply_permutation(permutation);
        Ok(())
    }
}
