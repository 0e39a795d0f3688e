// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item geometry reported by the layout layer.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Per-item bounds in view coordinates, used to resolve the drop candidate
/// under the pointer.
///
/// The layout layer reports bounds after each layout pass with
/// [`BoundsMap::set`]; the map keeps the latest rectangle per key. Hit testing
/// scans in reverse insertion order so the most recently reported item wins
/// where rectangles overlap.
#[derive(Clone, Debug, Default)]
pub struct BoundsMap<K> {
    entries: Vec<(K, Rect)>,
}

impl<K> BoundsMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of items with known bounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no bounds have been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every reported rectangle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: PartialEq> BoundsMap<K> {
    /// Records the bounds for `key`, replacing any previous rectangle.
    pub fn set(&mut self, key: K, bounds: Rect) {
        if let Some((_, rect)) = self.entries.iter_mut().find(|(entry, _)| *entry == key) {
            *rect = bounds;
        } else {
            self.entries.push((key, bounds));
        }
    }

    /// Forgets the bounds for `key`, returning `true` if any were known.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.entries.iter().position(|(entry, _)| entry == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the recorded bounds for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == key)
            .map(|(_, rect)| *rect)
    }

    /// Returns the key whose bounds contain `position`, if any.
    ///
    /// Where rectangles overlap, the most recently reported one wins.
    #[must_use]
    pub fn hit_test(&self, position: Point) -> Option<&K> {
        self.entries
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(position))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_bounds() {
        let mut bounds = BoundsMap::new();
        bounds.set('a', Rect::new(0.0, 0.0, 10.0, 10.0));
        bounds.set('a', Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds.get(&'a'), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn hit_test_finds_the_containing_item() {
        let mut bounds = BoundsMap::new();
        bounds.set('a', Rect::new(0.0, 0.0, 100.0, 20.0));
        bounds.set('b', Rect::new(0.0, 20.0, 100.0, 40.0));

        assert_eq!(bounds.hit_test(Point::new(50.0, 10.0)), Some(&'a'));
        assert_eq!(bounds.hit_test(Point::new(50.0, 30.0)), Some(&'b'));
        assert_eq!(bounds.hit_test(Point::new(50.0, 90.0)), None);
    }

    #[test]
    fn latest_reported_bounds_win_on_overlap() {
        let mut bounds = BoundsMap::new();
        bounds.set('a', Rect::new(0.0, 0.0, 10.0, 10.0));
        bounds.set('b', Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(bounds.hit_test(Point::new(5.0, 5.0)), Some(&'b'));
    }

    #[test]
    fn remove_forgets_the_key() {
        let mut bounds = BoundsMap::new();
        bounds.set('a', Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(bounds.remove(&'a'));
        assert!(!bounds.remove(&'a'));
        assert_eq!(bounds.hit_test(Point::new(5.0, 5.0)), None);
        assert!(bounds.is_empty());
    }
}
