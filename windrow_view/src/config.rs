// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-view configuration.

use alloc::vec::Vec;

/// Opacity applied to the in-flight item when none is configured explicitly.
pub const DEFAULT_DRAGGING_OPACITY: f64 = 0.2;

/// Behavior switches for one [`ReorderView`](crate::ReorderView).
///
/// Fields are private so the setters can keep every value inside its
/// documented domain; out-of-range inputs are clamped rather than rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig<K> {
    enabled: bool,
    long_press_draggable: bool,
    dragging_opacity: f64,
    edge_scroll: bool,
    edge_scroll_period_ms: u64,
    non_draggable: Vec<K>,
}

impl<K> Default for ViewConfig<K> {
    fn default() -> Self {
        Self {
            enabled: true,
            long_press_draggable: true,
            dragging_opacity: DEFAULT_DRAGGING_OPACITY,
            edge_scroll: true,
            edge_scroll_period_ms: 100,
            non_draggable: Vec::new(),
        }
    }
}

impl<K> ViewConfig<K> {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether drags may start at all.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables drag starts. Disabling does not interrupt an
    /// in-flight drag by itself; [`ReorderView::set_config`] does that when it
    /// applies a disabled configuration.
    ///
    /// [`ReorderView::set_config`]: crate::ReorderView::set_config
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the gesture layer should require a long press to lift an item.
    ///
    /// This is a hint for the host's gesture recognizers; the controller
    /// itself only sees the resulting drag calls.
    #[must_use]
    pub fn long_press_draggable(&self) -> bool {
        self.long_press_draggable
    }

    /// Sets the long-press hint.
    pub fn set_long_press_draggable(&mut self, long_press: bool) {
        self.long_press_draggable = long_press;
    }

    /// Opacity the renderer should apply to the item left in place while its
    /// drag avatar follows the pointer. Always in `0.0..=1.0`.
    #[must_use]
    pub fn dragging_opacity(&self) -> f64 {
        self.dragging_opacity
    }

    /// Sets the in-flight item opacity, clamped into `0.0..=1.0`. A
    /// non-finite value falls back to [`DEFAULT_DRAGGING_OPACITY`].
    pub fn set_dragging_opacity(&mut self, opacity: f64) {
        self.dragging_opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_DRAGGING_OPACITY
        };
    }

    /// Whether dragging near a viewport edge auto-scrolls.
    #[must_use]
    pub fn edge_scroll(&self) -> bool {
        self.edge_scroll
    }

    /// Enables or disables edge auto-scrolling.
    pub fn set_edge_scroll(&mut self, edge_scroll: bool) {
        self.edge_scroll = edge_scroll;
    }

    /// Minimum milliseconds between auto-scroll deltas. At least 1.
    #[must_use]
    pub fn edge_scroll_period_ms(&self) -> u64 {
        self.edge_scroll_period_ms
    }

    /// Sets the auto-scroll cadence, clamped to at least one millisecond.
    pub fn set_edge_scroll_period_ms(&mut self, period_ms: u64) {
        self.edge_scroll_period_ms = period_ms.max(1);
    }

    /// Keys that stay in the sequence but cannot be lifted.
    #[must_use]
    pub fn non_draggable(&self) -> &[K] {
        &self.non_draggable
    }

    /// Replaces the set of non-draggable keys.
    pub fn set_non_draggable(&mut self, keys: Vec<K>) {
        self.non_draggable = keys;
    }
}

impl<K: PartialEq> ViewConfig<K> {
    /// Returns `true` if `key` is in the non-draggable set.
    #[must_use]
    pub fn is_non_draggable(&self, key: &K) -> bool {
        self.non_draggable.contains(key)
    }
}
