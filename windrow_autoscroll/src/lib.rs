// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windrow_autoscroll --heading-base-level=0

//! Windrow Autoscroll: edge-proximity auto-scrolling for drag gestures.
//!
//! While an item is being dragged near the edge of a scrollable viewport, the
//! view should keep scrolling so the user can reach drop positions outside
//! the visible region. [`EdgeScroll`] implements the rules: each viewport end
//! has a **hot zone** covering a configurable fraction of the extent, and a
//! pointer inside a hot zone produces periodic scroll deltas with a linear
//! ramp — zero at the hot-zone boundary, the configured maximum at the
//! viewport edge.
//!
//! The controller owns no timer and spawns nothing. The host drives it with
//! caller-supplied millisecond timestamps, exactly like the event-state
//! managers take event times: call [`EdgeScroll::engage`] when a drag starts,
//! [`EdgeScroll::tick`] from the UI loop, and [`EdgeScroll::disengage`] on
//! every exit path. Each tick is a discrete, non-blocking call; nothing can
//! outlive the drag or the view.
//!
//! ## Minimal example
//!
//! ```rust
//! use windrow_autoscroll::{EdgeScroll, EdgeScrollConfig};
//!
//! let mut scroll = EdgeScroll::new(EdgeScrollConfig::default());
//!
//! // Drag starts; viewport spans 0..400 along the scroll axis.
//! scroll.engage();
//!
//! // Pointer at the trailing edge: maximum forward delta.
//! let delta = scroll.tick(0, 400.0, 0.0..400.0).unwrap();
//! assert_eq!(delta, scroll.config().max_delta);
//!
//! // Another tick inside the same period emits nothing.
//! assert_eq!(scroll.tick(50, 400.0, 0.0..400.0), None);
//!
//! // Drag ended: the controller is inert until re-engaged.
//! scroll.disengage();
//! assert_eq!(scroll.tick(500, 400.0, 0.0..400.0), None);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

use core::ops::Range;

use kurbo::Point;

/// The scroll axis of a viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Scrolling along x.
    Horizontal,
    /// Scrolling along y.
    #[default]
    Vertical,
}

impl Axis {
    /// Extracts the coordinate of `point` along this axis.
    #[must_use]
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// Which way an auto-scroll delta pushes the scroll offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Toward the leading edge (decreasing scroll offset).
    Backward,
    /// No scrolling.
    #[default]
    None,
    /// Toward the trailing edge (increasing scroll offset).
    Forward,
}

/// Configuration for [`EdgeScroll`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeScrollConfig {
    /// Fraction of the viewport extent treated as a hot zone at each end.
    /// Held in the open interval `(0, 0.5)`.
    pub hot_fraction: f64,
    /// Minimum milliseconds between emitted deltas.
    pub period_ms: u64,
    /// Magnitude of the delta emitted when the pointer sits exactly on a
    /// viewport edge, in the caller's scroll-offset units.
    pub max_delta: f64,
}

impl Default for EdgeScrollConfig {
    fn default() -> Self {
        Self {
            hot_fraction: 0.1,
            period_ms: 100,
            max_delta: 16.0,
        }
    }
}

impl EdgeScrollConfig {
    /// Creates a config, clamping `hot_fraction` into its valid interval and
    /// `period_ms` to at least one millisecond.
    #[must_use]
    pub fn new(hot_fraction: f64, period_ms: u64, max_delta: f64) -> Self {
        Self {
            hot_fraction: clamp_hot_fraction(hot_fraction),
            period_ms: period_ms.max(1),
            max_delta,
        }
    }
}

/// Clamps a hot-zone fraction into the open interval `(0, 0.5)`.
///
/// A non-finite input falls back to the default fraction.
#[must_use]
pub fn clamp_hot_fraction(fraction: f64) -> f64 {
    if !fraction.is_finite() {
        return EdgeScrollConfig::default().hot_fraction;
    }
    fraction.clamp(f64::EPSILON, 0.5 - f64::EPSILON)
}

/// Result of sampling a pointer position against a viewport's hot zones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeSample {
    /// Which edge the pointer is near, if any.
    pub direction: ScrollDirection,
    /// Linear ramp depth into the hot zone: `0.0` at the hot-zone boundary,
    /// `1.0` at (or clamped beyond) the viewport edge.
    pub strength: f64,
}

impl EdgeSample {
    const IDLE: Self = Self {
        direction: ScrollDirection::None,
        strength: 0.0,
    };
}

/// Samples `axis_pos` against the hot zones of the viewport `span`.
///
/// `span` is the visible extent along the scroll axis in the same coordinate
/// space as `axis_pos`. Positions exactly on a hot-zone boundary sample as
/// [`ScrollDirection::None`] (the ramp is zero there); positions beyond a
/// viewport edge clamp to full strength. Degenerate spans and non-finite
/// positions sample as idle.
#[must_use]
pub fn sample(axis_pos: f64, span: Range<f64>, hot_fraction: f64) -> EdgeSample {
    let extent = span.end - span.start;
    if !axis_pos.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return EdgeSample::IDLE;
    }

    let hot = clamp_hot_fraction(hot_fraction) * extent;
    let from_leading = axis_pos - span.start;
    let from_trailing = span.end - axis_pos;

    if from_leading < hot {
        EdgeSample {
            direction: ScrollDirection::Backward,
            strength: ((hot - from_leading) / hot).clamp(0.0, 1.0),
        }
    } else if from_trailing < hot {
        EdgeSample {
            direction: ScrollDirection::Forward,
            strength: ((hot - from_trailing) / hot).clamp(0.0, 1.0),
        }
    } else {
        EdgeSample::IDLE
    }
}

/// Periodic edge auto-scroll controller for one drag gesture.
///
/// The controller is inert until [`EdgeScroll::engage`]d and after
/// [`EdgeScroll::disengage`]. While engaged, [`EdgeScroll::tick`] emits at
/// most one delta per configured period, and only while the pointer is inside
/// a hot zone.
#[derive(Clone, Debug, Default)]
pub struct EdgeScroll {
    config: EdgeScrollConfig,
    engaged: bool,
    last_emit_ms: Option<u64>,
}

impl EdgeScroll {
    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn new(config: EdgeScrollConfig) -> Self {
        Self {
            config,
            engaged: false,
            last_emit_ms: None,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> EdgeScrollConfig {
        self.config
    }

    /// Replaces the configuration. Takes effect on the next tick.
    pub fn set_config(&mut self, config: EdgeScrollConfig) {
        self.config = config;
    }

    /// Arms the controller at drag start. The first in-zone tick after
    /// engaging emits immediately; later emissions respect the period.
    pub fn engage(&mut self) {
        self.engaged = true;
        self.last_emit_ms = None;
    }

    /// Disarms the controller. Called on every drag exit path — drop,
    /// cancel, or view teardown — so no periodic activity outlives the drag.
    pub fn disengage(&mut self) {
        self.engaged = false;
        self.last_emit_ms = None;
    }

    /// Returns `true` while armed.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Produces the scroll delta for this instant, if one is due.
    ///
    /// `now_ms` is a caller-supplied monotonic timestamp, `axis_pos` the
    /// pointer's coordinate along the scroll axis, and `span` the visible
    /// viewport extent. The returned delta is signed: negative toward the
    /// leading edge, positive toward the trailing edge, with magnitude
    /// `strength * max_delta`.
    pub fn tick(&mut self, now_ms: u64, axis_pos: f64, span: Range<f64>) -> Option<f64> {
        if !self.engaged {
            return None;
        }
        if let Some(last) = self.last_emit_ms
            && now_ms.saturating_sub(last) < self.config.period_ms
        {
            return None;
        }

        let sample = sample(axis_pos, span, self.config.hot_fraction);
        let delta = match sample.direction {
            ScrollDirection::None => return None,
            ScrollDirection::Backward => -sample.strength * self.config.max_delta,
            ScrollDirection::Forward => sample.strength * self.config.max_delta,
        };
        self.last_emit_ms = Some(now_ms);
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN: Range<f64> = 0.0..400.0;

    #[test]
    fn axis_extracts_the_right_coordinate() {
        let point = Point::new(3.0, 7.0);
        assert_eq!(Axis::Horizontal.coord(point), 3.0);
        assert_eq!(Axis::Vertical.coord(point), 7.0);
    }

    #[test]
    fn sample_is_zero_at_hot_zone_boundary() {
        // hot zone is 40 units; 40.0 sits exactly on the boundary.
        let at_boundary = sample(40.0, SPAN, 0.1);
        assert_eq!(at_boundary.direction, ScrollDirection::None);
        assert_eq!(at_boundary.strength, 0.0);

        let trailing_boundary = sample(360.0, SPAN, 0.1);
        assert_eq!(trailing_boundary.direction, ScrollDirection::None);
        assert_eq!(trailing_boundary.strength, 0.0);
    }

    #[test]
    fn sample_is_full_strength_at_viewport_edges() {
        let leading = sample(0.0, SPAN, 0.1);
        assert_eq!(leading.direction, ScrollDirection::Backward);
        assert_eq!(leading.strength, 1.0);

        let trailing = sample(400.0, SPAN, 0.1);
        assert_eq!(trailing.direction, ScrollDirection::Forward);
        assert_eq!(trailing.strength, 1.0);
    }

    #[test]
    fn sample_ramps_linearly_inside_the_hot_zone() {
        // Halfway into the 40-unit leading zone.
        let halfway = sample(20.0, SPAN, 0.1);
        assert_eq!(halfway.direction, ScrollDirection::Backward);
        assert!((halfway.strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sample_clamps_beyond_the_edges() {
        let past_leading = sample(-25.0, SPAN, 0.1);
        assert_eq!(past_leading.direction, ScrollDirection::Backward);
        assert_eq!(past_leading.strength, 1.0);

        let past_trailing = sample(425.0, SPAN, 0.1);
        assert_eq!(past_trailing.direction, ScrollDirection::Forward);
        assert_eq!(past_trailing.strength, 1.0);
    }

    #[test]
    fn sample_is_idle_in_the_middle_and_on_degenerate_input() {
        assert_eq!(sample(200.0, SPAN, 0.1), EdgeSample::IDLE);
        assert_eq!(sample(10.0, 100.0..100.0, 0.1), EdgeSample::IDLE);
        assert_eq!(sample(10.0, 100.0..50.0, 0.1), EdgeSample::IDLE);
        assert_eq!(sample(f64::NAN, SPAN, 0.1), EdgeSample::IDLE);
    }

    #[test]
    fn tick_only_emits_while_engaged() {
        let mut scroll = EdgeScroll::new(EdgeScrollConfig::default());
        assert_eq!(scroll.tick(0, 0.0, SPAN), None);

        scroll.engage();
        assert!(scroll.is_engaged());
        assert_eq!(scroll.tick(0, 0.0, SPAN), Some(-16.0));

        scroll.disengage();
        assert_eq!(scroll.tick(1_000, 0.0, SPAN), None);
    }

    #[test]
    fn tick_respects_the_period() {
        let mut scroll = EdgeScroll::new(EdgeScrollConfig::new(0.1, 100, 16.0));
        scroll.engage();

        assert!(scroll.tick(0, 400.0, SPAN).is_some());
        assert_eq!(scroll.tick(50, 400.0, SPAN), None);
        assert_eq!(scroll.tick(99, 400.0, SPAN), None);
        assert!(scroll.tick(100, 400.0, SPAN).is_some());
    }

    #[test]
    fn tick_emits_nothing_outside_hot_zones() {
        let mut scroll = EdgeScroll::new(EdgeScrollConfig::default());
        scroll.engage();
        assert_eq!(scroll.tick(0, 200.0, SPAN), None);
        // Being outside the zone does not consume the period.
        assert_eq!(scroll.tick(1, 400.0, SPAN), Some(16.0));
    }

    #[test]
    fn deltas_are_signed_toward_their_edge() {
        let mut scroll = EdgeScroll::new(EdgeScrollConfig::new(0.1, 1, 10.0));
        scroll.engage();

        let backward = scroll.tick(0, 0.0, SPAN).unwrap();
        assert!(backward < 0.0, "leading edge scrolls backward");

        let forward = scroll.tick(10, 400.0, SPAN).unwrap();
        assert!(forward > 0.0, "trailing edge scrolls forward");
        assert_eq!(forward, 10.0);
    }

    #[test]
    fn config_clamps_out_of_range_fractions() {
        let too_big = EdgeScrollConfig::new(0.9, 100, 16.0);
        assert!(too_big.hot_fraction < 0.5);

        let negative = EdgeScrollConfig::new(-1.0, 100, 16.0);
        assert!(negative.hot_fraction > 0.0);

        let nan = EdgeScrollConfig::new(f64::NAN, 100, 16.0);
        assert_eq!(nan.hot_fraction, 0.1);

        let zero_period = EdgeScrollConfig::new(0.1, 0, 16.0);
        assert_eq!(zero_period.period_ms, 1);
    }

    #[test]
    fn re_engaging_resets_the_cadence() {
        let mut scroll = EdgeScroll::new(EdgeScrollConfig::default());
        scroll.engage();
        assert!(scroll.tick(0, 400.0, SPAN).is_some());

        scroll.disengage();
        scroll.engage();
        // Fresh engagement emits immediately again.
        assert!(scroll.tick(10, 400.0, SPAN).is_some());
    }
}
