// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item and sizing-variant types.

use core::fmt;

/// Sizing variant for an entry in a reorderable sequence.
///
/// List and grid entries share one ordered sequence; this closed sum type
/// carries the per-variant geometry hints so layout code can match on it
/// exhaustively. Cell counts are whole cells; extents are logical pixels
/// along the scroll (main) axis.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ItemSizing {
    /// A plain main-axis flow item with no grid hints.
    #[default]
    List,
    /// A staggered-grid tile spanning whole cells on both axes.
    GridByCount {
        /// Number of cells spanned across the cross axis. Must be at least 1.
        cross_axis_cells: u32,
        /// Number of cells spanned along the main axis. Must be at least 1.
        main_axis_cells: u32,
    },
    /// A staggered-grid tile with a fixed main-axis extent.
    GridByExtent {
        /// Number of cells spanned across the cross axis. Must be at least 1.
        cross_axis_cells: u32,
        /// Main-axis extent in logical pixels. Must be finite and non-negative.
        main_axis_extent: f64,
    },
}

impl ItemSizing {
    /// Checks that the variant's fields are within their documented domains.
    ///
    /// The sum type itself rules out unrecognized variants; what remains to
    /// report is out-of-domain field values such as zero cell counts or
    /// non-finite extents.
    pub fn validate(&self) -> Result<(), MalformedSizing> {
        match *self {
            Self::List => Ok(()),
            Self::GridByCount {
                cross_axis_cells,
                main_axis_cells,
            } => {
                if cross_axis_cells == 0 || main_axis_cells == 0 {
                    Err(MalformedSizing::ZeroCellCount)
                } else {
                    Ok(())
                }
            }
            Self::GridByExtent {
                cross_axis_cells,
                main_axis_extent,
            } => {
                if cross_axis_cells == 0 {
                    Err(MalformedSizing::ZeroCellCount)
                } else if !main_axis_extent.is_finite() {
                    Err(MalformedSizing::NonFiniteExtent(main_axis_extent))
                } else if main_axis_extent < 0.0 {
                    Err(MalformedSizing::NegativeExtent(main_axis_extent))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Returns `true` for the grid variants.
    #[must_use]
    pub fn is_grid(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Error describing an [`ItemSizing`] with out-of-domain field values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MalformedSizing {
    /// A grid variant declared a zero cell count on either axis.
    ZeroCellCount,
    /// A fixed extent was NaN or infinite.
    NonFiniteExtent(f64),
    /// A fixed extent was negative.
    NegativeExtent(f64),
}

impl fmt::Display for MalformedSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellCount => write!(f, "grid cell counts must be at least 1"),
            Self::NonFiniteExtent(extent) => {
                write!(f, "main axis extent {extent} is not finite")
            }
            Self::NegativeExtent(extent) => {
                write!(f, "main axis extent {extent} is negative")
            }
        }
    }
}

impl core::error::Error for MalformedSizing {}

/// An entry in a reorderable sequence: a stable key, caller content, and a
/// sizing variant.
///
/// Identity is the key; two items are the same list member exactly when their
/// keys are equal. The payload is opaque to this crate and travels with the
/// key during reorders.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<K, P> {
    /// Stable identity of this entry within its sequence.
    pub key: K,
    /// Caller-owned content carried alongside the key.
    pub payload: P,
    /// Geometry hints for list/grid layout.
    pub sizing: ItemSizing,
}

impl<K, P> Item<K, P> {
    /// Creates a plain list item.
    #[must_use]
    pub fn new(key: K, payload: P) -> Self {
        Self {
            key,
            payload,
            sizing: ItemSizing::List,
        }
    }

    /// Creates an item with an explicit sizing variant.
    ///
    /// The sizing is validated when the item enters an
    /// [`OrderBook`](crate::OrderBook), not here.
    #[must_use]
    pub fn with_sizing(key: K, payload: P, sizing: ItemSizing) -> Self {
        Self {
            key,
            payload,
            sizing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_items_are_always_valid() {
        assert_eq!(ItemSizing::List.validate(), Ok(()));
        assert!(!ItemSizing::List.is_grid());
    }

    #[test]
    fn grid_by_count_requires_positive_cells() {
        let good = ItemSizing::GridByCount {
            cross_axis_cells: 2,
            main_axis_cells: 1,
        };
        assert_eq!(good.validate(), Ok(()));
        assert!(good.is_grid());

        let zero_cross = ItemSizing::GridByCount {
            cross_axis_cells: 0,
            main_axis_cells: 1,
        };
        assert_eq!(zero_cross.validate(), Err(MalformedSizing::ZeroCellCount));

        let zero_main = ItemSizing::GridByCount {
            cross_axis_cells: 1,
            main_axis_cells: 0,
        };
        assert_eq!(zero_main.validate(), Err(MalformedSizing::ZeroCellCount));
    }

    #[test]
    fn grid_by_extent_requires_finite_non_negative_extent() {
        let good = ItemSizing::GridByExtent {
            cross_axis_cells: 3,
            main_axis_extent: 120.0,
        };
        assert_eq!(good.validate(), Ok(()));

        let nan = ItemSizing::GridByExtent {
            cross_axis_cells: 3,
            main_axis_extent: f64::NAN,
        };
        assert!(matches!(
            nan.validate(),
            Err(MalformedSizing::NonFiniteExtent(_))
        ));

        let negative = ItemSizing::GridByExtent {
            cross_axis_cells: 3,
            main_axis_extent: -1.0,
        };
        assert_eq!(
            negative.validate(),
            Err(MalformedSizing::NegativeExtent(-1.0))
        );
    }

    #[test]
    fn new_defaults_to_list_sizing() {
        let item = Item::new(7_u32, "payload");
        assert_eq!(item.sizing, ItemSizing::List);
        assert_eq!(item.key, 7);
    }
}
