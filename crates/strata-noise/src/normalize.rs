//! Two-pass min/max normalization into `[0, 1]`.
//!
//! The first pass reduces the whole grid to its exact extent; only then does
//! the second pass rewrite cells. Both comparisons run for every value, so a
//! new minimum and a new maximum are never missed on consecutive cells.

use rayon::prelude::*;

use crate::error::ConfigurationError;
use crate::grid::NoiseGrid;

/// Value assigned to every cell of a grid with no variation.
pub const FLAT_HEIGHT: f64 = 0.5;

/// Observed minimum and maximum of a set of raw heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
}

impl Extent {
    /// Identity for [`Extent::include`] and [`Extent::merge`].
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Widen the extent to contain `value`.
    #[inline]
    pub fn include(mut self, value: f64) -> Self {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self
    }

    /// Combine two partial extents.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Exact extent of `values`, or `None` if empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        let extent = values
            .par_iter()
            .fold(|| Self::EMPTY, |e, &v| e.include(v))
            .reduce(|| Self::EMPTY, Self::merge);
        (extent.min <= extent.max).then_some(extent)
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if every value was identical.
    pub fn is_flat(&self) -> bool {
        self.range() == 0.0
    }

    /// Map `value` into `[0, 1]` relative to this extent.
    ///
    /// Returns [`FLAT_HEIGHT`] for a flat extent.
    #[inline]
    pub fn inverse_lerp(&self, value: f64) -> f64 {
        let range = self.range();
        if range == 0.0 {
            FLAT_HEIGHT
        } else {
            (value - self.min) / range
        }
    }
}

/// Rescale a raw grid into `[0, 1]`.
///
/// The minimum maps to exactly `0.0` and the maximum to exactly `1.0`. A flat
/// grid maps every cell to [`FLAT_HEIGHT`] and logs a warning; this is not an
/// error. The returned grid records the raw extent. An empty grid is returned
/// as is.
///
/// # Errors
///
/// Returns [`ConfigurationError::NonFiniteSample`] for the first NaN or
/// infinite raw value, since no extent can map it into `[0, 1]`.
pub fn normalize(grid: NoiseGrid) -> Result<NoiseGrid, ConfigurationError> {
    if let Some(index) = grid.values().par_iter().position_first(|v| !v.is_finite()) {
        let width = grid.width() as usize;
        return Err(ConfigurationError::NonFiniteSample {
            x: (index % width) as u32,
            y: (index / width) as u32,
            value: grid.values()[index],
        });
    }

    let (width, height, mut values) = grid.into_parts();
    let Some(extent) = Extent::of(&values) else {
        return Ok(NoiseGrid::from_raw(width, height, values));
    };

    if extent.is_flat() {
        tracing::warn!(
            value = extent.min,
            "degenerate input: flat raw grid normalized to {FLAT_HEIGHT}"
        );
    }

    values.par_iter_mut().for_each(|v| *v = extent.inverse_lerp(*v));

    Ok(NoiseGrid::from_raw(width, height, values).with_extent(extent))
}
