//! Dense row-major heightfield storage.

use crate::normalize::Extent;

/// A `width * height` grid of heights addressed as `x + y * width`.
///
/// Freshly allocated per generation call and owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseGrid {
    width: u32,
    height: u32,
    values: Vec<f64>,
    raw_extent: Option<Extent>,
}

impl NoiseGrid {
    /// Wrap raw values. `values.len()` must equal `width * height`.
    ///
    /// # Panics
    ///
    /// Panics if the length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            width as usize * height as usize,
            "grid data length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            values,
            raw_extent: None,
        }
    }

    pub(crate) fn into_parts(self) -> (u32, u32, Vec<f64>) {
        (self.width, self.height, self.values)
    }

    pub(crate) fn with_extent(mut self, extent: Extent) -> Self {
        self.raw_extent = Some(extent);
        self
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Height at cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.values[self.index(x, y)]
    }

    /// All heights in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Take ownership of the height buffer.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Iterate over `(x, y, height)` for every cell.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        let width = self.width as usize;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &h)| ((i % width) as u32, (i / width) as u32, h))
    }

    /// Raw min/max the grid was normalized from, or `None` for a raw grid.
    pub fn raw_extent(&self) -> Option<Extent> {
        self.raw_extent
    }

    /// Returns `true` if normalization found no variation in the raw values.
    pub fn is_flat(&self) -> bool {
        self.raw_extent.is_some_and(|e| e.is_flat())
    }
}
