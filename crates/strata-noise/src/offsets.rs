//! Per-octave sampling offsets.
//!
//! Each octave samples the base noise at its own random translation so that
//! low- and high-frequency layers do not alias against each other.
//!
//! Offsets are drawn in the fixed order octave 0 x, octave 0 y, octave 1 x,
//! octave 1 y, and so on. Raising the octave count appends pairs without
//! disturbing earlier ones. The noise permutation is drawn from the same
//! stream afterwards, though, so a grid with more octaves is not a strict
//! refinement of one with fewer: the permutation itself changes.

use crate::rng::NoiseRng;

/// Half-width of the symmetric range each offset component is drawn from.
pub const OFFSET_RANGE: i32 = 100_000;

/// Fixed per-octave `(x, y)` translations for one generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct OctaveOffsets {
    pairs: Vec<(f64, f64)>,
}

impl OctaveOffsets {
    /// Draw `2 * octaves` values from `rng` and shift each pair by the caller offset.
    pub fn derive(octaves: u32, offset_x: f64, offset_y: f64, rng: &mut NoiseRng) -> Self {
        let pairs = (0..octaves)
            .map(|_| {
                let x = rng.rand_range(-OFFSET_RANGE, OFFSET_RANGE) as f64 + offset_x;
                let y = rng.rand_range(-OFFSET_RANGE, OFFSET_RANGE) as f64 + offset_y;
                (x, y)
            })
            .collect();
        Self { pairs }
    }

    /// Offset for octave `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn get(&self, i: usize) -> (f64, f64) {
        self.pairs[i]
    }

    /// All pairs in octave order.
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Number of octaves covered.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no octaves.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
