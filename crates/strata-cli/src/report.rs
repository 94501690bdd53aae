//! Summary statistics over a generated heightfield.

use strata_noise::{ConfigurationError, NoiseGrid, RegionTable};

/// Share of cells in one region band.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionShare {
    /// Region label.
    pub label: String,
    /// Number of cells classified into the region.
    pub cells: usize,
    /// `cells` as a fraction of the grid.
    pub fraction: f64,
}

/// Count how many cells fall in each region, in table order.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnclassifiedCell`] for the first cell no
/// region covers.
pub fn region_histogram(
    grid: &NoiseGrid,
    table: &RegionTable,
) -> Result<Vec<RegionShare>, ConfigurationError> {
    let mut counts = vec![0usize; table.len()];

    for (x, y, h) in grid.cells() {
        let index = table
            .classify_index(h)
            .ok_or(ConfigurationError::UnclassifiedCell { x, y, height: h })?;
        counts[index] += 1;
    }

    let total = grid.values().len().max(1) as f64;
    Ok(table
        .regions()
        .iter()
        .zip(counts)
        .map(|(region, cells)| RegionShare {
            label: region.label.clone(),
            cells,
            fraction: cells as f64 / total,
        })
        .collect())
}

/// Minimum and maximum of a displacement buffer, or `None` if empty.
pub fn displacement_range(displacements: &[f32]) -> Option<(f32, f32)> {
    displacements.iter().fold(None, |acc, &z| match acc {
        None => Some((z, z)),
        Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
    })
}
