//! Render normalized grids into RGBA images.

use image::{Rgba, RgbaImage};

use crate::error::ConfigurationError;
use crate::grid::NoiseGrid;
use crate::region::RegionTable;

/// Color each cell with the region its height falls in.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnclassifiedCell`] for the first cell that
/// no region covers, so gaps are reported instead of left unpainted.
pub fn paint_regions(
    grid: &NoiseGrid,
    table: &RegionTable,
) -> Result<RgbaImage, ConfigurationError> {
    let mut image = RgbaImage::new(grid.width(), grid.height());

    for (x, y, h) in grid.cells() {
        let region = table
            .classify(h)
            .ok_or(ConfigurationError::UnclassifiedCell { x, y, height: h })?;
        let [r, g, b] = region.color;
        image.put_pixel(x, y, Rgba([r, g, b, 255]));
    }

    Ok(image)
}

/// Grayscale rendition: `h * 255` in every color channel, opaque alpha.
pub fn paint_grayscale(grid: &NoiseGrid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width(), grid.height());

    for (x, y, h) in grid.cells() {
        let v = (h.clamp(0.0, 1.0) * 255.0).round() as u8;
        image.put_pixel(x, y, Rgba([v, v, v, 255]));
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    #[test]
    fn test_region_colors_applied() {
        let grid = NoiseGrid::from_raw(3, 1, vec![0.0, 0.45, 1.0]);
        let table = RegionTable::default();
        let image = paint_regions(&grid, &table).unwrap();

        assert_eq!(image.dimensions(), (3, 1));
        assert_eq!(image.get_pixel(0, 0).0[..3], table.regions()[0].color);
        assert_eq!(image.get_pixel(1, 0).0[..3], table.regions()[1].color);
        assert_eq!(image.get_pixel(2, 0).0[..3], table.regions()[4].color);
        assert_eq!(image.get_pixel(2, 0).0[3], 255);
    }

    #[test]
    fn test_unclassified_cell_reported() {
        let grid = NoiseGrid::from_raw(2, 1, vec![0.2, f64::NAN]);
        let table = RegionTable::new(vec![Region::new("all", [9, 9, 9], 1.0)]).unwrap();
        let err = paint_regions(&grid, &table).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnclassifiedCell { x: 1, y: 0, .. }
        ));
    }

    #[test]
    fn test_grayscale_levels() {
        let grid = NoiseGrid::from_raw(2, 2, vec![0.0, 0.5, 1.0, 0.25]);
        let image = paint_grayscale(&grid);

        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [128, 128, 128, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [64, 64, 64, 255]);
    }
}
