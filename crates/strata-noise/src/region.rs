//! Height bands: maps a normalized height to a labeled terrain region.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// One labeled height band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Human-readable label (e.g., "water").
    pub label: String,
    /// Display color as `[r, g, b]`.
    pub color: [u8; 3],
    /// Upper bound of the band, inclusive.
    pub threshold: f64,
}

impl Region {
    /// Convenience constructor.
    pub fn new(label: impl Into<String>, color: [u8; 3], threshold: f64) -> Self {
        Self {
            label: label.into(),
            color,
            threshold,
        }
    }
}

/// Regions ordered by ascending threshold, covering at least `[0, 1]`.
///
/// Only obtainable through [`RegionTable::new`], so a table in hand is
/// always well formed.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    /// Validate and wrap `regions`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyRegionTable`] if there are no regions.
    /// - [`ConfigurationError::NonFinite`] if a threshold is NaN or infinite.
    /// - [`ConfigurationError::UnsortedRegionTable`] if thresholds decrease.
    /// - [`ConfigurationError::IncompleteCoverage`] if the last threshold is below `1.0`.
    pub fn new(regions: Vec<Region>) -> Result<Self, ConfigurationError> {
        let Some(last) = regions.last() else {
            return Err(ConfigurationError::EmptyRegionTable);
        };

        if let Some(bad) = regions.iter().find(|r| !r.threshold.is_finite()) {
            return Err(ConfigurationError::NonFinite {
                name: "region threshold",
                value: bad.threshold,
            });
        }

        for pair in regions.windows(2) {
            if pair[1].threshold < pair[0].threshold {
                return Err(ConfigurationError::UnsortedRegionTable {
                    label: pair[1].label.clone(),
                    threshold: pair[1].threshold,
                    previous: pair[0].threshold,
                });
            }
        }

        if last.threshold < 1.0 {
            return Err(ConfigurationError::IncompleteCoverage(last.threshold));
        }

        Ok(Self { regions })
    }

    /// First region whose threshold is `>= height`.
    ///
    /// Returns `None` for NaN or heights above the last threshold, which a
    /// normalized grid never produces.
    pub fn classify(&self, height: f64) -> Option<&Region> {
        self.classify_index(height).map(|i| &self.regions[i])
    }

    /// Position in [`RegionTable::regions`] of the region [`classify`](Self::classify) picks.
    pub fn classify_index(&self, height: f64) -> Option<usize> {
        self.regions.iter().position(|r| height <= r.threshold)
    }

    /// Regions in ascending threshold order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false`; a validated table has at least one region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionTable {
    /// Water, sand, grass, rock and snow bands.
    fn default() -> Self {
        Self {
            regions: default_regions(),
        }
    }
}

/// The five standard terrain bands, suitable for [`RegionTable::new`].
pub fn default_regions() -> Vec<Region> {
    vec![
        Region::new("water", [30, 90, 190], 0.4),
        Region::new("sand", [215, 200, 135], 0.45),
        Region::new("grass", [70, 150, 55], 0.6),
        Region::new("rock", [110, 95, 80], 0.85),
        Region::new("snow", [245, 245, 250], 1.0),
    ]
}

/// Classify `height` against `table`. See [`RegionTable::classify`].
pub fn classify(height: f64, table: &RegionTable) -> Option<&Region> {
    table.classify(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(table: &RegionTable, h: f64) -> &str {
        &table.classify(h).unwrap().label
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = RegionTable::new(default_regions()).unwrap();
        assert_eq!(table, RegionTable::default());
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_band_boundaries() {
        let table = RegionTable::default();
        assert_eq!(label(&table, 0.0), "water");
        assert_eq!(label(&table, 0.4), "water");
        assert_eq!(label(&table, 0.41), "sand");
        assert_eq!(label(&table, 0.45), "sand");
        assert_eq!(label(&table, 0.5), "grass");
        assert_eq!(label(&table, 0.85), "rock");
        assert_eq!(label(&table, 0.9), "snow");
        assert_eq!(label(&table, 1.0), "snow");
    }

    #[test]
    fn test_every_unit_value_has_exactly_one_region() {
        let table = RegionTable::default();
        for i in 0..=10_000 {
            let h = i as f64 / 10_000.0;
            let region = classify(h, &table).expect("unit interval must be covered");

            // Exactly one band: h is above every earlier threshold.
            let position = table
                .regions()
                .iter()
                .position(|r| r.label == region.label)
                .unwrap();
            assert!(h <= region.threshold);
            if position > 0 {
                assert!(h > table.regions()[position - 1].threshold);
            }
        }
    }

    #[test]
    fn test_nan_and_overflow_are_unclassified() {
        let table = RegionTable::default();
        assert!(table.classify(f64::NAN).is_none());
        assert!(table.classify(1.01).is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            RegionTable::new(Vec::new()),
            Err(ConfigurationError::EmptyRegionTable)
        );
    }

    #[test]
    fn test_incomplete_coverage_rejected() {
        let regions = vec![
            Region::new("low", [0, 0, 0], 0.5),
            Region::new("high", [255, 255, 255], 0.9),
        ];
        assert_eq!(
            RegionTable::new(regions),
            Err(ConfigurationError::IncompleteCoverage(0.9))
        );
    }

    #[test]
    fn test_unsorted_rejected() {
        let regions = vec![
            Region::new("a", [0, 0, 0], 0.6),
            Region::new("b", [0, 0, 0], 0.3),
            Region::new("c", [0, 0, 0], 1.0),
        ];
        assert!(matches!(
            RegionTable::new(regions),
            Err(ConfigurationError::UnsortedRegionTable { ref label, .. }) if label == "b"
        ));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let regions = vec![
            Region::new("a", [0, 0, 0], f64::NAN),
            Region::new("b", [0, 0, 0], 1.0),
        ];
        assert!(matches!(
            RegionTable::new(regions),
            Err(ConfigurationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_threshold_above_one_accepted() {
        let regions = vec![Region::new("all", [1, 2, 3], 2.0)];
        let table = RegionTable::new(regions).unwrap();
        assert_eq!(label(&table, 1.5), "all");
    }

    #[test]
    fn test_classify_index_agrees_with_classify() {
        let table = RegionTable::default();
        for h in [0.0, 0.4, 0.41, 0.45, 0.59, 0.85, 1.0, 1.5, f64::NAN] {
            let by_index = table.classify_index(h).map(|i| &table.regions()[i]);
            assert_eq!(by_index, table.classify(h), "Disagreement at {h}");
        }
        assert_eq!(table.classify_index(0.42), Some(1));
    }
}
