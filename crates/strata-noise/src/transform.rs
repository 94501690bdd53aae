//! Consumer-side height remapping and vertex displacement.
//!
//! The engine always returns normalized heights; how they become display or
//! displacement values is a policy the caller picks from a closed set.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::grid::NoiseGrid;

/// Elementwise mapping applied to a normalized height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum HeightTransform {
    /// `f(h) = h`.
    #[default]
    Identity,
    /// `f(h) = h^k`. Exponents above 1 flatten lowlands and sharpen peaks.
    Power(f64),
    /// `f(h) = round(h * n) / n`, producing `n + 1` terraces.
    Quantize(u32),
}

impl HeightTransform {
    /// Check the transform parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTransform`] for a non-positive or
    /// non-finite exponent, or zero quantization steps.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match *self {
            Self::Identity => Ok(()),
            Self::Power(k) if k.is_finite() && k > 0.0 => Ok(()),
            Self::Power(k) => Err(ConfigurationError::InvalidTransform(format!(
                "power exponent must be positive and finite, got {k}"
            ))),
            Self::Quantize(0) => Err(ConfigurationError::InvalidTransform(
                "quantize needs at least one step".to_string(),
            )),
            Self::Quantize(_) => Ok(()),
        }
    }

    /// Map one normalized height.
    #[inline]
    pub fn apply(&self, h: f64) -> f64 {
        match *self {
            Self::Identity => h,
            Self::Power(k) => h.powf(k),
            Self::Quantize(n) => {
                let n = f64::from(n);
                (h * n).round() / n
            }
        }
    }

    /// Per-cell Z displacement `apply(h) * max_height`, in grid order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the transform or `max_height` is invalid.
    pub fn displacements(
        &self,
        grid: &NoiseGrid,
        max_height: f64,
    ) -> Result<Vec<f32>, ConfigurationError> {
        self.validate()?;
        if !max_height.is_finite() {
            return Err(ConfigurationError::NonFinite {
                name: "max_height",
                value: max_height,
            });
        }
        Ok(grid
            .values()
            .iter()
            .map(|&h| (self.apply(h) * max_height) as f32)
            .collect())
    }
}
