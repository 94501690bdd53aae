//! Immutable input to a generation call.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::fractal::BASE_FREQUENCY;
use crate::offsets::OFFSET_RANGE;
use crate::source::NoiseKind;

/// Shape parameters for one heightfield.
///
/// Regenerating is another call with a new value; nothing is mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Zoom factor into the noise. Larger values give broader features.
    pub scale: f64,
    /// Number of noise layers summed per cell.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves. Values outside
    /// `(0, 1]` are accepted but make higher octaves dominate.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves. Values below `1.0`
    /// are accepted but make higher octaves coarser instead of finer.
    pub lacunarity: f64,
    /// Horizontal scroll through the noise field.
    pub offset_x: f64,
    /// Vertical scroll through the noise field.
    pub offset_y: f64,
    /// Seed for the call's random stream.
    pub seed: u64,
    /// Base noise primitive.
    pub noise: NoiseKind,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 10.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset_x: 0.0,
            offset_y: 0.0,
            seed: 12345,
            noise: NoiseKind::Simplex,
        }
    }
}

impl GenerationParameters {
    /// Check every precondition of a generation call.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: zero dimensions, zero octaves,
    /// a zero or non-finite scale, a non-finite shape parameter, or an
    /// octave stack whose amplitude or sample coordinates overflow.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigurationError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.octaves == 0 {
            return Err(ConfigurationError::ZeroOctaves);
        }
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(ConfigurationError::InvalidScale(self.scale));
        }

        let reals = [
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { name, value });
            }
        }

        self.check_octave_stack()?;

        if self.persistence <= 0.0 || self.persistence > 1.0 || self.lacunarity < 1.0 {
            tracing::debug!(
                persistence = self.persistence,
                lacunarity = self.lacunarity,
                "non-standard fractal shape parameters"
            );
        }

        Ok(())
    }

    /// Step through the octaves with the sampler's arithmetic and fail at the
    /// first one whose amplitude sum or farthest sample coordinate is not
    /// finite. The factor of two covers the normalized range `max - min`.
    fn check_octave_stack(&self) -> Result<(), ConfigurationError> {
        let reach = f64::from(self.width.max(self.height)) / 2.0 / self.scale.abs();
        if !reach.is_finite() {
            return Err(ConfigurationError::InvalidScale(self.scale));
        }
        let shift = f64::from(OFFSET_RANGE) + self.offset_x.abs().max(self.offset_y.abs());

        let overflow = |name, octave| ConfigurationError::OctaveOverflow {
            name,
            octave,
            octaves: self.octaves,
        };

        let mut amplitude: f64 = 1.0;
        let mut frequency = BASE_FREQUENCY;
        let mut amplitude_sum = 0.0;
        for octave in 0..self.octaves {
            amplitude_sum += amplitude.abs();
            if !(2.0 * amplitude_sum).is_finite() {
                return Err(overflow("persistence", octave));
            }
            if !(reach * frequency + shift).is_finite() {
                return Err(overflow("lacunarity", octave));
            }
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        Ok(())
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
