//! Multi-octave fractal summation over a base noise function.
//!
//! Each cell sums octaves of noise at growing frequency and shrinking
//! amplitude. Sample coordinates are taken relative to the grid center, so a
//! fixed `scale` frames the same features regardless of grid resolution.

use noise::NoiseFn;
use rayon::prelude::*;

use crate::error::ConfigurationError;
use crate::grid::NoiseGrid;
use crate::offsets::OctaveOffsets;
use crate::params::GenerationParameters;
use crate::rng::NoiseRng;
use crate::source::NoiseSource;

/// Frequency of the first octave.
pub const BASE_FREQUENCY: f64 = 2.5;

/// Evaluates the fractal sum at integer grid cells.
pub struct FractalSampler<N> {
    noise: N,
    offsets: OctaveOffsets,
    scale: f64,
    persistence: f64,
    lacunarity: f64,
    half_width: f64,
    half_height: f64,
}

impl<N: NoiseFn<f64, 2>> FractalSampler<N> {
    /// Create a sampler for the grid described by `params`.
    ///
    /// `params` is assumed validated; [`synthesize`] and [`synthesize_with`]
    /// do so before building a sampler.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::OffsetCountMismatch`] unless `offsets`
    /// holds exactly `params.octaves` pairs.
    pub fn new(
        noise: N,
        offsets: OctaveOffsets,
        params: &GenerationParameters,
    ) -> Result<Self, ConfigurationError> {
        if offsets.len() != params.octaves as usize {
            return Err(ConfigurationError::OffsetCountMismatch {
                expected: params.octaves,
                actual: offsets.len(),
            });
        }
        Ok(Self {
            noise,
            offsets,
            scale: params.scale,
            persistence: params.persistence,
            lacunarity: params.lacunarity,
            half_width: f64::from(params.width) / 2.0,
            half_height: f64::from(params.height) / 2.0,
        })
    }

    /// Raw fractal value at cell `(x, y)`.
    ///
    /// The theoretical range is `[-A, A]` where `A` is
    /// [`FractalSampler::max_amplitude`].
    pub fn sample(&self, x: u32, y: u32) -> f64 {
        let cx = (f64::from(x) - self.half_width) / self.scale;
        let cy = (f64::from(y) - self.half_height) / self.scale;

        let mut amplitude = 1.0;
        let mut frequency = BASE_FREQUENCY;
        let mut total = 0.0;

        for &(off_x, off_y) in self.offsets.as_slice() {
            let sample_x = cx * frequency + off_x;
            let sample_y = cy * frequency + off_y;
            total += self.noise.get([sample_x, sample_y]) * amplitude;

            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        total
    }

    /// Sum of octave amplitudes (geometric series in `persistence`).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp: f64 = 1.0;
        for _ in 0..self.offsets.len() {
            sum += amp.abs();
            amp *= self.persistence;
        }
        sum
    }

    /// The per-octave offsets this sampler uses.
    pub fn offsets(&self) -> &OctaveOffsets {
        &self.offsets
    }
}

impl<N: NoiseFn<f64, 2> + Sync> FractalSampler<N> {
    /// Fill a `width * height` grid, one row per rayon task.
    pub fn fill(&self, width: u32, height: u32) -> NoiseGrid {
        let mut values = vec![0.0; width as usize * height as usize];
        values
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.sample(x as u32, y as u32);
                }
            });
        NoiseGrid::from_raw(width, height, values)
    }
}

/// Compute the raw, un-normalized fractal grid for `params`.
///
/// PRNG consumption order: `2 * octaves` offset draws, then the base noise
/// permutation (see [`NoiseSource::from_rng`]).
///
/// # Errors
///
/// Returns a [`ConfigurationError`] before any sampling if `params` is invalid.
pub fn synthesize(params: &GenerationParameters) -> Result<NoiseGrid, ConfigurationError> {
    params.validate()?;
    let mut rng = NoiseRng::new(params.seed);
    let offsets = derive_offsets(params, &mut rng);
    let noise = NoiseSource::from_rng(params.noise, &mut rng);
    let sampler = FractalSampler::new(noise, offsets, params)?;
    Ok(sampler.fill(params.width, params.height))
}

/// Like [`synthesize`], but sampling a caller-supplied base noise.
///
/// Offsets are still drawn from the seed; `params.noise` is ignored.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] before any sampling if `params` is invalid.
pub fn synthesize_with<N>(
    params: &GenerationParameters,
    noise: N,
) -> Result<NoiseGrid, ConfigurationError>
where
    N: NoiseFn<f64, 2> + Sync,
{
    params.validate()?;
    let mut rng = NoiseRng::new(params.seed);
    let offsets = derive_offsets(params, &mut rng);
    let sampler = FractalSampler::new(noise, offsets, params)?;
    Ok(sampler.fill(params.width, params.height))
}

fn derive_offsets(params: &GenerationParameters, rng: &mut NoiseRng) -> OctaveOffsets {
    OctaveOffsets::derive(params.octaves, params.offset_x, params.offset_y, rng)
}
