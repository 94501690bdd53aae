//! End-to-end generation: validate, synthesize, normalize.

use std::time::Instant;

use noise::NoiseFn;

use crate::error::ConfigurationError;
use crate::fractal::{synthesize, synthesize_with};
use crate::grid::NoiseGrid;
use crate::normalize::normalize;
use crate::params::GenerationParameters;

/// Generate a normalized heightfield for `params`.
///
/// Deterministic: equal parameters give bit-identical grids. Every value lies
/// in `[0, 1]`; unless the raw grid is flat, at least one cell is exactly
/// `0.0` and one exactly `1.0`.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] before any computation if `params` is invalid.
pub fn generate(params: &GenerationParameters) -> Result<NoiseGrid, ConfigurationError> {
    let start = Instant::now();
    let grid = normalize(synthesize(params)?)?;
    log_generated(params, &grid, start);
    Ok(grid)
}

/// Like [`generate`], but summing a caller-supplied base noise.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] before any computation if `params` is
/// invalid, or [`ConfigurationError::NonFiniteSample`] if `noise` yields a
/// NaN or infinite value.
pub fn generate_with<N>(
    params: &GenerationParameters,
    noise: N,
) -> Result<NoiseGrid, ConfigurationError>
where
    N: NoiseFn<f64, 2> + Sync,
{
    let start = Instant::now();
    let grid = normalize(synthesize_with(params, noise)?)?;
    log_generated(params, &grid, start);
    Ok(grid)
}

fn log_generated(params: &GenerationParameters, grid: &NoiseGrid, start: Instant) {
    if let Some(extent) = grid.raw_extent() {
        tracing::debug!(
            width = params.width,
            height = params.height,
            octaves = params.octaves,
            seed = params.seed,
            raw_min = extent.min,
            raw_max = extent.max,
            elapsed_us = start.elapsed().as_micros() as u64,
            "generated heightfield"
        );
    }
}
