//! Seeded fractal heightfield synthesis: PRNG, octave offsets, simplex noise,
//! multi-octave summation, min/max normalization, and region classification.

mod error;
mod fractal;
mod grid;
mod normalize;
mod offsets;
mod paint;
mod params;
mod pipeline;
mod region;
mod rng;
mod simplex;
mod source;
mod transform;

pub use error::ConfigurationError;
pub use fractal::{BASE_FREQUENCY, FractalSampler, synthesize, synthesize_with};
pub use grid::NoiseGrid;
pub use normalize::{Extent, FLAT_HEIGHT, normalize};
pub use offsets::{OFFSET_RANGE, OctaveOffsets};
pub use paint::{paint_grayscale, paint_regions};
pub use params::GenerationParameters;
pub use pipeline::{generate, generate_with};
pub use region::{Region, RegionTable, classify, default_regions};
pub use rng::NoiseRng;
pub use simplex::SimplexNoise;
pub use source::{NoiseKind, NoiseSource};
pub use transform::HeightTransform;

pub use noise::NoiseFn;
