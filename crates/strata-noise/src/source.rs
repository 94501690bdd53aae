//! Selection of the base noise primitive fed into the fractal sum.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::rng::NoiseRng;
use crate::simplex::SimplexNoise;

/// Which coherent-noise primitive a generation call samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    /// [`SimplexNoise`] with a permutation shuffled from the call's PRNG.
    #[default]
    Simplex,
    /// `noise::Perlin` seeded with one `u32` drawn from the call's PRNG.
    Perlin,
}

/// A base noise generator built from the call's PRNG.
#[derive(Clone, Debug)]
pub enum NoiseSource {
    /// Seeded simplex noise.
    Simplex(SimplexNoise),
    /// Seeded Perlin noise.
    Perlin(Perlin),
}

impl NoiseSource {
    /// Build the generator for `kind`, advancing `rng`.
    ///
    /// Must be called after octave offsets are drawn so total consumption per
    /// call is fixed: one 256-entry shuffle for simplex, one `u32` for Perlin.
    pub fn from_rng(kind: NoiseKind, rng: &mut NoiseRng) -> Self {
        match kind {
            NoiseKind::Simplex => Self::Simplex(SimplexNoise::from_rng(rng)),
            NoiseKind::Perlin => Self::Perlin(Perlin::new(rng.next_u32())),
        }
    }
}

impl NoiseFn<f64, 2> for NoiseSource {
    fn get(&self, point: [f64; 2]) -> f64 {
        match self {
            Self::Simplex(n) => n.get(point),
            Self::Perlin(n) => n.get(point),
        }
    }
}
