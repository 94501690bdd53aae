//! 2D simplex noise over a permutation table shuffled from a [`NoiseRng`].
//!
//! Sampling is skewed onto a triangular lattice, so there are no axis-aligned
//! seams at integer coordinates. Output lies in approximately `[-1, 1]`.

use noise::NoiseFn;

use crate::rng::NoiseRng;

/// Skew factor `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// Scales the summed corner contributions into `[-1, 1]`.
const OUTPUT_SCALE: f64 = 70.0;

const GRADIENTS: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Seeded 2D simplex noise.
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Build a permutation table by shuffling `0..=255` with `rng`.
    ///
    /// Consumes the stream exactly as one 256-entry Fisher-Yates shuffle does.
    pub fn from_rng(rng: &mut NoiseRng) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        rng.shuffle(&mut table);

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);
        Self { perm }
    }

    /// Build a standalone generator from its own seed.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(&mut NoiseRng::new(seed))
    }

    /// Sample the noise field at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Which of the two triangles of the skewed cell contains the point.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let g0 = self.gradient(ii, jj);
        let g1 = self.gradient(ii + i1, jj + j1);
        let g2 = self.gradient(ii + 1, jj + 1);

        let n0 = corner(g0, x0, y0);
        let n1 = corner(g1, x1, y1);
        let n2 = corner(g2, x2, y2);

        OUTPUT_SCALE * (n0 + n1 + n2)
    }

    fn gradient(&self, i: usize, j: usize) -> [f64; 2] {
        let hash = self.perm[i + self.perm[j] as usize];
        GRADIENTS[(hash % 12) as usize]
    }
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("perm", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl NoiseFn<f64, 2> for SimplexNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

/// Radially attenuated contribution of one simplex corner.
#[inline]
fn corner(gradient: [f64; 2], x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (gradient[0] * x + gradient[1] * y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = SimplexNoise::new(42);
        let b = SimplexNoise::new(42);
        for i in 0..200 {
            let x = i as f64 * 0.37 - 20.0;
            let y = i as f64 * -0.53 + 11.0;
            assert_eq!(a.sample(x, y).to_bits(), b.sample(x, y).to_bits());
        }
    }

    #[test]
    fn test_different_seeds_different_field() {
        let a = SimplexNoise::new(1);
        let b = SimplexNoise::new(2);
        let differing = (0..100)
            .filter(|&i| {
                let p = i as f64 * 0.71 + 0.3;
                a.sample(p, -p) != b.sample(p, -p)
            })
            .count();
        assert!(differing > 50, "Only {differing}/100 samples differ");
    }

    #[test]
    fn test_output_in_unit_range() {
        let noise = SimplexNoise::new(7);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for yi in 0..200 {
            for xi in 0..200 {
                let v = noise.sample(xi as f64 * 0.113, yi as f64 * 0.097);
                min = min.min(v);
                max = max.max(v);
            }
        }

        assert!(min >= -1.0 && max <= 1.0, "Range [{min}, {max}] exceeds [-1, 1]");
        assert!(min < -0.5 && max > 0.5, "Range [{min}, {max}] is suspiciously narrow");
    }

    #[test]
    fn test_continuous_across_integer_coordinates() {
        let noise = SimplexNoise::new(11);
        let step = 1e-4;

        for k in -20..20 {
            for &y in &[0.25, 3.0, -7.5] {
                let x = k as f64;
                let before = noise.sample(x - step, y);
                let after = noise.sample(x + step, y);
                let delta = (after - before).abs();
                assert!(delta < 0.01, "Jump of {delta} across x = {x}, y = {y}");

                let before = noise.sample(y, x - step);
                let after = noise.sample(y, x + step);
                let delta = (after - before).abs();
                assert!(delta < 0.01, "Jump of {delta} across y = {x}, x = {y}");
            }
        }
    }

    #[test]
    fn test_large_negative_coordinates_wrap() {
        let noise = SimplexNoise::new(3);
        let v = noise.sample(-100_000.25, -99_999.75);
        assert!(v.is_finite() && v.abs() <= 1.0);
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let noise = SimplexNoise::new(5);
        assert_eq!(noise.get([1.5, -2.25]), noise.sample(1.5, -2.25));
    }
}
