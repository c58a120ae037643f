//! Noise sources for terrain sampling.
//!
//! Terrain evaluation only needs "a deterministic value in [-1, 1] for a 2D
//! point", so it is written against the [`NoiseSource`] trait. Production
//! code uses simplex noise; tests substitute fixed fields.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use noise::{NoiseFn, Simplex};

/// A deterministic 2D noise field with output in [-1, 1].
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Simplex noise seeded from a seed string.
pub struct SimplexField {
    simplex: Simplex,
}

impl SimplexField {
    pub fn from_seed(seed: &str) -> Self {
        Self {
            simplex: Simplex::new(derive_noise_seed(seed)),
        }
    }
}

impl NoiseSource for SimplexField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }
}

/// Map a seed string onto the generator's integer seed space.
///
/// Hashing keeps every character significant, so seeds sharing a prefix
/// still produce unrelated fields.
pub fn derive_noise_seed(seed: &str) -> u32 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish() as u32
}
