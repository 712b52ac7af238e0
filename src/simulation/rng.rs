//! Injectable randomness for obstacle draws and scan picks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Capability interface over the two draws the simulation makes.
///
/// Abstracting the generator lets tests supply deterministic sequences
/// instead of sampling statistically.
pub trait RandomSource {
    /// Uniform draw in [0, 1).
    fn chance(&mut self) -> f64;

    /// Uniform index in [0, n). `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Thread-local generator, the non-deterministic default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn chance(&mut self) -> f64 {
        rand::rng().random_range(0.0..1.0)
    }

    fn pick(&mut self, n: usize) -> usize {
        rand::rng().random_range(0..n)
    }
}

/// Seeded generator for reproducible demonstration runs.
#[derive(Debug, Clone)]
pub struct SeededRandom(SmallRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn chance(&mut self) -> f64 {
        self.0.random_range(0.0..1.0)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}
