//! Random source abstraction used by every stochastic operation.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The three draws the genetic operators need
pub trait GeneRng {
    /// Continuous uniform draw in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Discrete uniform draw in `{0, 1}`
    fn binary(&mut self) -> u8;

    /// Discrete uniform draw in `[0, bound)`. `bound` must be non-zero.
    fn uniform_int(&mut self, bound: usize) -> usize;
}

impl<R: Rng> GeneRng for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn binary(&mut self) -> u8 {
        self.gen_range(0..=1)
    }

    fn uniform_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Deterministic generator for reproducible runs
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
