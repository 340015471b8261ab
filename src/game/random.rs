//! Injectable randomness for hint selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices
pub trait RandomSource {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// `RandomSource` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng>(R);

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the thread RNG
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_rng(&mut rand::rng()))
    }

    /// Reproducible generator for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded generator when `seed` is given, otherwise entropy-seeded
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Default for RngSource<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}
