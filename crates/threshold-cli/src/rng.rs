//! Production RNG backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use threshold_core::rng::DeterministicRng;

/// `DeterministicRng` over `rand`'s standard generator.
#[derive(Debug)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Seeds from the operating system's entropy source.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Seeds from a fixed value for a reproducible sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
