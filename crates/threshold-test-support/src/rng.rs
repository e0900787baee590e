//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use threshold_core::rng::DeterministicRng;

/// An RNG that returns the same value on every call, ignoring the requested
/// range. Used to force a specific branch of the check.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub u32);

impl DeterministicRng for FixedRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.0
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that drive several checks through
/// one RNG.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Returns how many values have been handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
