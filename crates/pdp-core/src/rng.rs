//! Deterministic RNG for scenario generation and experiment replication.
//!
//! A batch experiment runs the same scenario family `R` times.  Replication
//! `i` derives its seed as
//!
//!   seed_i = master_seed XOR (i * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive replication indices across the seed space, so
//! adding replications never changes the seeds of existing ones.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seed for replication `index` of an experiment seeded with `master_seed`.
#[inline]
pub fn replication_seed(master_seed: u64, index: u64) -> u64 {
    master_seed ^ index.wrapping_mul(MIXING_CONSTANT)
}

/// Seeded RNG used by scenario generators.
///
/// One `SimRng` per generated scenario, seeded through [`replication_seed`]
/// so replications never share a stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample from `range`.  Panics on an empty range, like
    /// [`Rng::gen_range`].
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
