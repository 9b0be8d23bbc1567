//! Deterministic, injectable random source.
//!
//! # Determinism strategy
//!
//! All sampling in the engine — per-pair distances, per-entry congestion,
//! on-demand synthesis — flows through an `AdvisorRng` owned by the caller.
//! Nothing reaches for thread-local or OS randomness, so a run is fully
//! reproducible from its seed: the same seed rebuilds the identical route
//! table, and tests can assert literal output values.
//!
//! `child()` derives independent streams (e.g. one per request) without the
//! parent and child ever sharing state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG handed to the estimator by the caller.
///
/// The type is `!Sync` to prevent accidental sharing across threads — give
/// each concurrent caller its own `AdvisorRng`, derived via [`child`].
///
/// [`child`]: AdvisorRng::child
pub struct AdvisorRng(SmallRng);

impl AdvisorRng {
    pub fn new(seed: u64) -> Self {
        AdvisorRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `AdvisorRng` with a different seed offset — useful for
    /// giving each request its own deterministic stream.
    pub fn child(&mut self, offset: u64) -> AdvisorRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        AdvisorRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
