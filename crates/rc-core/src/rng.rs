//! Seeded random source for scenario generation.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `ScenarioRng`, built from the run's seed, and
//! threads it by `&mut` through every transform that draws randomness
//! (congestion multipliers, event-edge sampling, trigger draws).  There is
//! no global random state, so the same seed and the same sequence of calls
//! always yield the same scenarios.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types (`rng.inner().sample(...)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed
    /// type.  For `f64` this is uniform on `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// `amount` distinct indices drawn uniformly from `0..len`, in sampling
    /// order.
    ///
    /// # Panics
    /// Panics if `amount > len`; callers check the bound first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
