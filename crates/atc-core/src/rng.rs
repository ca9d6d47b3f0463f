//! The simulation's single seeded RNG.
//!
//! # Determinism strategy
//!
//! Every random draw in a run (fuel loads, spawn-time jitter, emergency
//! selection and emergency kind) goes through one `SimRng` owned by the
//! engine.  Draws happen in a fixed order inside the tick pipeline, so the
//! same seed and the same parameters always reproduce the same run.
//!
//! `SimRng` is not `Clone`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// One draw from `N(0, std_dev)`.
    ///
    /// A zero (or negative) `std_dev` returns exactly `0.0` and consumes no
    /// randomness, so disabling jitter does not shift the rest of the stream.
    #[inline]
    pub fn gaussian(&mut self, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return 0.0;
        }
        let z: f64 = self.0.sample(StandardNormal);
        z * std_dev
    }

    /// Choose `amount` distinct indices from `0..len`, uniformly and without
    /// replacement.  `amount` is capped at `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        if amount == 0 {
            return Vec::new();
        }
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
