//! Injectable uniform random sources.
//!
//! # Determinism strategy
//!
//! Every model instance owns exactly one [`UniformSource`].  Nothing is
//! global, so concurrently running instances never interleave draws.
//!
//! Sweep runs derive their seeds as:
//!
//!   seed = global_seed XOR (run_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run indices uniformly across the seed space.
//! A run's stream therefore depends only on its index, never on which
//! thread executed it or in what order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A source of uniform draws on `[0, 1)`.
///
/// The dynamics and boundary engines compare draws against velocities and
/// boundary probabilities, so a draw of `0.0` always "succeeds" whenever the
/// threshold is positive and a draw close to `1.0` almost never does.
pub trait UniformSource {
    /// Next draw, uniformly distributed on `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Per-run deterministic RNG.
///
/// Create one per model instance.  The type is `Send` but deliberately not
/// shared: each Rayon worker builds its own from a derived seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs built this way are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seed deterministically from a sweep's global seed and a run index.
    pub fn for_run(global_seed: u64, run: u64) -> Self {
        Self::new(global_seed ^ run.wrapping_mul(MIXING_CONSTANT))
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        // `Standard` for f64 samples [0, 1).
        self.0.r#gen::<f64>()
    }
}

// ── Deterministic sources ─────────────────────────────────────────────────────

/// Returns the same value on every draw.
///
/// `FixedUniform(0.0)` forces every probabilistic event with a positive
/// threshold to fire; `FixedUniform(1.0)` suppresses all of them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedUniform(pub f64);

impl UniformSource for FixedUniform {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, cycling back to the start when exhausted.
///
/// An empty script behaves like `FixedUniform(0.0)`.
#[derive(Clone, Debug)]
pub struct ScriptedUniform {
    draws:  Vec<f64>,
    cursor: usize,
}

impl ScriptedUniform {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far (not wrapped).
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
