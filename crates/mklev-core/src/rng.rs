//! Seeded random number generation.
//!
//! All randomness in a generation run flows through one `GameRng`, so a
//! fixed seed reproduces the same level byte for byte.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source.
///
/// Wraps a `ChaCha8Rng` and exposes the two classic roguelike primitives:
/// `rn2(n)` for `0..n` and `rnd(n)` for `1..=n`.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `0..n`. Returns 0 when `n <= 0`.
    pub fn rn2(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw from `1..=n`. Returns 0 when `n <= 0`.
    pub fn rnd(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// True with probability 1/n.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.rn2(n) == 0
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
