//! Seedable random number generation for card draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Uniform**: Index selection is uniform over the current pool
//!
//! ## Usage
//!
//! ```
//! use deck_draw::core::DrawRng;
//!
//! let mut rng = DrawRng::new(42);
//! let mut replay = DrawRng::new(42);
//!
//! assert_eq!(rng.pick_index(10), replay.pick_index(10));
//! assert_eq!(rng.pick_index(0), None);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to pick cards out of the pool.
///
/// Uses ChaCha8 for speed while keeping high-quality uniform output.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create an RNG from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick an index uniformly in `[0, len)`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DrawRng::new(42);
        let mut rng2 = DrawRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(1000), rng2.pick_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DrawRng::new(1);
        let mut rng2 = DrawRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = DrawRng::new(7);

        for len in 1..50 {
            let idx = rng.pick_index(len).unwrap();
            assert!(idx < len);
        }
        assert_eq!(rng.pick_index(0), None);
    }

    #[test]
    fn test_pick_index_covers_all_slots() {
        let mut rng = DrawRng::new(3);
        let mut seen = [false; 5];

        for _ in 0..200 {
            seen[rng.pick_index(5).unwrap()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_from_seed_or_entropy_keeps_seed() {
        assert_eq!(DrawRng::from_seed_or_entropy(Some(9)).seed(), 9);
    }
}
