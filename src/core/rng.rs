//! Seeded randomness for the search agents.
//!
//! `SearchRng` wraps ChaCha8 behind the two operations the engine needs:
//! uniform index picks and slice choices. `fork` splits off an independent
//! stream whose seed mixes the parent seed with a running fork counter, so
//! one configured seed replays an entire search, rollouts included.
//!
//! ```
//! use shologuti::core::SearchRng;
//!
//! let mut a = SearchRng::new(7);
//! let mut b = SearchRng::new(7);
//!
//! // forks replay too: same parent seed, same fork order, same streams
//! let picks: Vec<_> = (0..8).map(|_| a.fork().gen_range_usize(0..100)).collect();
//! let again: Vec<_> = (0..8).map(|_| b.fork().gen_range_usize(0..100)).collect();
//! assert_eq!(picks, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded, forkable random stream.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl SearchRng {
    /// Stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), seed, forks: 0 }
    }

    /// Split off an independent child stream.
    ///
    /// The child seed mixes the parent seed with a per-parent fork count,
    /// so fork order alone determines every child stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(0x9E3779B97F4A7C15)))
    }

    /// Uniform pick from `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform pick from `slice`, `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
