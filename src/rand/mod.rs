//! Uniform random sources.
//!
//! Generation draws every index through [`Source`], so callers decide where
//! the randomness comes from: the OS generator in production, a seeded one
//! for reproducible output and tests.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// A uniform source of indices.
pub trait Source {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> Source for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Name of the source in use, for display.
pub fn source_name(seed: Option<u64>) -> &'static str {
    match seed {
        Some(_) => "seeded (StdRng)",
        None => "OS CSPRNG",
    }
}

/// Cryptographically secure generator backed by the operating system.
pub fn csprng() -> OsRng {
    OsRng
}

/// Deterministic generator for reproducible output.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pick the source for a run: seeded when a seed is given, OS otherwise.
pub fn for_seed(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(seeded(seed)),
        None => Box::new(csprng()),
    }
}
