//! Random source abstraction for phrasing selection
//!
//! The composer never touches a global RNG. Callers hand it a
//! [`RandomSource`]: an OS-seeded one for real runs, a seeded one for
//! reproducible output, or [`ScriptedRandom`] for tests that need a
//! specific template.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the choices the composer makes
pub trait RandomSource: Send {
    /// Pick an index in `0..len`; returns 0 when `len` is 0
    fn pick(&mut self, len: usize) -> usize;

    /// Return true with the given probability (clamped to `0.0..=1.0`)
    fn chance(&mut self, probability: f64) -> bool;
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source; the same seed yields the same choices
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.rng.random_bool(p)
    }
}

/// Pre-scripted choices, consumed in order
///
/// Picks wrap around `len`; once a queue is exhausted `pick` yields 0 and
/// `chance` yields false.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the given pick results
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue the given coin-flip results
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.picks.pop_front().map_or(0, |p| p % len)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
