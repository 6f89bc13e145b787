//! Demand sources: the only nondeterminism in a simulation run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lower bound (inclusive) of a day's demand draw.
pub const MIN_DAILY_DEMAND: u64 = 1;

/// Upper bound (inclusive) of a day's demand draw.
pub const MAX_DAILY_DEMAND: u64 = 15;

/// Supplies the quantity requested of an item on a given day.
pub trait DemandSource {
    /// Next integer in the inclusive range `[lo, hi]`.
    fn next_in(&mut self, lo: u64, hi: u64) -> u64;
}

impl<T: DemandSource + ?Sized> DemandSource for &mut T {
    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        (**self).next_in(lo, hi)
    }
}

impl<T: DemandSource + ?Sized> DemandSource for Box<T> {
    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        (**self).next_in(lo, hi)
    }
}

/// Uniform demand backed by a `rand` generator.
///
/// Defaults to `ChaCha8Rng` so that a seed reproduces the same run on every
/// platform.
#[derive(Debug, Clone)]
pub struct RandomDemand<R = ChaCha8Rng> {
    rng: R,
}

impl RandomDemand<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomDemand<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DemandSource for RandomDemand<R> {
    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays a fixed sequence of demands, cycling when exhausted.
///
/// Values are returned verbatim and are **not** clamped to the requested
/// bounds, so scripted scenarios can exercise demands above the usual range.
/// An empty sequence always yields `lo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDemand {
    values: Vec<u64>,
    cursor: usize,
}

impl SequenceDemand {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same demand.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl DemandSource for SequenceDemand {
    fn next_in(&mut self, lo: u64, _hi: u64) -> u64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return lo;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
