use crate::domain::ports::ScoreSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngExt, SeedableRng};
use std::ops::RangeInclusive;

/// Uniform scores drawn from any `rand` generator.
pub struct RandomScores<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomScores<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomScores<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomScores<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScoreSource for RandomScores<R> {
    fn next_score(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.random_range(range)
    }
}
