use std::ops::RangeInclusive;

/// Source of grade scores. Production draws at random, tests inject fixed sequences.
pub trait ScoreSource {
    fn next_score(&mut self, range: RangeInclusive<i32>) -> i32;
}
