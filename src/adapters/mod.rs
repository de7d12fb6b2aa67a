// Adapters layer: concrete implementations for the outside world (rng, terminal).

pub mod random;
pub mod terminal;
